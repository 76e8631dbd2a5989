// src/services/moves.rs

//! Tactic and skill list extractors.
//!
//! Both lists live in tables of the same shape: name cells of a fixed pixel
//! width mixed with category header cells that must be filtered out.

use scraper::ElementRef;

use crate::models::{Character, RuleSet};
use crate::services::{TableClassifier, TableKind};
use crate::utils::dom;

/// Extracts the tactic and skill lists.
pub struct MoveExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> MoveExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Fill both lists from their classified tables, accumulating across
    /// tables in document order and joining with ", ".
    pub fn extract(
        &self,
        tables: &[ElementRef],
        classifier: &TableClassifier,
        character: &mut Character,
    ) {
        let mut tactics: Vec<String> = Vec::new();
        let mut skills: Vec<String> = Vec::new();

        for table in tables {
            match classifier.classify(*table) {
                Some(TableKind::Tactics) => {
                    tactics.extend(self.names_in_table(*table, |text| {
                        self.rules.is_tactic_category(text)
                    }));
                }
                Some(TableKind::Skills) => {
                    skills.extend(
                        self.names_in_table(*table, |text| self.rules.is_skill_category(text)),
                    );
                }
                _ => {}
            }
        }

        character.tactics = tactics.join(", ");
        character.skills = skills.join(", ");
    }

    /// Name cells of the move width, cleaned, with category headers dropped.
    fn names_in_table(
        &self,
        table: ElementRef,
        is_category: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let mut names = Vec::new();

        for row in dom::find_all(table, "tr") {
            for cell in dom::find_all(row, "td") {
                if !dom::has_style_width(cell, &self.rules.move_cell_width) {
                    continue;
                }

                let name = clean_move_text(dom::text_of(cell).trim());
                if !name.is_empty() && !is_category(&name) {
                    names.push(name);
                }
            }
        }

        names
    }
}

/// Strip a parenthetical annotation and surrounding whitespace.
fn clean_move_text(text: &str) -> String {
    let before = text.split_once('(').map_or(text, |(before, _)| before);
    before.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str) -> Character {
        let doc = Html::parse_document(html);
        let rules = RuleSet::default();
        let classifier = TableClassifier::new(&rules);
        let tables = dom::find_all(doc.root_element(), "table");

        let mut character = Character::default();
        MoveExtractor::new(&rules).extract(&tables, &classifier, &mut character);
        character
    }

    fn wide(text: &str) -> String {
        format!(r#"<td style="width:70px">{text}</td>"#)
    }

    #[test]
    fn test_tactics_filtered_and_cleaned() {
        let html = format!(
            "<table><tr><td>戦法</td>{}{}{}</tr></table>",
            wide("騎兵"),
            wide("突撃(強)"),
            wide("一斉射撃"),
        );
        let c = extract(&html);
        // Category header dropped, parenthetical annotation stripped.
        assert_eq!(c.tactics, "突撃, 一斉射撃");
        assert!(c.skills.is_empty());
    }

    #[test]
    fn test_skills_use_their_own_categories() {
        let html = format!(
            "<table><tr><td>特技</td>{}{}</tr></table>",
            wide("任務"),
            wide("看破"),
        );
        let c = extract(&html);
        assert_eq!(c.skills, "看破");
        assert!(c.tactics.is_empty());
    }

    #[test]
    fn test_ignores_other_widths() {
        let html = format!(
            r#"<table><tr><td>戦法</td><td style="width:60px">幻術</td>{}</tr></table>"#,
            wide("火計"),
        );
        assert_eq!(extract(&html).tactics, "火計");
    }

    #[test]
    fn test_accumulates_across_tables() {
        let html = format!(
            "<table><tr><td>戦法</td>{}</tr></table><table><tr><td>戦法</td>{}</tr></table>",
            wide("火計"),
            wide("水計"),
        );
        assert_eq!(extract(&html).tactics, "火計, 水計");
    }

    #[test]
    fn test_empty_after_cleaning_dropped() {
        let html = format!("<table><tr><td>戦法</td>{}</tr></table>", wide("(注記のみ)"));
        assert!(extract(&html).tactics.is_empty());
    }

    #[test]
    fn test_clean_move_text() {
        assert_eq!(clean_move_text("突撃(強)"), "突撃");
        assert_eq!(clean_move_text("突撃"), "突撃");
        assert_eq!(clean_move_text("突撃 (弱)"), "突撃");
    }
}
