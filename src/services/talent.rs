// src/services/talent.rs

//! Talent extractor.
//!
//! The talent name is the one cell the wiki highlights with a gold
//! background, inside a table that mentions both the talent and effect
//! headers. Some pages fold that table into another section, so a search
//! over the classified talent tables is followed by a fallback over every
//! table on the page.

use scraper::ElementRef;

use crate::models::{Character, RuleSet};
use crate::services::{TableClassifier, TableKind};
use crate::utils::dom;

/// Finds the gold-highlighted talent cell.
pub struct TalentExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> TalentExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Two-phase search with a short-circuit: tables classified as talent
    /// tables first, then every table. The first hit wins.
    pub fn extract(
        &self,
        tables: &[ElementRef],
        classifier: &TableClassifier,
        character: &mut Character,
    ) {
        let talent = tables
            .iter()
            .filter(|table| classifier.classify(**table) == Some(TableKind::Talent))
            .find_map(|table| self.talent_in_table(*table, classifier))
            .or_else(|| {
                tables
                    .iter()
                    .find_map(|table| self.talent_in_table(*table, classifier))
            });

        if let Some(talent) = talent {
            character.talent = talent;
        }
    }

    /// Trimmed text of the first gold-styled cell, provided the table
    /// carries the talent and effect markers.
    fn talent_in_table(&self, table: ElementRef, classifier: &TableClassifier) -> Option<String> {
        if !classifier.is_talent_table(&dom::text_of(table)) {
            return None;
        }

        for row in dom::find_all(table, "tr") {
            for cell in dom::find_all(row, "td") {
                if dom::has_style_containing(cell, &self.rules.talent_style) {
                    return Some(dom::text_of(cell).trim().to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str) -> Character {
        let doc = Html::parse_document(html);
        let rules = RuleSet::default();
        let classifier = TableClassifier::new(&rules);
        let extractor = TalentExtractor::new(&rules);
        let tables = dom::find_all(doc.root_element(), "table");

        let mut character = Character::default();
        extractor.extract(&tables, &classifier, &mut character);
        character
    }

    #[test]
    fn test_gold_cell_in_talent_table() {
        let c = extract(
            r#"<table>
                <tr><td>奇才</td><td>効果</td></tr>
                <tr><td style="background-color:gold"> 兵法 </td><td>内容</td></tr>
            </table>"#,
        );
        assert_eq!(c.talent, "兵法");
    }

    #[test]
    fn test_first_gold_cell_wins() {
        let c = extract(
            r#"<table>
                <tr><td>奇才</td><td>効果</td></tr>
                <tr><td style="background-color:gold">甲</td>
                    <td style="background-color:gold">乙</td></tr>
            </table>"#,
        );
        assert_eq!(c.talent, "甲");
    }

    #[test]
    fn test_fallback_scans_unclassified_tables() {
        // The gold cell lives in a table that classifies as an ability table,
        // so only the document-wide fallback can find it.
        let c = extract(
            r#"<table>
                <tr><td>統率</td><td>武力</td><td>奇才</td><td>効果</td></tr>
                <tr><td style="background-color:gold">神速</td></tr>
            </table>"#,
        );
        assert_eq!(c.talent, "神速");
    }

    #[test]
    fn test_no_markers_no_talent() {
        // Gold styling alone is not enough without the table markers.
        let c = extract(
            r#"<table>
                <tr><td style="background-color:gold">金色</td></tr>
            </table>"#,
        );
        assert!(c.talent.is_empty());
    }

    #[test]
    fn test_no_gold_cell_no_talent() {
        let c = extract(
            r#"<table>
                <tr><td>奇才</td><td>効果</td></tr>
                <tr><td>兵法</td><td>内容</td></tr>
            </table>"#,
        );
        assert!(c.talent.is_empty());
    }
}
