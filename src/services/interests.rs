// src/services/interests.rs

//! Interest list extractor.
//!
//! Interest cells carry one of a handful of fixed pixel widths and no other
//! structural marker, so the scan covers every `<td>` in the document rather
//! than a classified table.

use scraper::Html;

use crate::models::{Character, RuleSet};
use crate::utils::dom;

/// Collects interest cells from the whole page.
pub struct InterestExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> InterestExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Width-matched cells whose text is a known interest item, in document
    /// order, duplicates allowed, joined with ", ".
    pub fn extract(&self, doc: &Html, character: &mut Character) {
        let mut interests: Vec<String> = Vec::new();

        for cell in dom::find_all(doc.root_element(), "td") {
            if !dom::has_any_style_width(cell, &self.rules.interest_widths) {
                continue;
            }

            let text = dom::text_of(cell).trim().to_string();
            if self.rules.is_excluded(&text) || !self.rules.is_interest(&text) {
                continue;
            }

            interests.push(text);
        }

        character.interest = interests.join(", ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Character {
        let doc = Html::parse_document(html);
        let rules = RuleSet::default();
        let mut character = Character::default();
        InterestExtractor::new(&rules).extract(&doc, &mut character);
        character
    }

    fn cell(width: &str, text: &str) -> String {
        format!(r#"<td style="width:{width}">{text}</td>"#)
    }

    #[test]
    fn test_collects_vocabulary_cells_in_order() {
        let html = format!(
            "<table><tr>{}{}{}{}{}</tr></table>",
            cell("60px", "興味"),
            cell("53px", "武具"),
            cell("52px", "ー"),
            cell("51px", "書物"),
            cell("50px", "-"),
        );
        // Header word, dashes, and empties are excluded; order is preserved.
        assert_eq!(extract(&html).interest, "武具, 書物");
    }

    #[test]
    fn test_ignores_unmatched_widths() {
        let html = format!(
            "<table><tr>{}{}</tr></table>",
            cell("70px", "武具"),
            cell("53px", "名馬"),
        );
        assert_eq!(extract(&html).interest, "名馬");
    }

    #[test]
    fn test_rejects_text_outside_vocabulary() {
        let html = format!("<table><tr>{}</tr></table>", cell("60px", "謎の品"));
        assert!(extract(&html).interest.is_empty());
    }

    #[test]
    fn test_spans_multiple_tables() {
        let html = format!(
            "<table><tr>{}</tr></table><table><tr>{}</tr></table>",
            cell("60px", "酒"),
            cell("50px", "音楽"),
        );
        assert_eq!(extract(&html).interest, "酒, 音楽");
    }

    #[test]
    fn test_duplicates_allowed() {
        let html = format!(
            "<table><tr>{}{}</tr></table>",
            cell("60px", "酒"),
            cell("60px", "酒"),
        );
        assert_eq!(extract(&html).interest, "酒, 酒");
    }
}
