// src/services/classify.rs

//! Table classifier.
//!
//! Officer pages carry many near-identical tables with no ids or classes.
//! A table's role is recognized from keyword presence anywhere in its text
//! content, not in a fixed header row, because header rows are not reliably
//! tagged on this wiki.

use scraper::ElementRef;

use crate::models::RuleSet;
use crate::utils::dom;

/// Structural role assigned to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Courtesy name, death year, and other fixed-position profile cells
    BasicInfo,
    /// The five ability values plus personality and status rows
    Ability,
    /// Unique talent table (talent and effect columns)
    Talent,
    /// Tactic list
    Tactics,
    /// Skill list
    Skills,
}

/// Assigns a [`TableKind`] to tables by keyword presence.
pub struct TableClassifier<'a> {
    rules: &'a RuleSet,
}

impl<'a> TableClassifier<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Classify a table, or `None` when no keyword set matches.
    ///
    /// Categories are checked in a fixed order, so a table matching several
    /// keyword sets gets the earliest role.
    pub fn classify(&self, table: ElementRef) -> Option<TableKind> {
        let text = dom::text_of(table);

        if dom::contains_all(&text, &self.rules.basic_info_headers) {
            Some(TableKind::BasicInfo)
        } else if dom::contains_all(&text, &self.rules.ability_headers) {
            Some(TableKind::Ability)
        } else if self.is_talent_table(&text) {
            Some(TableKind::Talent)
        } else if dom::contains_any(&text, &self.rules.tactics_headers) {
            Some(TableKind::Tactics)
        } else if dom::contains_any(&text, &self.rules.skills_headers) {
            Some(TableKind::Skills)
        } else {
            None
        }
    }

    /// A talent table must mention both a talent header and an effect header.
    /// Tables that mention the talent word incidentally don't qualify.
    pub fn is_talent_table(&self, table_text: &str) -> bool {
        dom::contains_any(table_text, &self.rules.talent_headers)
            && dom::contains_any(table_text, &self.rules.effect_headers)
    }
}
