// src/services/extract.rs

//! Record assembly from one parsed page.

use scraper::Html;

use crate::models::{Character, RuleSet};
use crate::services::{
    InterestExtractor, MoveExtractor, ProfileExtractor, TableClassifier, TableKind,
    TalentExtractor,
};
use crate::utils::dom;

/// Runs every field extractor against a parsed page and assembles the record.
///
/// Each extractor re-scans the document (or the pre-collected table list)
/// independently. A record starts empty and is filled progressively; fields
/// without a matching structure stay at their zero values.
pub struct CharacterExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> CharacterExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Extract a full record. Never fails; see the module contract.
    pub fn extract(&self, doc: &Html) -> Character {
        let mut character = Character::default();

        let classifier = TableClassifier::new(self.rules);
        let profile = ProfileExtractor::new(self.rules);
        let tables = dom::find_all(doc.root_element(), "table");

        profile.extract_name(doc, &mut character);

        for table in &tables {
            match classifier.classify(*table) {
                Some(TableKind::BasicInfo) => profile.extract_basic_info(*table, &mut character),
                Some(TableKind::Ability) => profile.extract_ability_table(*table, &mut character),
                _ => {}
            }
        }

        TalentExtractor::new(self.rules).extract(&tables, &classifier, &mut character);
        InterestExtractor::new(self.rules).extract(doc, &mut character);
        MoveExtractor::new(self.rules).extract(&tables, &classifier, &mut character);

        character
    }
}
