// src/models/rules.rs

//! Extraction rule tables: header keywords, vocabularies, and style tokens.
//!
//! The wiki tags none of its tables with usable ids or classes, so every
//! structural decision is driven by these keyword sets. They are plain
//! configuration data, injected into the classifier and extractors, so the
//! engine can be exercised against alternative rule sets in tests.

use serde::{Deserialize, Serialize};

/// Keyword sets and style tokens for table classification and cell extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Category header cells filtered out of the tactic list
    #[serde(default = "defaults::tactic_categories")]
    pub tactic_categories: Vec<String>,

    /// Category header cells filtered out of the skill list
    #[serde(default = "defaults::skill_categories")]
    pub skill_categories: Vec<String>,

    /// Vocabulary of acceptable interest items
    #[serde(default = "defaults::interest_items")]
    pub interest_items: Vec<String>,

    /// Vocabulary of personality values
    #[serde(default = "defaults::personality_types")]
    pub personality_types: Vec<String>,

    /// Vocabulary of fame values
    #[serde(default = "defaults::fame_types")]
    pub fame_types: Vec<String>,

    /// Vocabulary of strategy values
    #[serde(default = "defaults::strategy_types")]
    pub strategy_types: Vec<String>,

    /// Pixel widths that mark interest cells
    #[serde(default = "defaults::interest_widths")]
    pub interest_widths: Vec<String>,

    /// Cell texts never accepted as interest items
    #[serde(default = "defaults::exclude_texts")]
    pub exclude_texts: Vec<String>,

    /// Substrings that identify a throttling response or error
    #[serde(default = "defaults::rate_limit_markers")]
    pub rate_limit_markers: Vec<String>,

    /// All of these must appear in a basic-info table
    #[serde(default = "defaults::basic_info_headers")]
    pub basic_info_headers: Vec<String>,

    /// All of these must appear in an ability table
    #[serde(default = "defaults::ability_headers")]
    pub ability_headers: Vec<String>,

    /// Any of these marks a status header row, which carries no data
    #[serde(default = "defaults::status_headers")]
    pub status_headers: Vec<String>,

    /// Any of these, together with an effect header, marks a talent table
    #[serde(default = "defaults::talent_headers")]
    pub talent_headers: Vec<String>,

    /// Required alongside a talent header; guards against incidental mentions
    #[serde(default = "defaults::effect_headers")]
    pub effect_headers: Vec<String>,

    /// Any of these marks a tactics table
    #[serde(default = "defaults::tactics_headers")]
    pub tactics_headers: Vec<String>,

    /// Any of these marks a skills table
    #[serde(default = "defaults::skills_headers")]
    pub skills_headers: Vec<String>,

    /// Style substring on the highlighted talent cell
    #[serde(default = "defaults::talent_style")]
    pub talent_style: String,

    /// Pixel width of tactic and skill name cells
    #[serde(default = "defaults::move_cell_width")]
    pub move_cell_width: String,
}

impl RuleSet {
    pub fn is_personality(&self, text: &str) -> bool {
        self.personality_types.iter().any(|t| t == text)
    }

    pub fn is_fame(&self, text: &str) -> bool {
        self.fame_types.iter().any(|t| t == text)
    }

    pub fn is_strategy(&self, text: &str) -> bool {
        self.strategy_types.iter().any(|t| t == text)
    }

    pub fn is_interest(&self, text: &str) -> bool {
        self.interest_items.iter().any(|t| t == text)
    }

    pub fn is_tactic_category(&self, text: &str) -> bool {
        self.tactic_categories.iter().any(|t| t == text)
    }

    pub fn is_skill_category(&self, text: &str) -> bool {
        self.skill_categories.iter().any(|t| t == text)
    }

    pub fn is_excluded(&self, text: &str) -> bool {
        self.exclude_texts.iter().any(|t| t == text)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            tactic_categories: defaults::tactic_categories(),
            skill_categories: defaults::skill_categories(),
            interest_items: defaults::interest_items(),
            personality_types: defaults::personality_types(),
            fame_types: defaults::fame_types(),
            strategy_types: defaults::strategy_types(),
            interest_widths: defaults::interest_widths(),
            exclude_texts: defaults::exclude_texts(),
            rate_limit_markers: defaults::rate_limit_markers(),
            basic_info_headers: defaults::basic_info_headers(),
            ability_headers: defaults::ability_headers(),
            status_headers: defaults::status_headers(),
            talent_headers: defaults::talent_headers(),
            effect_headers: defaults::effect_headers(),
            tactics_headers: defaults::tactics_headers(),
            skills_headers: defaults::skills_headers(),
            talent_style: defaults::talent_style(),
            move_cell_width: defaults::move_cell_width(),
        }
    }
}

mod defaults {
    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    pub fn tactic_categories() -> Vec<String> {
        strings(&["歩兵", "騎兵", "弓兵", "艦船", "軍略", "補助", "遁甲"])
    }

    pub fn skill_categories() -> Vec<String> {
        strings(&["任務", "智謀", "兵科", "軍事"])
    }

    pub fn interest_items() -> Vec<String> {
        strings(&[
            "武具", "書物", "宝物", "茶器", "名馬", "美術", "酒", "音楽", "詩歌", "絵画", "香",
            "薬草",
        ])
    }

    pub fn personality_types() -> Vec<String> {
        strings(&["豪胆", "冷静", "剛胆", "沈着", "猪突", "温和", "臆病"])
    }

    pub fn fame_types() -> Vec<String> {
        strings(&["無関心", "重視", "文武不問", "武名", "高名"])
    }

    pub fn strategy_types() -> Vec<String> {
        strings(&["好戦", "普通", "積極", "消極", "私欲"])
    }

    pub fn interest_widths() -> Vec<String> {
        strings(&["60px", "53px", "52px", "51px", "50px"])
    }

    pub fn exclude_texts() -> Vec<String> {
        strings(&["ー", "", "興味", "-"])
    }

    pub fn rate_limit_markers() -> Vec<String> {
        strings(&["429", "Too Many Requests"])
    }

    pub fn basic_info_headers() -> Vec<String> {
        strings(&["字", "没年"])
    }

    pub fn ability_headers() -> Vec<String> {
        strings(&["統率", "武力"])
    }

    pub fn status_headers() -> Vec<String> {
        strings(&["重視名声", "物欲", "戦略傾向"])
    }

    pub fn talent_headers() -> Vec<String> {
        strings(&["奇才"])
    }

    pub fn effect_headers() -> Vec<String> {
        strings(&["効果"])
    }

    pub fn tactics_headers() -> Vec<String> {
        strings(&["戦法"])
    }

    pub fn skills_headers() -> Vec<String> {
        strings(&["特技"])
    }

    pub fn talent_style() -> String {
        "background-color:gold".to_string()
    }

    pub fn move_cell_width() -> String {
        "70px".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_membership() {
        let rules = RuleSet::default();
        assert!(rules.is_personality("冷静"));
        assert!(!rules.is_personality("冷静な"));
        assert!(rules.is_fame("武名"));
        assert!(rules.is_strategy("好戦"));
        assert!(rules.is_interest("名馬"));
    }

    #[test]
    fn test_exclusions() {
        let rules = RuleSet::default();
        assert!(rules.is_excluded(""));
        assert!(rules.is_excluded("ー"));
        assert!(rules.is_excluded("興味"));
        assert!(!rules.is_excluded("武具"));
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let rules: RuleSet = toml::from_str("").unwrap();
        assert_eq!(rules.move_cell_width, "70px");
        assert_eq!(rules.interest_widths.len(), 5);
    }
}
