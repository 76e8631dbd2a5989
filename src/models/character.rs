// src/models/character.rs

//! Officer record data structure.

use serde::{Deserialize, Serialize};

/// One officer record assembled from a biography page.
///
/// Fields serialize under the Japanese column names used by the downstream
/// dataset. A field the page does not provide stays at its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Officer name
    #[serde(rename = "名前")]
    pub name: String,

    /// Kana reading of the name
    #[serde(rename = "読み")]
    pub reading: String,

    /// Courtesy name
    #[serde(rename = "字")]
    pub azana: String,

    #[serde(rename = "統率")]
    pub leadership: i32,

    #[serde(rename = "武力")]
    pub force: i32,

    #[serde(rename = "知力")]
    pub intelligence: i32,

    #[serde(rename = "政治")]
    pub politics: i32,

    #[serde(rename = "魅力")]
    pub charm: i32,

    /// Unique talent, present only for officers with a talent table
    #[serde(rename = "奇才")]
    pub talent: String,

    /// Interest list, joined with ", "
    #[serde(rename = "興味")]
    pub interest: String,

    #[serde(rename = "物欲")]
    pub greed: String,

    #[serde(rename = "義理")]
    pub loyalty: i32,

    #[serde(rename = "性格")]
    pub personality: String,

    #[serde(rename = "戦略傾向")]
    pub strategy: String,

    #[serde(rename = "没年")]
    pub death_year: i32,

    /// Death year shifted onto the in-game calendar
    #[serde(rename = "没年-13")]
    pub death_minus_13: i32,

    /// Tactic list, joined with ", "
    #[serde(rename = "戦法")]
    pub tactics: String,

    /// Skill list, joined with ", "
    #[serde(rename = "特技")]
    pub skills: String,

    #[serde(rename = "重視名声")]
    pub fame: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_japanese_keys() {
        let character = Character {
            name: "曹操".to_string(),
            death_year: 220,
            death_minus_13: 207,
            ..Character::default()
        };

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["名前"], "曹操");
        assert_eq!(json["没年"], 220);
        assert_eq!(json["没年-13"], 207);
    }

    #[test]
    fn test_default_is_zero_valued() {
        let character = Character::default();
        assert!(character.name.is_empty());
        assert_eq!(character.leadership, 0);
        assert_eq!(character.death_year, 0);
    }
}
