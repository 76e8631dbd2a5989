// src/services/profile.rs

//! Profile extractors: name, basic info, abilities, and status fields.
//!
//! Values are located by structural proximity inside classified tables.
//! A missing or malformed structure leaves the field at its zero value;
//! extraction itself never fails.

use scraper::{ElementRef, Html};

use crate::models::{Character, RuleSet};
use crate::utils::dom;

/// Extracts the profile sections of a record.
pub struct ProfileExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> ProfileExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Name and reading come from the first `<strong>` on the page, written
    /// as `名前(よみ)`. The text is cut at the first `(` and then at the
    /// first `)`; unless both cuts succeed, both fields stay empty.
    pub fn extract_name(&self, doc: &Html, character: &mut Character) {
        let Some(node) = dom::find_first(doc.root_element(), "strong") else {
            return;
        };
        let text = dom::text_of(node);

        let Some((name, rest)) = text.split_once('(') else {
            return;
        };
        let Some((reading, _)) = rest.split_once(')') else {
            return;
        };

        character.name = name.trim().to_string();
        character.reading = reading.trim().to_string();
    }

    /// Courtesy name and death year sit at fixed cell positions in the first
    /// basic-info row wide enough to be a data row. Later rows are ignored.
    pub fn extract_basic_info(&self, table: ElementRef, character: &mut Character) {
        for row in dom::find_all(table, "tr") {
            let cells = dom::find_all(row, "td");
            if cells.len() < 9 {
                continue;
            }

            character.azana = dom::text_of(cells[1]).trim().to_string();
            if let Ok(year) = dom::text_of(cells[6]).trim().parse::<i32>() {
                character.death_year = year;
                character.death_minus_13 = year - 13;
            }
            break;
        }
    }

    /// Scan every row of the ability table for the ability values, the
    /// personality/loyalty pair, and the fame/greed/strategy triple.
    pub fn extract_ability_table(&self, table: ElementRef, character: &mut Character) {
        for row in dom::find_all(table, "tr") {
            let cells = dom::find_all(row, "td");
            self.extract_abilities(&cells, character);
            self.extract_personality_loyalty(&cells, character);
            self.extract_status(row, &cells, character);
        }
    }

    /// The five ability values commit all-or-nothing: every one of the first
    /// five cells must parse as an integer and leadership must be positive.
    fn extract_abilities(&self, cells: &[ElementRef], character: &mut Character) {
        if cells.len() < 5 {
            return;
        }

        let mut values = [0i32; 5];
        for (slot, cell) in values.iter_mut().zip(cells) {
            match dom::text_of(*cell).trim().parse::<i32>() {
                Ok(value) => *slot = value,
                Err(_) => return,
            }
        }

        if values[0] > 0 {
            character.leadership = values[0];
            character.force = values[1];
            character.intelligence = values[2];
            character.politics = values[3];
            character.charm = values[4];
        }
    }

    /// Personality is the first vocabulary cell in the row; loyalty is the
    /// nearest integer-parsable cell after it.
    fn extract_personality_loyalty(&self, cells: &[ElementRef], character: &mut Character) {
        if cells.len() < 2 {
            return;
        }

        for (index, cell) in cells.iter().enumerate() {
            let text = dom::text_of(*cell).trim().to_string();
            if !self.rules.is_personality(&text) {
                continue;
            }

            character.personality = text;
            for later in &cells[index + 1..] {
                if let Ok(value) = dom::text_of(*later).trim().parse::<i32>() {
                    character.loyalty = value;
                    break;
                }
            }
            return;
        }
    }

    /// Fame anchors the status row; greed and strategy are located relative
    /// to it. Rows repeating the status column names carry no data.
    fn extract_status(&self, row: ElementRef, cells: &[ElementRef], character: &mut Character) {
        if dom::contains_any(&dom::text_of(row), &self.rules.status_headers) {
            return;
        }
        if cells.len() < 3 {
            return;
        }

        for (index, cell) in cells.iter().enumerate() {
            let text = dom::text_of(*cell).trim().to_string();
            if !self.rules.is_fame(&text) {
                continue;
            }

            character.fame = text;
            self.extract_greed(cells, index, character);
            self.extract_strategy(cells, index, character);
            break;
        }
    }

    /// Greed is the cell right after fame; the wiki writes an empty cell,
    /// "-", or "ー" when an officer has none.
    fn extract_greed(&self, cells: &[ElementRef], fame_index: usize, character: &mut Character) {
        let Some(cell) = cells.get(fame_index + 1) else {
            return;
        };
        let text = dom::text_of(*cell).trim().to_string();
        if !text.is_empty() && text != "-" && text != "ー" {
            character.greed = text;
        }
    }

    /// Strategy sits within the two cells after greed. Placeholder dashes in
    /// between are skipped; a literal "-" is a valid value and kept as-is.
    fn extract_strategy(&self, cells: &[ElementRef], fame_index: usize, character: &mut Character) {
        let start = (fame_index + 2).min(cells.len());
        let end = (fame_index + 4).min(cells.len());

        for cell in &cells[start..end] {
            let text = dom::text_of(*cell).trim().to_string();
            if text.is_empty() || text == "ー" {
                continue;
            }

            if self.rules.is_strategy(&text) || text == "-" {
                character.strategy = text;
                break;
            }
        }
    }
}
