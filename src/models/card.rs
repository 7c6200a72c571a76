use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// One of the five colors of Magic, serialized as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Card — a single card object from `cards/named`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // -- Identity --
    pub id: String,
    pub oracle_id: String,
    pub name: String,
    #[serde(default)]
    pub multiverse_ids: Vec<u64>,
    pub mtgo_id: Option<u64>,
    pub mtgo_foil_id: Option<u64>,

    // -- Links --
    pub uri: String,
    #[serde(rename = "scryfall_uri")]
    pub canonical_uri: String,
    pub prints_search_uri: String,
    pub rulings_uri: String,

    // -- Gameplay --
    pub layout: String,
    #[serde(deserialize_with = "mana_value")]
    pub cmc: u32,
    pub type_line: String,
    pub oracle_text: String,
    pub mana_cost: String,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub colors: BTreeSet<Color>,

    // -- Vendors --
    pub purchase_uris: BTreeMap<String, String>,
}

impl Card {
    /// Power and toughness, when the card carries both.
    ///
    /// Well-formed creatures have both and everything else has neither, but
    /// upstream data is not guaranteed to respect that, so a lone power or
    /// toughness yields `None`.
    pub fn power_toughness(&self) -> Option<(&str, &str)> {
        match (&self.power, &self.toughness) {
            (Some(p), Some(t)) => Some((p.as_str(), t.as_str())),
            _ => None,
        }
    }

    pub fn is_colorless(&self) -> bool {
        self.colors.is_empty()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Cost: {}", self.mana_cost)?;
        writeln!(f, "Type Line: {}", self.type_line)?;
        writeln!(f, "Oracle Text:")?;
        writeln!(f, "{}", self.oracle_text)?;
        if let Some((power, toughness)) = self.power_toughness() {
            writeln!(f, "Power: {power}")?;
            writeln!(f, "Toughness: {toughness}")?;
        }
        Ok(())
    }
}

/// Scryfall reports mana value as a JSON number that may be written as a
/// float (`1.0`). Only whole, non-negative values fit the integer mana value;
/// fractional ones from joke sets are rejected.
fn mana_value<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 || raw > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "mana value out of range: {raw}"
        )));
    }
    if raw.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "mana value is not a whole number: {raw}"
        )));
    }
    Ok(raw as u32)
}
