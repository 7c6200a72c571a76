use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SetSummary — one set object from `sets/<code>` or the `sets/` list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSummary {
    pub name: String,
    pub uri: String,
    #[serde(rename = "scryfall_uri")]
    pub canonical_uri: String,
    pub search_uri: String,
    pub set_type: String,
    pub card_count: u32,
    #[serde(rename = "digital")]
    pub is_digital: bool,
    #[serde(rename = "foil")]
    pub has_foil: bool,
    #[serde(rename = "icon_svg_uri")]
    pub icon_uri: String,

    // -- Absent for some digital-only and promotional sets --
    pub code: Option<String>,
    #[serde(alias = "mtgo")]
    pub mtgo_code: Option<String>,
    pub released_at: Option<String>,
    pub block_code: Option<String>,
    #[serde(rename = "block")]
    pub block_name: Option<String>,
}

impl SetSummary {
    /// A summary is reduced unless its code, release date and block name are
    /// all present. Any combination of the three may be missing.
    pub fn is_reduced(&self) -> bool {
        self.full_heading().is_none()
    }

    fn full_heading(&self) -> Option<(&str, &str, &str)> {
        match (&self.code, &self.released_at, &self.block_name) {
            (Some(code), Some(released), Some(block)) => {
                Some((code.as_str(), released.as_str(), block.as_str()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for SetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.full_heading() {
            Some((code, released, block)) => {
                writeln!(f, "Name: {} ({})", self.name, code)?;
                writeln!(f, "Block: {block}")?;
                writeln!(f, "Number of Cards: {}", self.card_count)?;
                writeln!(f, "Release Date: {released}")?;
                writeln!(f, "Set Type: {}", self.set_type)?;
            }
            None => {
                writeln!(f, "Name: {}", self.name)?;
                writeln!(f, "Number of Cards: {}", self.card_count)?;
                writeln!(f, "Set Type: {}", self.set_type)?;
                if let Some(code) = &self.code {
                    writeln!(f, "Code: {code}")?;
                }
                if let Some(block) = &self.block_name {
                    writeln!(f, "Block: {block}")?;
                }
                if let Some(released) = &self.released_at {
                    writeln!(f, "Release Date: {released}")?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SetList — the `sets/` list response
// ---------------------------------------------------------------------------

/// Every set known to the API, in the order the API returned them.
///
/// Entries that fail to decode are kept as `None` so positions still line up
/// with the raw response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetList {
    #[serde(deserialize_with = "lenient_entries")]
    pub data: Vec<Option<SetSummary>>,
}

impl SetList {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The entry at `index`, if it exists and decoded.
    pub fn get(&self, index: usize) -> Option<&SetSummary> {
        self.data.get(index).and_then(Option::as_ref)
    }

    /// Decoded entries in API order.
    pub fn iter(&self) -> impl Iterator<Item = &SetSummary> {
        self.data.iter().flatten()
    }

    /// Number of entries that could not be decoded.
    pub fn skipped(&self) -> usize {
        self.data.iter().filter(|s| s.is_none()).count()
    }
}

impl fmt::Display for SetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.iter().enumerate() {
            writeln!(f, "Set Number: {i}")?;
            write!(f, "{set}")?;
        }
        Ok(())
    }
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<Option<SetSummary>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, value)| match serde_json::from_value(value) {
            Ok(set) => Some(set),
            Err(err) => {
                debug!("Skipping set list entry {index}: {err}");
                None
            }
        })
        .collect())
}
