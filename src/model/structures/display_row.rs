use serde::{Deserialize, Serialize};

/// One rendered line of the ranking table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRow {
    /// 1-based position after sorting
    pub rank: usize,
    /// Flag glyph, possibly empty
    pub flag: String,
    pub name: String,
    /// Rating with exactly one decimal place
    pub rating: String
}

/// Everything one render pass produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedTable {
    pub last_update: String,
    pub rows: Vec<DisplayRow>
}
