use serde::{Deserialize, Serialize};

/// Optional worksheet elements, fixed for a whole document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// 3x3 stroke diagram and a third row of writing cells
    pub big_kanji: bool,
    /// Romanized second line under each reading
    pub show_romaji: bool,
    /// Plain glyph cell in front of the meanings
    pub show_kanji: bool,
    /// Grey bisecting lines in writing cells
    pub cross_guide: bool,
    /// Compound words block under the writing cells
    pub show_dictionary: bool,
}

impl StyleOptions {
    /// Side of the stroke diagram cell, in grid cells
    pub fn stroke_cells(&self) -> usize {
        if self.big_kanji { 3 } else { 2 }
    }

    /// Writing cells per row
    pub fn write_cells_per_row(&self) -> usize {
        if self.big_kanji { 9 } else { 10 }
    }

    pub fn write_rows(&self) -> usize {
        self.stroke_cells()
    }
}
