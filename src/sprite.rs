//! Multi-line glyph grids loaded from text files.

use std::fs;
use std::path::Path;

use crate::error::{Result, SceneError};

pub const SHIP_FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// A rectangular picture made of glyphs. Spaces are transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<Vec<char>>,
    cols: usize,
}

impl Sprite {
    /// Parse a sprite from text. Rows are split on `\n`; a trailing `\r` on
    /// a row and a final empty row are dropped. Ragged rows are accepted
    /// as-is; the width is the longest row.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<Vec<char>> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let cols = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self { lines, cols }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::FrameLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Bounding box height.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// Bounding box width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Every visible glyph as `(row_offset, col_offset, glyph)`.
    pub fn glyphs(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(dr, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &ch)| ch != ' ')
                .map(move |(dc, &ch)| (dr, dc, ch))
        })
    }
}

/// Load both ship animation frames from `dir`.
pub fn load_ship_frames(dir: &Path) -> Result<[Sprite; 2]> {
    let [first, second] = SHIP_FRAME_FILES.map(|name| dir.join(name));
    Ok([load_one(&first)?, load_one(&second)?])
}

fn load_one(path: &Path) -> Result<Sprite> {
    let sprite = Sprite::load(path)?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        sprite.rows(),
        sprite.cols()
    );
    Ok(sprite)
}
