//! Line module - compress and merge a single line
//!
//! Every move is this algorithm applied to each line independently. The line
//! arrives leading edge first (see [`Grid::read_line`](crate::grid::Grid::read_line)),
//! so one implementation serves all four directions.

use arrayvec::ArrayVec;

use crate::types::{Score, Tile, MAX_GRID_SIZE, MAX_TILE};

/// Outcome of sliding one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineResult {
    /// Whether any cell differs from its value before the slide
    pub changed: bool,
    /// Sum of merged tile values
    pub score: Score,
    /// Number of merges performed
    pub merges: u32,
}

/// Slide `line` toward index 0, merging equal neighbours.
///
/// 1. Compress: nonzero tiles keep their order and pack toward index 0.
/// 2. Merge in one pass from index 0: an equal adjacent pair becomes one tile
///    of double value and everything behind it closes the gap. The scan then
///    moves past the merged tile, so no tile merges twice in one slide.
///    Tiles already at [`MAX_TILE`] cannot double and never merge.
/// 3. Zero-fill the trailing end.
///
/// ```
/// use tui_2048_core::slide_line;
///
/// let mut line = [2, 2, 2, 2];
/// let result = slide_line(&mut line);
/// assert_eq!(line, [4, 4, 0, 0]);
/// assert_eq!(result.score, 8);
/// assert!(result.changed);
/// ```
pub fn slide_line(line: &mut [Tile]) -> LineResult {
    debug_assert!(line.len() <= MAX_GRID_SIZE);

    let mut packed: ArrayVec<Tile, MAX_GRID_SIZE> =
        line.iter().copied().filter(|&t| t != 0).collect();

    let mut result = LineResult::default();
    let mut i = 0;
    while i + 1 < packed.len() {
        if packed[i] == packed[i + 1] && packed[i] < MAX_TILE {
            packed[i] *= 2;
            packed.remove(i + 1);
            result.score += packed[i] as Score;
            result.merges += 1;
        }
        i += 1;
    }

    for (k, slot) in line.iter_mut().enumerate() {
        let value = packed.get(k).copied().unwrap_or(0);
        if *slot != value {
            result.changed = true;
            *slot = value;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(mut line: Vec<Tile>) -> (Vec<Tile>, LineResult) {
        let result = slide_line(&mut line);
        (line, result)
    }

    #[test]
    fn test_empty_line_is_unchanged() {
        let (line, result) = slid(vec![0, 0, 0, 0]);
        assert_eq!(line, vec![0, 0, 0, 0]);
        assert_eq!(result, LineResult::default());
    }

    #[test]
    fn test_compress_only() {
        let (line, result) = slid(vec![0, 2, 0, 4]);
        assert_eq!(line, vec![2, 4, 0, 0]);
        assert!(result.changed);
        assert_eq!(result.score, 0);
        assert_eq!(result.merges, 0);
    }

    #[test]
    fn test_four_equal_tiles_merge_pairwise() {
        let (line, result) = slid(vec![2, 2, 2, 2]);
        assert_eq!(line, vec![4, 4, 0, 0]);
        assert_eq!(result.score, 8);
        assert_eq!(result.merges, 2);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // [4, 4, 8] must not cascade into 16.
        let (line, result) = slid(vec![4, 4, 8, 0]);
        assert_eq!(line, vec![8, 8, 0, 0]);
        assert_eq!(result.score, 8);

        let (line, _) = slid(vec![2, 2, 4, 8]);
        assert_eq!(line, vec![4, 4, 8, 0]);
    }

    #[test]
    fn test_three_equal_tiles_merge_from_leading_edge() {
        let (line, result) = slid(vec![2, 2, 2, 0]);
        assert_eq!(line, vec![4, 2, 0, 0]);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_gap_between_equal_tiles() {
        let (line, result) = slid(vec![2, 0, 0, 2]);
        assert_eq!(line, vec![4, 0, 0, 0]);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_packed_distinct_line_is_unchanged() {
        let (line, result) = slid(vec![2, 4, 8, 16]);
        assert_eq!(line, vec![2, 4, 8, 16]);
        assert!(!result.changed);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_pair_after_distinct_tile() {
        let (line, result) = slid(vec![2, 4, 4, 0]);
        assert_eq!(line, vec![2, 8, 0, 0]);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_largest_tiles_do_not_overflow() {
        let (line, result) = slid(vec![0, MAX_TILE, 0, MAX_TILE]);
        assert_eq!(line, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert!(result.changed);
        assert_eq!(result.score, 0);
        assert_eq!(result.merges, 0);

        let (line, result) = slid(vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(line, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert!(!result.changed);

        // One step below the cap still merges, into the cap.
        let (line, result) = slid(vec![1 << 30, 1 << 30, 0, 0]);
        assert_eq!(line, vec![MAX_TILE, 0, 0, 0]);
        assert_eq!(result.score, MAX_TILE as Score);
    }

    #[test]
    fn test_longer_lines() {
        let (line, result) = slid(vec![2, 2, 2, 2, 2, 2, 2, 2]);
        assert_eq!(line, vec![4, 4, 4, 4, 0, 0, 0, 0]);
        assert_eq!(result.merges, 4);

        let (line, _) = slid(vec![0, 2]);
        assert_eq!(line, vec![2, 0]);
    }
}
