use crate::types::{GameStatus, Score, Tile, MAX_CELLS};

/// Plain-data copy of engine state for renderers.
///
/// Fixed-size and `Copy`; callers keep one and refill it with
/// [`GridEngine::snapshot_into`](crate::GridEngine::snapshot_into) every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tiles; only the first `size * size` entries are meaningful.
    pub cells: [Tile; MAX_CELLS],
    pub score: Score,
    pub moves: u32,
    pub max_tile: Tile,
    pub won: bool,
    pub game_over: bool,
    pub last_spawn: Option<(usize, usize)>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells = [0; MAX_CELLS];
        self.score = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.won = false;
        self.game_over = false;
        self.last_spawn = None;
    }

    /// Tile at (row, col); 0 outside the grid
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.cells[row * self.size + col]
    }

    /// False once the grid is locked; the runner ignores moves until restart
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Over
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            cells: [0; MAX_CELLS],
            score: 0,
            moves: 0,
            max_tile: 0,
            won: false,
            game_over: false,
            last_spawn: None,
        };
        s.clear();
        s
    }
}
