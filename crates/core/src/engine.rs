//! Engine module - the complete game session
//!
//! [`GridEngine`] ties together the grid, the line algorithm, and tile
//! spawning. It owns the score and the sticky win latch and exposes the four
//! directional moves plus read-only queries for the presentation layer.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GridError;
use crate::grid::Grid;
use crate::line::slide_line;
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_tile;
use crate::types::*;

/// Summary of the last move that changed the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub merges: u32,
    pub score_gained: Score,
    /// Tile spawned after the move, as (row, col, value)
    pub spawned: Option<(usize, usize, Tile)>,
}

/// Complete game session
///
/// Generic over the random source so tests can inject any seeded [`Rng`].
#[derive(Debug, Clone)]
pub struct GridEngine<R = StdRng> {
    grid: Grid,
    score: Score,
    /// Set the first time a tile reaches `WIN_VALUE`; cleared only by reset.
    won: bool,
    /// Moves that changed the grid this session.
    moves: u32,
    last_move: Option<MoveOutcome>,
    rng: R,
}

impl GridEngine<StdRng> {
    /// Create a new classic 4x4 game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::started(Grid::default(), StdRng::seed_from_u64(seed))
    }

    /// Create a new game on an N x N grid with the given RNG seed
    pub fn with_size(size: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }
}

impl Default for GridEngine<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Rng> GridEngine<R> {
    /// Create a new game drawing randomness from `rng`; two tiles are spawned
    pub fn with_rng(size: usize, rng: R) -> Result<Self, GridError> {
        Ok(Self::started(Grid::new(size)?, rng))
    }

    fn started(grid: Grid, rng: R) -> Self {
        let mut engine = Self::from_grid(grid, rng);
        engine.reset();
        engine
    }

    /// Adopt an existing grid as a session in progress.
    ///
    /// Nothing is spawned. Score starts at 0 and the win latch reflects the grid.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let won = grid.has_tile_at_least(WIN_VALUE);
        Self {
            grid,
            score: 0,
            won,
            moves: 0,
            last_move: None,
            rng,
        }
    }

    /// Discard all state and start over with two fresh tiles.
    ///
    /// Safe at any time, including mid-game.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.moves = 0;
        self.last_move = None;
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        debug!("reset {0}x{0} grid", self.grid.size());
        trace!("grid after reset:\n{}", self.grid);
    }

    /// Start over on a grid of a different dimension
    pub fn reset_with_size(&mut self, size: usize) -> Result<(), GridError> {
        self.grid = Grid::new(size)?;
        self.reset();
        Ok(())
    }

    /// Place one random tile on an empty cell; no-op on a full grid
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize, Tile)> {
        let spawned = spawn_tile(&mut self.rng, &mut self.grid);
        if let Some((row, col, value)) = spawned {
            trace!("spawned {} at ({}, {})", value, row, col);
        }
        spawned
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_move(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_move(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.apply_move(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.apply_move(Direction::Down)
    }

    /// Slide every line toward `direction`'s edge.
    ///
    /// Each line is copied out leading edge first, run through
    /// [`slide_line`], and written back only if it changed. When any line
    /// changed, one tile is spawned and `true` is returned; otherwise the
    /// grid, score, and RNG are untouched and `false` is returned.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let mut changed = false;
        let mut score_gained: Score = 0;
        let mut merges = 0u32;

        for line in 0..self.grid.size() {
            let mut buf = self.grid.read_line(direction, line);
            let result = slide_line(&mut buf);
            if result.changed {
                self.grid.write_line(direction, line, &buf);
                changed = true;
                score_gained += result.score;
                merges += result.merges;
            }
        }

        if !changed {
            trace!("move {} left the grid unchanged", direction.as_str());
            return false;
        }

        self.score += score_gained;
        self.refresh_win_latch();
        let spawned = self.spawn_random_tile();
        self.moves += 1;
        self.last_move = Some(MoveOutcome {
            direction,
            merges,
            score_gained,
            spawned,
        });

        debug!(
            "move {} #{}: {} merges, +{} (score {})",
            direction.as_str(),
            self.moves,
            merges,
            score_gained,
            self.score
        );
        trace!("grid after move:\n{}", self.grid);
        true
    }

    /// Apply an input action; returns whether a redraw is warranted
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// True once any tile has reached `WIN_VALUE` this session.
    ///
    /// The first detection latches; later calls keep returning true until reset.
    pub fn has_won(&mut self) -> bool {
        self.refresh_win_latch();
        self.won
    }

    /// Read the win latch without re-checking the grid
    pub fn won(&self) -> bool {
        self.won
    }

    fn refresh_win_latch(&mut self) {
        if !self.won && self.grid.has_tile_at_least(WIN_VALUE) {
            debug!("reached {} after {} moves", WIN_VALUE, self.moves);
            self.won = true;
        }
    }

    /// True if no move can change the grid: no empty cell and no adjacent equal pair.
    ///
    /// Computed fresh from the grid on every call.
    pub fn is_game_over(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_pair()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Over
        } else if self.won || self.grid.has_tile_at_least(WIN_VALUE) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Copy of the current grid; mutating it does not affect the engine
    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Copy of the current grid as nested rows
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.grid.to_rows()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Grid dimension N
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn last_move(&self) -> Option<MoveOutcome> {
        self.last_move
    }

    /// Fill a reusable snapshot for rendering (no allocation)
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        snap.size = self.grid.size();
        snap.cells[..self.grid.cells().len()].copy_from_slice(self.grid.cells());
        snap.score = self.score;
        snap.moves = self.moves;
        snap.max_tile = self.grid.max_tile();
        snap.won = self.won || self.grid.has_tile_at_least(WIN_VALUE);
        snap.game_over = self.is_game_over();
        snap.last_spawn = self
            .last_move
            .and_then(|m| m.spawned)
            .map(|(row, col, _)| (row, col));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
