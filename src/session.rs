use gol_board::{Board, BoardError, ChangeList};
use std::time::Instant;

/// State of one game: the board being edited or simulated and its counters.
///
/// A session owns its board exclusively. Returning to the menu or loading
/// another board drops the session.
pub struct Session {
    board: Board,
    generation: u64,           // Number of generations advanced since the session started.
    is_running: bool,          // Flag indicating whether the simulation advances on its own.
    last_changes: ChangeList,  // Cells flipped by the latest step.
    last_step_duration: f64,   // Duration of the last step in seconds.
    population: usize,         // Number of alive cells, kept in sync with the change lists.
    stopped_on_stall: bool,    // Set when a run stopped because nothing changed.
}

impl Session {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(width, height)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            population: board.population(),
            board,
            generation: 0,
            is_running: false,
            last_changes: ChangeList::default(),
            last_step_duration: 0.,
            stopped_on_stall: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn last_changes(&self) -> &ChangeList {
        &self.last_changes
    }

    pub fn last_step_duration(&self) -> f64 {
        self.last_step_duration
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn stopped_on_stall(&self) -> bool {
        self.stopped_on_stall
    }

    pub fn set_running(&mut self, is_running: bool) {
        self.is_running = is_running;
        if is_running {
            self.stopped_on_stall = false;
        }
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.is_running);
    }

    /// Flips one cell of the play area.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.board.toggle(row, col)?;
        if self.board.get(row, col)? {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        Ok(())
    }

    /// Advances one generation and returns the flipped cells.
    ///
    /// A running simulation stops once a generation changes nothing.
    pub fn step(&mut self) -> Result<&ChangeList, BoardError> {
        let timer = Instant::now();
        let changes = self.board.advance()?;
        self.last_step_duration = timer.elapsed().as_secs_f64();

        for &(row, col) in &changes {
            if self.board.get(row, col)? {
                self.population += 1;
            } else {
                self.population -= 1;
            }
        }
        self.generation += 1;
        if changes.is_empty() && self.is_running {
            self.is_running = false;
            self.stopped_on_stall = true;
        }
        self.last_changes = changes;
        Ok(&self.last_changes)
    }

    /// Kills every cell and restarts the generation counter.
    pub fn clear(&mut self) {
        self.board.clear();
        self.population = 0;
        self.reset_counters();
    }

    /// Replaces the board with a random one of the same size.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), BoardError> {
        self.board = Board::random(self.board.width(), self.board.height(), seed, fill_rate)?;
        self.population = self.board.population();
        self.reset_counters();
        Ok(())
    }

    fn reset_counters(&mut self) {
        self.generation = 0;
        self.is_running = false;
        self.last_changes = ChangeList::default();
        self.stopped_on_stall = false;
    }
}
