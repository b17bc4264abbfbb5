// cell.rs - One grid position: current state plus the state staged for next generation

use std::ops::Not;

/// Life state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Dead,
    Alive,
}

impl State {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }
}

/// Flips the state.
impl Not for State {
    type Output = State;

    fn not(self) -> Self::Output {
        match self {
            State::Dead  => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

impl From<bool> for State {
    fn from(alive: bool) -> Self {
        if alive { State::Alive } else { State::Dead }
    }
}

/// A single cell.
///
/// Readers only ever see `current`. `staged` is scratch space written during
/// the stage pass of a generation and consumed by `commit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    current: State,
    staged:  State,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> State {
        self.current
    }

    /// State that the next `commit` will make current.
    #[inline]
    pub fn staged(&self) -> State {
        self.staged
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current.is_alive()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    #[inline]
    pub fn stage_alive(&mut self) {
        self.staged = State::Alive;
    }

    #[inline]
    pub fn stage_dead(&mut self) {
        self.staged = State::Dead;
    }

    /// Make the staged state current. The scratch slot goes back to dead.
    #[inline]
    pub fn commit(&mut self) {
        self.current = std::mem::take(&mut self.staged);
    }

    /// Flip the visible state right away, outside the stage/commit cycle.
    pub fn switch(&mut self) {
        self.current = !self.current;
        self.staged  = State::Dead;
    }
}
