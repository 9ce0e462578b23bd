use serde::{Deserialize, Serialize};

use crate::*;

/// Governs what a click does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// A click rotates only the clicked cell.
    Editing,
    /// A click rotates the clicked cell's 3x3 block and checks for a win.
    Playing,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Editing => Self::Playing,
            Self::Playing => Self::Editing,
        }
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Editing
    }
}

/// Discrete input the engine understands, already translated from raw events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ToggleMode,
    ClickCell(Offset2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Click landed outside the grid.
    NoChange,
    ModeChanged { mode: Mode, solved: bool },
    Rotated,
    Solved,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        use ActionOutcome::*;
        match self {
            NoChange => false,
            ModeChanged { .. } => true,
            Rotated => true,
            Solved => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: Grid,
    mode: Mode,
}

impl PlayEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            mode: Default::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Swaps in a new puzzle, keeping the current mode.
    pub fn reset(&mut self, grid: Grid) {
        log::debug!("new {0}x{0} grid, mode {1:?}", grid.size(), self.mode);
        self.grid = grid;
    }

    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::ToggleMode => self.toggle_mode(),
            Action::ClickCell(offset) => self.click(offset),
        }
    }

    pub fn toggle_mode(&mut self) -> ActionOutcome {
        let previous = self.mode;
        self.mode = previous.toggled();
        log::info!("Switched mode from {:?} to {:?}", previous, self.mode);

        let solved = self.mode.is_playing() && self.grid.is_solved();
        if solved {
            log::info!("All cells already point the same way");
        }
        ActionOutcome::ModeChanged {
            mode: self.mode,
            solved,
        }
    }

    pub fn click(&mut self, offset: Offset2) -> ActionOutcome {
        let Some(coords) = self.grid.locate(offset) else {
            log::trace!("click outside the grid at {:?}", offset);
            return ActionOutcome::NoChange;
        };

        // `locate` already bounds-checked, so neither rotation can fail
        match self.mode {
            Mode::Editing => match self.grid.rotate_one(coords) {
                Ok(()) => ActionOutcome::Rotated,
                Err(_) => ActionOutcome::NoChange,
            },
            Mode::Playing => match self.grid.rotate_block(coords) {
                Ok(_) if self.grid.is_solved() => {
                    log::info!("All cells point the same way");
                    ActionOutcome::Solved
                }
                Ok(_) => ActionOutcome::Rotated,
                Err(_) => ActionOutcome::NoChange,
            },
        }
    }
}
