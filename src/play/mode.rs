//! Who sits at each side of the board.

use crate::games::tictactoe::Player;
use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the keyboard.
    Pvp,
    /// Human against the heuristic CPU.
    #[default]
    Cpu,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Cpu => "Player vs CPU",
        }
    }
}

/// Mark the human plays in CPU mode; X moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HumanMark {
    /// Play X and move first.
    #[default]
    X,
    /// Play O; the CPU opens as X.
    O,
}

impl From<HumanMark> for Player {
    fn from(mark: HumanMark) -> Self {
        match mark {
            HumanMark::X => Player::X,
            HumanMark::O => Player::O,
        }
    }
}

/// Seating for one console match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seating {
    mode: GameMode,
    human: Player,
}

impl Seating {
    /// Seats the human as `human` under `mode`.
    pub fn new(mode: GameMode, human: Player) -> Self {
        Self { mode, human }
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the human's mark in CPU mode.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the CPU's mark, if a CPU is seated.
    pub fn cpu(&self) -> Option<Player> {
        match self.mode {
            GameMode::Cpu => Some(self.human.opponent()),
            GameMode::Pvp => None,
        }
    }

    /// Returns true when `player` is controlled by the CPU.
    pub fn is_cpu(&self, player: Player) -> bool {
        self.cpu() == Some(player)
    }
}
