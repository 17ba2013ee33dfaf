//! Host-side reward conversion policy
//!
//! The engines report raw scores; the host converts them to tokens and
//! tracks the best score across sessions. Conversion rates are per game:
//! grid-chase pays one token per 10 points, scroller-dodge one per 5.

use serde::{Deserialize, Serialize};

/// Which engine a final score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    GridChase,
    ScrollerDodge,
}

impl GameKind {
    /// Score points per token earned.
    pub fn token_divisor(self) -> u32 {
        match self {
            GameKind::GridChase => 10,
            GameKind::ScrollerDodge => 5,
        }
    }
}

/// Tokens earned for a final score (integer floor).
pub fn tokens_earned(kind: GameKind, score: u32) -> u32 {
    score / kind.token_divisor()
}

/// Cross-session score and token bookkeeping owned by the host
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Best single-session score seen so far
    pub best_score: u32,
    /// Accumulated tokens
    pub tokens: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a session's final score into the ledger; returns the tokens
    /// this session earned.
    pub fn record(&mut self, kind: GameKind, final_score: u32) -> u32 {
        let earned = tokens_earned(kind, final_score);
        self.best_score = self.best_score.max(final_score);
        self.tokens += earned;
        earned
    }
}
