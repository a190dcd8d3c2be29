//! Scoring module - answer scoring, streaks, levels and snake speed
//!
//! Rules:
//! - A correct answer earns `BASE_ANSWER_POINTS` plus a streak bonus of
//!   `min(prior_streak * 2, 20)`, where `prior_streak` counts the consecutive
//!   correct answers before this one.
//! - Every fifth cumulative correct answer raises the level by one and shortens
//!   the move delay by 10ms, never below 100ms.
//! - A wrong answer resets the streak and leaves the score alone.

use crate::types::{
    BASE_ANSWER_POINTS, INITIAL_MOVE_DELAY_MS, LEVEL_UP_EVERY, MOVE_DELAY_FLOOR_MS,
    MOVE_DELAY_STEP_MS, STREAK_BONUS_CAP, STREAK_BONUS_PER_ANSWER,
};

/// Outcome of recording one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score_delta: u32,
    pub leveled_up: bool,
    pub move_delay_ms: u32,
}

/// Bonus for extending a streak of `prior_streak` correct answers
pub fn streak_bonus(prior_streak: u32) -> u32 {
    prior_streak
        .saturating_mul(STREAK_BONUS_PER_ANSWER)
        .min(STREAK_BONUS_CAP)
}

/// Points for a correct answer following `prior_streak` correct answers
pub fn points_for_correct(prior_streak: u32) -> u32 {
    BASE_ANSWER_POINTS + streak_bonus(prior_streak)
}

/// Move delay after one level-up
pub fn next_move_delay(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(MOVE_DELAY_STEP_MS)
        .max(MOVE_DELAY_FLOOR_MS)
}

/// Score, streak and speed for one snake session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    level: u32,
    correct: u32,
    attempted: u32,
    streak: u32,
    best_streak: u32,
    move_delay_ms: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            correct: 0,
            attempted: 0,
            streak: 0,
            best_streak: 0,
            move_delay_ms: INITIAL_MOVE_DELAY_MS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn move_delay_ms(&self) -> u32 {
        self.move_delay_ms
    }

    /// Correct answers as a percentage of attempts; `None` before any attempt.
    pub fn accuracy(&self) -> Option<f32> {
        if self.attempted == 0 {
            return None;
        }
        Some(self.correct as f32 * 100.0 / self.attempted as f32)
    }

    /// Apply one submitted answer.
    pub fn record_answer(&mut self, correct: bool) -> AnswerOutcome {
        self.attempted += 1;

        if !correct {
            self.streak = 0;
            return AnswerOutcome {
                correct: false,
                score_delta: 0,
                leveled_up: false,
                move_delay_ms: self.move_delay_ms,
            };
        }

        let score_delta = points_for_correct(self.streak);
        self.score = self.score.saturating_add(score_delta);
        self.correct += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);

        let leveled_up = self.correct % LEVEL_UP_EVERY == 0;
        if leveled_up {
            self.level += 1;
            self.move_delay_ms = next_move_delay(self.move_delay_ms);
        }

        AnswerOutcome {
            correct: true,
            score_delta,
            leveled_up,
            move_delay_ms: self.move_delay_ms,
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
