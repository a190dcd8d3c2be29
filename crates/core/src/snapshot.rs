//! Read-only copy of session state for renderers.

use crate::challenge::EducationGame;
use crate::minigames::ArcadeGame;
use crate::question::Question;
use crate::types::{Category, Cell, Direction, Language, ModeTag, INITIAL_MOVE_DELAY_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub mode: ModeTag,
    pub language: Language,
    /// Snake cells, head first
    pub snake: Vec<Cell>,
    pub heading: Direction,
    pub food: Cell,
    pub question: Option<Question>,
    /// Whether the last submitted answer was right; cleared on the next question
    pub last_answer: Option<bool>,
    pub score: u32,
    pub level: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub correct: u32,
    pub attempted: u32,
    /// Percentage, `None` before any attempt
    pub accuracy: Option<f32>,
    pub move_delay_ms: u32,
    pub category: Option<Category>,
    pub education: Option<EducationGame>,
    pub arcade: Option<ArcadeGame>,
    pub episode_id: u32,
    pub seed: u32,
    pub clock_ms: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.mode = ModeTag::Menu;
        self.language = Language::English;
        self.snake.clear();
        self.heading = Direction::Right;
        self.food = Cell::new(0, 0);
        self.question = None;
        self.last_answer = None;
        self.score = 0;
        self.level = 1;
        self.streak = 0;
        self.best_streak = 0;
        self.correct = 0;
        self.attempted = 0;
        self.accuracy = None;
        self.move_delay_ms = INITIAL_MOVE_DELAY_MS;
        self.category = None;
        self.education = None;
        self.arcade = None;
        self.episode_id = 0;
        self.seed = 0;
        self.clock_ms = 0;
    }

    /// Snake board is live (not paused, not over, no question pending)
    pub fn playable(&self) -> bool {
        self.mode == ModeTag::Playing && self.question.is_none()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            mode: ModeTag::Menu,
            language: Language::English,
            snake: Vec::new(),
            heading: Direction::Right,
            food: Cell::new(0, 0),
            question: None,
            last_answer: None,
            score: 0,
            level: 1,
            streak: 0,
            best_streak: 0,
            correct: 0,
            attempted: 0,
            accuracy: None,
            move_delay_ms: INITIAL_MOVE_DELAY_MS,
            category: None,
            education: None,
            arcade: None,
            episode_id: 0,
            seed: 0,
            clock_ms: 0,
        }
    }
}
