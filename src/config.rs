//! Startup configuration from environment variables.
//!
//! Every variable is optional and parsed leniently: a malformed value falls
//! back to its default rather than aborting the game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Rules;
use crate::types::{FoodReward, Language, Subject};

pub const ENV_SEED: &str = "SNAKE_SEED";
pub const ENV_LANG: &str = "SNAKE_LANG";
pub const ENV_FOOD_REWARD: &str = "SNAKE_FOOD_REWARD";
pub const ENV_SUBJECT: &str = "SNAKE_SUBJECT";
pub const ENV_LOG_PATH: &str = "SNAKE_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub language: Language,
    pub food_reward: FoodReward,
    /// `None` draws questions from every subject
    pub subject: Option<Subject>,
    pub log_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests inject a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);
        let language = lookup(ENV_LANG)
            .and_then(|v| Language::from_str(&v))
            .unwrap_or_default();
        let food_reward = lookup(ENV_FOOD_REWARD)
            .and_then(|v| FoodReward::from_str(&v))
            .unwrap_or_default();
        let subject = lookup(ENV_SUBJECT)
            .filter(|v| !v.trim().is_empty())
            .map(|v| Subject::parse_or_default(&v));
        let log_path = lookup(ENV_LOG_PATH)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            language,
            food_reward,
            subject,
            log_path,
        }
    }

    pub fn rules(&self) -> Rules {
        Rules {
            food_reward: self.food_reward,
            question_subject: self.subject,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
