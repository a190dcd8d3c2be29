//! Typed-answer education sub-games
//!
//! Each sub-game keeps one [`Challenge`] at a time: a prompt, the expected
//! answer, the player's input so far, and whether it has been solved. Solved
//! challenges are replaced on the next tick.

use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{EducationGameKind, Intent, CHALLENGE_POINTS};

/// Longest answer the input line accepts
pub const MAX_INPUT_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Number(i32),
    /// Upper-case word
    Word(&'static str),
}

/// Result of the last submission, shown until the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub prompt: String,
    pub expected: Expected,
    pub input: String,
    pub solved: bool,
}

impl Challenge {
    fn new(prompt: impl Into<String>, expected: Expected) -> Self {
        Self {
            prompt: prompt.into(),
            expected,
            input: String::new(),
            solved: false,
        }
    }

    /// Judge the current input. Non-numeric input for a numeric challenge is wrong.
    pub fn is_correct(&self) -> bool {
        match self.expected {
            Expected::Number(n) => self.input.trim().parse::<i32>() == Ok(n),
            Expected::Word(w) => self.input.trim().eq_ignore_ascii_case(w),
        }
    }
}

const SCIENCE: [(&str, &str); 5] = [
    ("What is the chemical formula for water?", "H2O"),
    ("How many planets are in our solar system?", "8"),
    ("What gas do plants absorb?", "CO2"),
    ("What is the speed of light (m/s)?", "299792458"),
    ("What is the largest organ in human body?", "SKIN"),
];

const GEOGRAPHY: [(&str, &str); 5] = [
    ("What is the capital of France?", "PARIS"),
    ("What is the largest continent?", "ASIA"),
    ("What is the longest river?", "NILE"),
    ("Which country has the most time zones?", "RUSSIA"),
    ("What is the smallest country?", "VATICAN"),
];

const HISTORY: [(&str, &str); 5] = [
    ("Who was the first US President?", "WASHINGTON"),
    ("In which year did WWII end?", "1945"),
    ("Who built the pyramids?", "EGYPTIANS"),
    ("When did the Berlin Wall fall?", "1989"),
    ("Who discovered America?", "COLUMBUS"),
];

const WORDS: [(&str, &str); 5] = [
    ("Opposite of HOT:", "COLD"),
    ("Past tense of GO:", "WENT"),
    ("Plural of CHILD:", "CHILDREN"),
    ("Synonym of BIG:", "LARGE"),
    ("What rhymes with CAT?", "HAT"),
];

/// Which characters a sub-game's input line accepts
fn accepts(kind: EducationGameKind, c: char) -> bool {
    match kind {
        EducationGameKind::MathWizard => c.is_ascii_digit() || c == '-',
        EducationGameKind::ScienceLab | EducationGameKind::HistoryHunter => {
            c.is_ascii_alphanumeric()
        }
        EducationGameKind::GeographyQuest | EducationGameKind::WordMaster => {
            c.is_ascii_alphabetic()
        }
    }
}

/// Draw a fresh challenge for `kind`.
pub fn new_challenge(kind: EducationGameKind, rng: &mut SimpleRng) -> Challenge {
    let table = match kind {
        EducationGameKind::MathWizard => return math_challenge(rng),
        EducationGameKind::ScienceLab => &SCIENCE,
        EducationGameKind::GeographyQuest => &GEOGRAPHY,
        EducationGameKind::HistoryHunter => &HISTORY,
        EducationGameKind::WordMaster => &WORDS,
    };
    let (prompt, answer) = rng.choose(table).copied().unwrap_or(table[0]);
    Challenge::new(prompt, Expected::Word(answer))
}

fn math_challenge(rng: &mut SimpleRng) -> Challenge {
    match rng.next_range(3) {
        0 => {
            let a = rng.range_inclusive(1, 50);
            let b = rng.range_inclusive(1, 50);
            Challenge::new(format!("{a} + {b} = ?"), Expected::Number(a + b))
        }
        1 => {
            let a = rng.range_inclusive(10, 50);
            let b = rng.range_inclusive(1, 10);
            Challenge::new(format!("{a} - {b} = ?"), Expected::Number(a - b))
        }
        _ => {
            let a = rng.range_inclusive(1, 12);
            let b = rng.range_inclusive(1, 12);
            Challenge::new(format!("{a} × {b} = ?"), Expected::Number(a * b))
        }
    }
}

/// One typed-answer sub-game with its own score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationGame {
    kind: EducationGameKind,
    score: u32,
    challenge: Challenge,
    feedback: Option<Feedback>,
}

impl EducationGame {
    pub fn new(kind: EducationGameKind, rng: &mut SimpleRng) -> Self {
        Self {
            kind,
            score: 0,
            challenge: new_challenge(kind, rng),
            feedback: None,
        }
    }

    pub fn kind(&self) -> EducationGameKind {
        self.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Apply a typing intent. Returns whether anything changed.
    pub fn press(&mut self, intent: Intent) -> bool {
        if self.challenge.solved {
            return false;
        }
        match intent {
            Intent::TypeChar(c) => {
                if !accepts(self.kind, c) || self.challenge.input.len() >= MAX_INPUT_LEN {
                    return false;
                }
                self.challenge.input.push(c.to_ascii_uppercase());
                true
            }
            Intent::Backspace => self.challenge.input.pop().is_some(),
            Intent::Submit => self.submit(),
            _ => false,
        }
    }

    fn submit(&mut self) -> bool {
        if self.challenge.input.trim().is_empty() {
            return false;
        }
        if self.challenge.is_correct() {
            self.score += CHALLENGE_POINTS;
            self.challenge.solved = true;
            self.feedback = Some(Feedback::Correct);
        } else {
            self.challenge.input.clear();
            self.feedback = Some(Feedback::Wrong);
        }
        debug!(
            game = self.kind.key(),
            correct = self.challenge.solved,
            score = self.score,
            "challenge answered"
        );
        true
    }

    /// Replace a solved challenge with a new one.
    pub fn tick(&mut self, rng: &mut SimpleRng) {
        if self.challenge.solved {
            self.challenge = new_challenge(self.kind, rng);
        }
    }
}
