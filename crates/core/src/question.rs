//! Question bank - multiple-choice questions for snake growth
//!
//! Math questions are synthesized per difficulty tier; the other subjects draw
//! from small fixed tables that ship their own four options. Generation has no
//! failure path: every call returns a question with exactly [`OPTION_COUNT`]
//! distinct options, one of which is the answer.

use std::fmt;

use crate::rng::SimpleRng;
use crate::types::{Subject, OPTION_COUNT};

/// Highest tier that produces addition and subtraction
pub const BASIC_TIER_MAX: u32 = 3;

/// Highest tier that produces multiplication and division
pub const INTERMEDIATE_TIER_MAX: u32 = 6;

/// Perfect squares used for square-root questions
const PERFECT_SQUARES: [i32; 9] = [4, 9, 16, 25, 36, 49, 64, 81, 100];

/// Largest offset applied when synthesizing a distractor
const DISTRACTOR_SPREAD: i32 = 10;

/// An answer value: numeric for math, canned text for table subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Number(i32),
    Text(&'static str),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    answer: Answer,
    options: [Answer; OPTION_COUNT],
    difficulty: u32,
    subject: Subject,
}

impl Question {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    pub fn options(&self) -> &[Answer; OPTION_COUNT] {
        &self.options
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    /// Judge a 1-based option choice. `None` when the option does not exist.
    pub fn check(&self, option: u8) -> Option<bool> {
        let idx = (option as usize).checked_sub(1)?;
        self.options.get(idx).map(|&chosen| chosen == self.answer)
    }
}

struct CannedQuestion {
    prompt: &'static str,
    answer: &'static str,
    options: [&'static str; OPTION_COUNT],
}

const SCIENCE: [CannedQuestion; 3] = [
    CannedQuestion {
        prompt: "What is H2O?",
        answer: "Water",
        options: ["Water", "Hydrogen", "Oxygen", "Salt"],
    },
    CannedQuestion {
        prompt: "How many planets are in our solar system?",
        answer: "8",
        options: ["8", "9", "7", "10"],
    },
    CannedQuestion {
        prompt: "What gas do plants absorb from the atmosphere?",
        answer: "Carbon dioxide",
        options: ["Carbon dioxide", "Oxygen", "Nitrogen", "Hydrogen"],
    },
];

const GEOGRAPHY: [CannedQuestion; 3] = [
    CannedQuestion {
        prompt: "What is the capital of France?",
        answer: "Paris",
        options: ["Paris", "London", "Berlin", "Madrid"],
    },
    CannedQuestion {
        prompt: "Which is the largest continent?",
        answer: "Asia",
        options: ["Asia", "Africa", "Europe", "America"],
    },
    CannedQuestion {
        prompt: "What is the longest river in the world?",
        answer: "Nile",
        options: ["Nile", "Amazon", "Ganges", "Mississippi"],
    },
];

const HISTORY: [CannedQuestion; 3] = [
    CannedQuestion {
        prompt: "Who was the first President of the United States?",
        answer: "George Washington",
        options: [
            "George Washington",
            "Thomas Jefferson",
            "Abraham Lincoln",
            "John Adams",
        ],
    },
    CannedQuestion {
        prompt: "In which year did World War II end?",
        answer: "1945",
        options: ["1945", "1944", "1946", "1943"],
    },
    CannedQuestion {
        prompt: "Which ancient wonder was located in Egypt?",
        answer: "Great Pyramid",
        options: ["Great Pyramid", "Hanging Gardens", "Colossus", "Lighthouse"],
    },
];

const LANGUAGE: [CannedQuestion; 3] = [
    CannedQuestion {
        prompt: "What is the opposite of 'hot'?",
        answer: "Cold",
        options: ["Cold", "Warm", "Cool", "Mild"],
    },
    CannedQuestion {
        prompt: "Which word is a noun?",
        answer: "Book",
        options: ["Book", "Run", "Quick", "Slowly"],
    },
    CannedQuestion {
        prompt: "What is the plural of 'child'?",
        answer: "Children",
        options: ["Children", "Childs", "Childes", "Child"],
    },
];

/// Generate a question for `subject` at `difficulty`.
pub fn generate(subject: Subject, difficulty: u32, rng: &mut SimpleRng) -> Question {
    let table: &[CannedQuestion] = match subject {
        Subject::Math => return math_question(difficulty, rng),
        Subject::Science => &SCIENCE,
        Subject::Geography => &GEOGRAPHY,
        Subject::History => &HISTORY,
        Subject::Language => &LANGUAGE,
    };
    match rng.choose(table) {
        Some(entry) => canned_question(entry, subject, difficulty, rng),
        None => math_question(difficulty, rng),
    }
}

/// Generate by subject name. Unknown names fall back to math.
pub fn generate_named(subject: &str, difficulty: u32, rng: &mut SimpleRng) -> Question {
    generate(Subject::parse_or_default(subject), difficulty, rng)
}

/// "General education": a uniformly random subject.
pub fn generate_general(difficulty: u32, rng: &mut SimpleRng) -> Question {
    let subject = rng
        .choose(&Subject::ALL)
        .copied()
        .unwrap_or(Subject::Math);
    generate(subject, difficulty, rng)
}

fn canned_question(
    entry: &CannedQuestion,
    subject: Subject,
    difficulty: u32,
    rng: &mut SimpleRng,
) -> Question {
    let mut options = entry.options.map(Answer::Text);
    rng.shuffle(&mut options);
    Question {
        prompt: entry.prompt.to_string(),
        answer: Answer::Text(entry.answer),
        options,
        difficulty,
        subject,
    }
}

fn math_question(difficulty: u32, rng: &mut SimpleRng) -> Question {
    let (prompt, answer) = if difficulty <= BASIC_TIER_MAX {
        let mut a = rng.range_inclusive(1, 20);
        let mut b = rng.range_inclusive(1, 20);
        if rng.chance(1, 2) {
            (format!("{a} + {b} = ?"), a + b)
        } else {
            if a < b {
                std::mem::swap(&mut a, &mut b);
            }
            (format!("{a} - {b} = ?"), a - b)
        }
    } else if difficulty <= INTERMEDIATE_TIER_MAX {
        let a = rng.range_inclusive(2, 12);
        let b = rng.range_inclusive(2, 12);
        if rng.chance(1, 2) {
            (format!("{a} × {b} = ?"), a * b)
        } else {
            (format!("{} ÷ {b} = ?", a * b), a)
        }
    } else if rng.chance(1, 2) {
        let n = rng.range_inclusive(1, 20);
        (format!("{n}² = ?"), n * n)
    } else {
        let square = rng.choose(&PERFECT_SQUARES).copied().unwrap_or(4);
        (format!("√{square} = ?"), integer_sqrt(square))
    };

    Question {
        prompt,
        answer: Answer::Number(answer),
        options: numeric_options(answer, rng),
        difficulty,
        subject: Subject::Math,
    }
}

/// The answer plus three distinct non-negative distractors, shuffled.
fn numeric_options(answer: i32, rng: &mut SimpleRng) -> [Answer; OPTION_COUNT] {
    let mut values = [answer; OPTION_COUNT];
    let mut filled = 1;
    while filled < OPTION_COUNT {
        let offset = rng.range_inclusive(-DISTRACTOR_SPREAD, DISTRACTOR_SPREAD);
        let candidate = answer + offset;
        if offset == 0 || candidate < 0 || values[..filled].contains(&candidate) {
            continue;
        }
        values[filled] = candidate;
        filled += 1;
    }
    rng.shuffle(&mut values);
    values.map(Answer::Number)
}

fn integer_sqrt(square: i32) -> i32 {
    (1..=square).find(|n| n * n >= square).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(q: &Question) -> Vec<i32> {
        q.options()
            .iter()
            .map(|o| match o {
                Answer::Number(n) => *n,
                Answer::Text(t) => panic!("unexpected text option {t}"),
            })
            .collect()
    }

    #[test]
    fn basic_tier_answers_are_non_negative() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..500 {
            let q = generate(Subject::Math, 1, &mut rng);
            match q.answer() {
                Answer::Number(n) => assert!(n >= 0, "{} gave {n}", q.prompt()),
                other => panic!("math answer was {other:?}"),
            }
        }
    }

    #[test]
    fn division_is_exact() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..500 {
            let q = generate(Subject::Math, 5, &mut rng);
            if let Some((lhs, rest)) = q.prompt().split_once(" ÷ ") {
                let dividend: i32 = lhs.parse().unwrap();
                let divisor: i32 = rest.trim_end_matches(" = ?").parse().unwrap();
                assert_eq!(dividend % divisor, 0);
                assert_eq!(q.answer(), Answer::Number(dividend / divisor));
            }
        }
    }

    #[test]
    fn advanced_tier_uses_squares_and_roots() {
        let mut rng = SimpleRng::new(8);
        for _ in 0..200 {
            let q = generate(Subject::Math, 9, &mut rng);
            assert!(q.prompt().contains('²') || q.prompt().contains('√'));
        }
    }

    #[test]
    fn integer_sqrt_of_table() {
        for (i, square) in PERFECT_SQUARES.iter().enumerate() {
            assert_eq!(integer_sqrt(*square), i as i32 + 2);
        }
    }

    #[test]
    fn numeric_options_near_zero_stay_non_negative() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..200 {
            let options = numeric_options(0, &mut rng);
            for o in options {
                match o {
                    Answer::Number(n) => assert!(n >= 0),
                    Answer::Text(_) => unreachable!(),
                }
            }
            assert!(options.contains(&Answer::Number(0)));
        }
    }

    #[test]
    fn math_options_are_distinct() {
        let mut rng = SimpleRng::new(2024);
        for tier in 1..=10 {
            let q = generate(Subject::Math, tier, &mut rng);
            let mut values = numbers(&q);
            values.sort();
            values.dedup();
            assert_eq!(values.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn canned_question_contains_answer() {
        let mut rng = SimpleRng::new(9);
        for subject in [Subject::Science, Subject::Geography, Subject::History, Subject::Language] {
            let q = generate(subject, 1, &mut rng);
            assert_eq!(q.subject(), subject);
            assert!(q.options().contains(&q.answer()));
        }
    }

    #[test]
    fn canned_prompts_are_full_questions() {
        let tables: [&[CannedQuestion]; 4] = [&SCIENCE, &GEOGRAPHY, &HISTORY, &LANGUAGE];
        for entry in tables.into_iter().flatten() {
            assert!(entry.prompt.ends_with('?'), "{}", entry.prompt);
            assert!(entry.options.contains(&entry.answer), "{}", entry.prompt);
        }
        assert_eq!(GEOGRAPHY[0].prompt, "What is the capital of France?");
        assert_eq!(SCIENCE[1].prompt, "How many planets are in our solar system?");
        assert_eq!(LANGUAGE[2].prompt, "What is the plural of 'child'?");
    }

    #[test]
    fn check_is_one_based_and_bounded() {
        let mut rng = SimpleRng::new(4);
        let q = generate(Subject::Geography, 1, &mut rng);
        let correct = q.options().iter().position(|&o| o == q.answer()).unwrap() as u8 + 1;
        assert_eq!(q.check(correct), Some(true));
        let wrong = if correct == 1 { 2 } else { 1 };
        assert_eq!(q.check(wrong), Some(false));
        assert_eq!(q.check(0), None);
        assert_eq!(q.check(5), None);
        assert_eq!(q.check(7), None);
    }

    #[test]
    fn unknown_subject_name_falls_back_to_math() {
        let mut rng = SimpleRng::new(4);
        let q = generate_named("alchemy", 2, &mut rng);
        assert_eq!(q.subject(), Subject::Math);
        assert_eq!(q.difficulty(), 2);
    }
}
