//! Session module - the top-level mode state machine
//!
//! A [`Session`] owns the snake board, the progression counters, the current
//! question (if any) and the active sub-game. The driver feeds it decoded
//! intents and elapsed time; it dispatches each tick to whichever component
//! the current [`Mode`] makes active.
//!
//! ```text
//! Menu --Start--> Playing <--PauseToggle--> Paused
//! Playing --food--> CategorySelect --1--> EducationSelect --1..5--> EducationPlaying
//!                                  --2--> ArcadeSelect    --1..5--> ArcadePlaying
//! *Select --Back--> CategorySelect      *Playing --Escape--> *Select
//! CategorySelect --Escape--> Playing
//! Playing --collision--> GameOver --Restart--> Playing
//! ```
//!
//! Intents that do not apply to the current mode are ignored.

use tracing::{debug, info};

use crate::board::{Board, TickResult};
use crate::challenge::EducationGame;
use crate::minigames::{ArcadeGame, Controls, MiniGame};
use crate::question::{self, Question};
use crate::rng::SimpleRng;
use crate::scoring::{AnswerOutcome, Progression};
use crate::snapshot::SessionSnapshot;
use crate::types::{
    ArcadeGameKind, Category, Direction, EducationGameKind, FoodReward, Intent, Language,
    ModeTag, Subject,
};

/// Active mode. Sub-game variants own that sub-game's state, which is dropped
/// when the mode is left.
#[derive(Debug, Clone)]
pub enum Mode {
    Menu,
    CategorySelect,
    EducationSelect,
    EducationPlaying(EducationGame),
    ArcadeSelect,
    ArcadePlaying(ArcadeGame),
    Playing,
    Paused,
    GameOver,
}

impl Mode {
    pub fn tag(&self) -> ModeTag {
        match self {
            Mode::Menu => ModeTag::Menu,
            Mode::CategorySelect => ModeTag::CategorySelect,
            Mode::EducationSelect => ModeTag::EducationSelect,
            Mode::EducationPlaying(_) => ModeTag::EducationPlaying,
            Mode::ArcadeSelect => ModeTag::ArcadeSelect,
            Mode::ArcadePlaying(_) => ModeTag::ArcadePlaying,
            Mode::Playing => ModeTag::Playing,
            Mode::Paused => ModeTag::Paused,
            Mode::GameOver => ModeTag::GameOver,
        }
    }
}

/// What the driver should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session-wide options chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub food_reward: FoodReward,
    /// Subject for food questions; `None` picks a random subject each time
    pub question_subject: Option<Subject>,
}

#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    board: Board,
    progression: Progression,
    question: Option<Question>,
    last_answer: Option<bool>,
    pending_direction: Option<Direction>,
    /// Milliseconds of simulated time since creation
    clock_ms: u64,
    rng: SimpleRng,
    seed: u32,
    language: Language,
    category: Option<Category>,
    education_kind: Option<EducationGameKind>,
    arcade_kind: Option<ArcadeGameKind>,
    rules: Rules,
    /// Incremented on every start/restart
    episode_id: u32,
    quit_requested: bool,
    /// Movement held during the current tick, consumed by arcade games
    controls: Controls,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(&mut rng, 0);
        Self {
            mode: Mode::Menu,
            board,
            progression: Progression::new(),
            question: None,
            last_answer: None,
            pending_direction: None,
            clock_ms: 0,
            rng,
            seed,
            language: Language::default(),
            category: None,
            education_kind: None,
            arcade_kind: None,
            rules,
            episode_id: 0,
            quit_requested: false,
            controls: Controls::default(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_tag(&self) -> ModeTag {
        self.mode.tag()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn education_kind(&self) -> Option<EducationGameKind> {
        self.education_kind
    }

    pub fn arcade_kind(&self) -> Option<ArcadeGameKind> {
        self.arcade_kind
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Replace the board, e.g. to script a position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(from = self.mode.tag().as_str(), to = mode.tag().as_str(), "mode transition");
        self.mode = mode;
    }

    /// Full reset into a fresh snake round.
    pub fn start(&mut self) {
        self.board.reset(&mut self.rng, self.clock_ms);
        self.progression = Progression::new();
        self.question = None;
        self.last_answer = None;
        self.pending_direction = None;
        self.category = None;
        self.education_kind = None;
        self.arcade_kind = None;
        self.controls = Controls::default();
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, seed = self.seed, "session started");
        self.set_mode(Mode::Playing);
    }

    pub fn restart(&mut self) {
        self.start();
    }

    /// Apply one intent. Returns whether it changed anything.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if intent == Intent::Quit {
            debug!(mode = self.mode.tag().as_str(), "quit requested");
            self.quit_requested = true;
            return true;
        }

        match &mut self.mode {
            Mode::Menu => match intent {
                Intent::Start => {
                    self.start();
                    true
                }
                Intent::ToggleLanguage => {
                    self.language = self.language.toggled();
                    debug!(language = self.language.as_str(), "language toggled");
                    true
                }
                _ => false,
            },
            Mode::Playing => self.apply_playing(intent),
            Mode::Paused => {
                if intent == Intent::PauseToggle {
                    self.set_mode(Mode::Playing);
                    return true;
                }
                false
            }
            Mode::GameOver => {
                if intent == Intent::Restart {
                    self.restart();
                    return true;
                }
                false
            }
            Mode::CategorySelect => match intent {
                Intent::SelectOption(n) => match Category::from_option(n) {
                    Some(category) => {
                        self.category = Some(category);
                        self.set_mode(match category {
                            Category::Education => Mode::EducationSelect,
                            Category::Arcade => Mode::ArcadeSelect,
                        });
                        true
                    }
                    None => false,
                },
                Intent::Escape => {
                    self.resume_from_detour();
                    true
                }
                _ => false,
            },
            Mode::EducationSelect => match intent {
                Intent::SelectOption(n) => match EducationGameKind::from_option(n) {
                    Some(kind) => {
                        self.education_kind = Some(kind);
                        let game = EducationGame::new(kind, &mut self.rng);
                        self.set_mode(Mode::EducationPlaying(game));
                        true
                    }
                    None => false,
                },
                Intent::Back => {
                    self.set_mode(Mode::CategorySelect);
                    true
                }
                _ => false,
            },
            Mode::ArcadeSelect => match intent {
                Intent::SelectOption(n) => match ArcadeGameKind::from_option(n) {
                    Some(kind) => {
                        self.arcade_kind = Some(kind);
                        self.controls = Controls::default();
                        self.set_mode(Mode::ArcadePlaying(ArcadeGame::create(kind)));
                        true
                    }
                    None => false,
                },
                Intent::Back => {
                    self.set_mode(Mode::CategorySelect);
                    true
                }
                _ => false,
            },
            Mode::EducationPlaying(game) => {
                if intent == Intent::Escape {
                    self.set_mode(Mode::EducationSelect);
                    return true;
                }
                game.press(intent)
            }
            Mode::ArcadePlaying(game) => {
                if intent == Intent::Escape {
                    self.set_mode(Mode::ArcadeSelect);
                    return true;
                }
                if intent.direction().is_some() {
                    self.controls.apply(intent);
                    return true;
                }
                game.press(intent)
            }
        }
    }

    fn apply_playing(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::PauseToggle => {
                self.set_mode(Mode::Paused);
                true
            }
            Intent::SelectOption(n) if self.question.is_some() => {
                self.answer_question(n).is_some()
            }
            _ => match intent.direction() {
                Some(dir) if self.question.is_none() => {
                    // A reversal must not replace a turn queued earlier in the same window.
                    if dir.is_opposite(self.board.heading()) {
                        return false;
                    }
                    self.pending_direction = Some(dir);
                    true
                }
                _ => false,
            },
        }
    }

    /// Leave the category screen and continue the snake round.
    fn resume_from_detour(&mut self) {
        self.pending_direction = None;
        self.set_mode(Mode::Playing);
    }

    /// Answer the current question with a 1-based option.
    ///
    /// Returns `None` outside `Playing`, when no question is outstanding or
    /// when the option does not exist. A correct answer grows the snake and clears the question; a wrong
    /// one keeps it for another try.
    pub fn answer_question(&mut self, option: u8) -> Option<AnswerOutcome> {
        if !matches!(self.mode, Mode::Playing) {
            return None;
        }
        let correct = self.question.as_ref()?.check(option)?;
        let outcome = self.progression.record_answer(correct);
        self.last_answer = Some(correct);
        debug!(
            option,
            correct,
            score = self.progression.score(),
            streak = self.progression.streak(),
            "question answered"
        );

        if correct {
            self.board.grow();
            self.board.spawn_food(&mut self.rng);
            self.question = None;
            if outcome.leveled_up {
                info!(
                    level = self.progression.level(),
                    move_delay_ms = outcome.move_delay_ms,
                    "level up"
                );
            }
        }
        Some(outcome)
    }

    /// Advance simulated time by `elapsed_ms` and run the active component.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms += u64::from(elapsed_ms);

        if matches!(self.mode, Mode::Playing) {
            self.tick_board();
            return;
        }

        match &mut self.mode {
            Mode::EducationPlaying(game) => game.tick(&mut self.rng),
            Mode::ArcadePlaying(game) => {
                game.tick(self.controls, &mut self.rng);
                self.controls = Controls::default();
            }
            _ => {}
        }
    }

    fn tick_board(&mut self) {
        if self.question.is_some() {
            return;
        }
        let result: TickResult = self.board.tick(
            self.clock_ms,
            self.pending_direction,
            self.progression.move_delay_ms(),
        );
        if result.moved || result.collided() {
            self.pending_direction = None;
        }

        if let Some(collision) = result.collision {
            info!(
                ?collision,
                score = self.progression.score(),
                length = self.board.len(),
                "game over"
            );
            self.set_mode(Mode::GameOver);
            return;
        }

        if result.ate_food {
            match self.rules.food_reward {
                FoodReward::Detour => {
                    self.board.spawn_food(&mut self.rng);
                    self.set_mode(Mode::CategorySelect);
                }
                FoodReward::Question => {
                    let level = self.progression.level();
                    let q = match self.rules.question_subject {
                        Some(subject) => question::generate(subject, level, &mut self.rng),
                        None => question::generate_general(level, &mut self.rng),
                    };
                    debug!(subject = q.subject().as_str(), prompt = q.prompt(), "question posed");
                    self.last_answer = None;
                    self.question = Some(q);
                }
            }
        }
    }

    /// Apply a frame's intents, then advance by `elapsed_ms`.
    pub fn step(&mut self, elapsed_ms: u32, intents: &[Intent]) -> Flow {
        for &intent in intents {
            self.apply_intent(intent);
            if self.quit_requested {
                return Flow::Quit;
            }
        }
        self.tick(elapsed_ms);
        Flow::Continue
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.mode = self.mode.tag();
        out.language = self.language;
        out.snake.clear();
        out.snake.extend(self.board.snake().iter().copied());
        out.heading = self.board.heading();
        out.food = self.board.food();
        out.question.clone_from(&self.question);
        out.last_answer = self.last_answer;
        out.score = self.progression.score();
        out.level = self.progression.level();
        out.streak = self.progression.streak();
        out.best_streak = self.progression.best_streak();
        out.correct = self.progression.correct();
        out.attempted = self.progression.attempted();
        out.accuracy = self.progression.accuracy();
        out.move_delay_ms = self.progression.move_delay_ms();
        out.category = self.category;
        out.education = match &self.mode {
            Mode::EducationPlaying(game) => Some(game.clone()),
            _ => None,
        };
        out.arcade = match &self.mode {
            Mode::ArcadePlaying(game) => Some(game.clone()),
            _ => None,
        };
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.clock_ms = self.clock_ms;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
