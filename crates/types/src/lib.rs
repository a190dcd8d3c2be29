//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, tests).
//!
//! # Grid Dimensions
//!
//! The snake board is a 40x30 grid (an 800x600 play area split into 20-unit cells):
//!
//! - **Width**: 40 columns (indexed 0-39)
//! - **Height**: 30 rows (indexed 0-29)
//! - **Spawn position**: the grid center, (20, 15), heading right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Driver tick interval (10 ticks per second) |
//! | `INITIAL_MOVE_DELAY_MS` | 200 | Snake step interval at level 1 |
//! | `MOVE_DELAY_STEP_MS` | 10 | Interval reduction per level |
//! | `MOVE_DELAY_FLOOR_MS` | 100 | Fastest step interval |
//!
//! # Examples
//!
//! ```
//! use snake_evolution_types::{Cell, Direction, Intent, Subject, GRID_WIDTH, GRID_HEIGHT};
//!
//! let head = Cell::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Some(Cell::new(11, 10)));
//! assert_eq!(Cell::new(0, 5).step(Direction::Left), None);
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Intent::MoveUp.direction(), Some(Direction::Up));
//!
//! // Unknown subjects degrade to math.
//! assert_eq!(Subject::parse_or_default("astrology"), Subject::Math);
//!
//! assert_eq!(GRID_WIDTH, 40);
//! assert_eq!(GRID_HEIGHT, 30);
//! ```

/// Grid width in cells (40 columns)
pub const GRID_WIDTH: u8 = 40;

/// Grid height in cells (30 rows)
pub const GRID_HEIGHT: u8 = 30;

/// Total number of grid cells
pub const GRID_CELLS: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Driver tick interval in milliseconds (100ms = 10 ticks per second)
pub const TICK_MS: u32 = 100;

/// Snake step interval for a fresh session
pub const INITIAL_MOVE_DELAY_MS: u32 = 200;

/// Lower bound for the snake step interval
pub const MOVE_DELAY_FLOOR_MS: u32 = 100;

/// Step interval reduction applied on every level-up
pub const MOVE_DELAY_STEP_MS: u32 = 10;

/// A level-up happens every N cumulative correct answers
pub const LEVEL_UP_EVERY: u32 = 5;

/// Points for any correct answer, before the streak bonus
pub const BASE_ANSWER_POINTS: u32 = 10;

/// Streak bonus per consecutive correct answer
pub const STREAK_BONUS_PER_ANSWER: u32 = 2;

/// Maximum streak bonus for a single answer
pub const STREAK_BONUS_CAP: u32 = 20;

/// Every multiple-choice question carries exactly this many options
pub const OPTION_COUNT: usize = 4;

/// Each category offers this many sub-games
pub const SUB_GAME_COUNT: u8 = 5;

/// Points awarded by a typed-answer sub-game for a solved challenge
pub const CHALLENGE_POINTS: u32 = 10;

/// Arcade mini-game play area width (continuous units)
pub const ARENA_WIDTH: f32 = 800.0;

/// Arcade mini-game play area height (continuous units)
pub const ARENA_HEIGHT: f32 = 600.0;

/// A grid cell position.
///
/// Valid cells satisfy `0 <= x < GRID_WIDTH` and `0 <= y < GRID_HEIGHT`.
/// `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The grid center, where every session spawns its snake.
    pub const fn center() -> Self {
        Self {
            x: (GRID_WIDTH / 2) as i8,
            y: (GRID_HEIGHT / 2) as i8,
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH as i8 && self.y >= 0 && self.y < GRID_HEIGHT as i8
    }

    /// The neighbouring cell in `direction`, or `None` when it leaves the grid.
    pub fn step(&self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let next = Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        };
        next.in_bounds().then_some(next)
    }

    /// Row-major index into a flat grid array, `None` when out of bounds.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(self.y as usize * GRID_WIDTH as usize + self.x as usize)
    }
}

/// Heading of the snake. Each variant is a unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta `(dx, dy)`; up is negative `y`.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Decoded player intents.
///
/// The driver translates physical keys into intents; the engine never sees raw
/// input. Intents that make no sense for the active mode are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Pick a numbered entry (1-based): a category, a sub-game, an answer
    /// option or a tic-tac-toe square.
    SelectOption(u8),
    /// Leave the menu and begin a session
    Start,
    /// Begin a fresh session from the game-over screen, or a fresh round of
    /// a finished mini-game
    Restart,
    PauseToggle,
    /// Return from a sub-game list to the category list
    Back,
    /// Leave the active sub-game
    Escape,
    Quit,
    ToggleLanguage,
    /// Primary action inside an arcade mini-game (shoot)
    Fire,
    /// One typed character for answer entry
    TypeChar(char),
    Backspace,
    /// Submit typed answer
    Submit,
}

impl Intent {
    /// The heading requested by a movement intent.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Intent::MoveUp,
            Direction::Down => Intent::MoveDown,
            Direction::Left => Intent::MoveLeft,
            Direction::Right => Intent::MoveRight,
        }
    }
}

/// Question subjects (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Science,
    Geography,
    History,
    Language,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::Geography,
        Subject::History,
        Subject::Language,
    ];

    /// Parse subject from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "math" => Some(Subject::Math),
            "science" => Some(Subject::Science),
            "geography" => Some(Subject::Geography),
            "history" => Some(Subject::History),
            "language" => Some(Subject::Language),
            _ => None,
        }
    }

    /// Like [`Subject::from_str`], but unknown subjects fall back to math.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Subject::Math)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Geography => "geography",
            Subject::History => "history",
            Subject::Language => "language",
        }
    }
}

/// The two content categories offered after the snake eats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Typed-answer subject games
    Education,
    /// Reflex mini-games
    Arcade,
}

impl Category {
    /// Map a 1-based menu option to a category.
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(Category::Education),
            2 => Some(Category::Arcade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Arcade => "arcade",
        }
    }
}

/// Typed-answer sub-games of the education category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationGameKind {
    MathWizard,
    ScienceLab,
    GeographyQuest,
    HistoryHunter,
    WordMaster,
}

impl EducationGameKind {
    pub const ALL: [EducationGameKind; 5] = [
        EducationGameKind::MathWizard,
        EducationGameKind::ScienceLab,
        EducationGameKind::GeographyQuest,
        EducationGameKind::HistoryHunter,
        EducationGameKind::WordMaster,
    ];

    /// Map a 1-based menu option to a sub-game.
    pub fn from_option(option: u8) -> Option<Self> {
        Self::ALL.get((option as usize).checked_sub(1)?).copied()
    }

    pub fn subject(&self) -> Subject {
        match self {
            EducationGameKind::MathWizard => Subject::Math,
            EducationGameKind::ScienceLab => Subject::Science,
            EducationGameKind::GeographyQuest => Subject::Geography,
            EducationGameKind::HistoryHunter => Subject::History,
            EducationGameKind::WordMaster => Subject::Language,
        }
    }

    /// Localization key for the sub-game title
    pub fn key(&self) -> &'static str {
        match self {
            EducationGameKind::MathWizard => "math_wizard",
            EducationGameKind::ScienceLab => "science_lab",
            EducationGameKind::GeographyQuest => "geography_quest",
            EducationGameKind::HistoryHunter => "history_hunter",
            EducationGameKind::WordMaster => "word_master",
        }
    }
}

/// Reflex mini-games of the arcade category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcadeGameKind {
    TicTacToe,
    SpaceShooter,
    CarRacing,
    ZombieDash,
    BallRun,
}

impl ArcadeGameKind {
    pub const ALL: [ArcadeGameKind; 5] = [
        ArcadeGameKind::TicTacToe,
        ArcadeGameKind::SpaceShooter,
        ArcadeGameKind::CarRacing,
        ArcadeGameKind::ZombieDash,
        ArcadeGameKind::BallRun,
    ];

    /// Map a 1-based menu option to a mini-game.
    pub fn from_option(option: u8) -> Option<Self> {
        Self::ALL.get((option as usize).checked_sub(1)?).copied()
    }

    /// Localization key for the mini-game title
    pub fn key(&self) -> &'static str {
        match self {
            ArcadeGameKind::TicTacToe => "tic_tac_toe",
            ArcadeGameKind::SpaceShooter => "space_shooter",
            ArcadeGameKind::CarRacing => "car_racing",
            ArcadeGameKind::ZombieDash => "zombie_dash",
            ArcadeGameKind::BallRun => "ball_run",
        }
    }
}

/// Display language selector. The engine stores and toggles it; translation
/// content lives with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Tamil,
            Language::Tamil => Language::English,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "tamil" | "ta" => Some(Language::Tamil),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Tamil => "tamil",
        }
    }
}

/// What eating food leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FoodReward {
    /// Food opens the category screen; sub-games are a detour with their own
    /// scores and the snake never grows from them.
    #[default]
    Detour,
    /// Food poses a multiple-choice question; a correct answer grows the snake.
    Question,
}

impl FoodReward {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "detour" | "category" => Some(FoodReward::Detour),
            "question" | "arcade" => Some(FoodReward::Question),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodReward::Detour => "detour",
            FoodReward::Question => "question",
        }
    }
}

/// Data-free tag of the session mode, for renderers and key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeTag {
    Menu,
    CategorySelect,
    EducationSelect,
    EducationPlaying,
    ArcadeSelect,
    ArcadePlaying,
    Playing,
    Paused,
    GameOver,
}

impl ModeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeTag::Menu => "menu",
            ModeTag::CategorySelect => "category_select",
            ModeTag::EducationSelect => "education_select",
            ModeTag::EducationPlaying => "education_playing",
            ModeTag::ArcadeSelect => "arcade_select",
            ModeTag::ArcadePlaying => "arcade_playing",
            ModeTag::Playing => "playing",
            ModeTag::Paused => "paused",
            ModeTag::GameOver => "game_over",
        }
    }
}
