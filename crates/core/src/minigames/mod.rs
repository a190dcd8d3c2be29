//! Mini-game registry - the arcade category's self-contained games
//!
//! Every game follows the same lifecycle: constructed when selected
//! ([`ArcadeGame::create`]), advanced once per tick while active, and dropped
//! when the player escapes back to the list. Games own their score and never
//! touch the snake board or progression.
//!
//! Positions live in a continuous 800x600 arena, `y` growing downwards.

mod ball_run;
mod car_racing;
mod space_shooter;
mod tic_tac_toe;
mod zombie_dash;

pub use ball_run::BallRun;
pub use car_racing::CarRacing;
pub use space_shooter::SpaceShooter;
pub use tic_tac_toe::{Mark, TicTacToe, TicTacToeOutcome};
pub use zombie_dash::ZombieDash;

use crate::rng::SimpleRng;
use crate::types::{ArcadeGameKind, Intent};

/// A position in the arena
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Axis-aligned proximity test: both axis distances below `reach`.
    pub fn near(&self, other: Point, reach: f32) -> bool {
        (self.x - other.x).abs() < reach && (self.y - other.y).abs() < reach
    }
}

/// Directions and buttons held during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    /// Fold one tick's intents into held controls.
    pub fn from_intents(intents: &[Intent]) -> Self {
        let mut controls = Controls::default();
        for intent in intents {
            controls.apply(*intent);
        }
        controls
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::MoveUp => self.up = true,
            Intent::MoveDown => self.down = true,
            Intent::MoveLeft => self.left = true,
            Intent::MoveRight => self.right = true,
            Intent::Fire => self.fire = true,
            _ => {}
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right || self.fire
    }
}

/// Uniform capability of an arcade game
pub trait MiniGame {
    /// Discrete input (a square pick, a shot, a restart). Returns whether the
    /// game reacted.
    fn press(&mut self, intent: Intent) -> bool;

    /// Advance one simulation step with the currently held controls.
    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng);

    fn score(&self) -> u32;

    /// A finished run ignores ticks until it is re-created.
    fn finished(&self) -> bool;
}

/// The closed set of arcade games, dispatched by `match`
#[derive(Debug, Clone, PartialEq)]
pub enum ArcadeGame {
    TicTacToe(TicTacToe),
    SpaceShooter(SpaceShooter),
    CarRacing(CarRacing),
    ZombieDash(ZombieDash),
    BallRun(BallRun),
}

impl ArcadeGame {
    /// Construct a fresh run of `kind`.
    pub fn create(kind: ArcadeGameKind) -> Self {
        match kind {
            ArcadeGameKind::TicTacToe => ArcadeGame::TicTacToe(TicTacToe::new()),
            ArcadeGameKind::SpaceShooter => ArcadeGame::SpaceShooter(SpaceShooter::new()),
            ArcadeGameKind::CarRacing => ArcadeGame::CarRacing(CarRacing::new()),
            ArcadeGameKind::ZombieDash => ArcadeGame::ZombieDash(ZombieDash::new()),
            ArcadeGameKind::BallRun => ArcadeGame::BallRun(BallRun::new()),
        }
    }

    pub fn kind(&self) -> ArcadeGameKind {
        match self {
            ArcadeGame::TicTacToe(_) => ArcadeGameKind::TicTacToe,
            ArcadeGame::SpaceShooter(_) => ArcadeGameKind::SpaceShooter,
            ArcadeGame::CarRacing(_) => ArcadeGameKind::CarRacing,
            ArcadeGame::ZombieDash(_) => ArcadeGameKind::ZombieDash,
            ArcadeGame::BallRun(_) => ArcadeGameKind::BallRun,
        }
    }

    fn inner(&self) -> &dyn MiniGame {
        match self {
            ArcadeGame::TicTacToe(g) => g,
            ArcadeGame::SpaceShooter(g) => g,
            ArcadeGame::CarRacing(g) => g,
            ArcadeGame::ZombieDash(g) => g,
            ArcadeGame::BallRun(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MiniGame {
        match self {
            ArcadeGame::TicTacToe(g) => g,
            ArcadeGame::SpaceShooter(g) => g,
            ArcadeGame::CarRacing(g) => g,
            ArcadeGame::ZombieDash(g) => g,
            ArcadeGame::BallRun(g) => g,
        }
    }
}

impl MiniGame for ArcadeGame {
    /// `Restart` on a finished run starts a new one; other intents go to the game.
    fn press(&mut self, intent: Intent) -> bool {
        if self.inner_mut().press(intent) {
            return true;
        }
        if intent == Intent::Restart && self.finished() {
            *self = ArcadeGame::create(self.kind());
            return true;
        }
        false
    }

    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng) {
        if !self.finished() {
            self.inner_mut().tick(controls, rng);
        }
    }

    fn score(&self) -> u32 {
        self.inner().score()
    }

    fn finished(&self) -> bool {
        self.inner().finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_matches_kind() {
        for kind in ArcadeGameKind::ALL {
            let game = ArcadeGame::create(kind);
            assert_eq!(game.kind(), kind);
            assert_eq!(game.score(), 0);
            assert!(!game.finished());
        }
    }

    #[test]
    fn controls_fold_intents() {
        let c = Controls::from_intents(&[Intent::MoveLeft, Intent::Fire, Intent::Start]);
        assert!(c.left && c.fire);
        assert!(!c.right && !c.up && !c.down);
        assert!(!Controls::default().any());
    }

    #[test]
    fn restart_ignored_while_running() {
        let mut game = ArcadeGame::create(ArcadeGameKind::BallRun);
        let mut rng = SimpleRng::new(1);
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.score(), 1);
        assert!(!game.press(Intent::Restart));
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn point_proximity() {
        let a = Point::new(100.0, 100.0);
        assert!(a.near(Point::new(119.0, 81.0), 20.0));
        assert!(!a.near(Point::new(120.0, 100.0), 20.0));
    }
}
