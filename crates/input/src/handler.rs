//! Held-direction tracking for terminal environments.
//!
//! Arcade games steer with "held" keys, but many terminals only report presses
//! (plus auto-repeat). A direction stays held until its release event arrives
//! or until no press for it has been seen for the release timeout.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::direction_for_key;
use crate::types::{Direction, Intent};

// Long enough to bridge the gap between auto-repeat presses, short enough that
// a single tap does not turn into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

#[derive(Debug, Clone)]
pub struct HeldDirections {
    /// Milliseconds since the last press, per direction; `None` when released
    since_press_ms: [Option<u32>; 4],
    key_release_timeout_ms: u32,
}

impl HeldDirections {
    pub fn new() -> Self {
        Self {
            since_press_ms: [None; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or auto-repeat). Returns the direction if the key steers.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = direction_for_key(code)?;
        self.since_press_ms[slot(dir)] = Some(0);
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key(code) {
            self.since_press_ms[slot(dir)] = None;
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.since_press_ms[slot(direction)].is_some()
    }

    /// Age every hold by `elapsed_ms`, drop stale ones, and return a movement
    /// intent for each direction still held.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Intent, 4> {
        let mut intents = ArrayVec::<Intent, 4>::new();
        for dir in DIRECTIONS {
            let entry = &mut self.since_press_ms[slot(dir)];
            if let Some(age) = entry {
                *age = age.saturating_add(elapsed_ms);
                if *age > self.key_release_timeout_ms {
                    *entry = None;
                    continue;
                }
                intents.push(Intent::from_direction(dir));
            }
        }
        intents
    }

    pub fn reset(&mut self) {
        self.since_press_ms = [None; 4];
    }
}

impl Default for HeldDirections {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_held_until_timeout() {
        let mut held = HeldDirections::new().with_key_release_timeout_ms(150);
        assert_eq!(held.handle_key_press(KeyCode::Left), Some(Direction::Left));

        assert_eq!(held.update(100).as_slice(), &[Intent::MoveLeft]);
        assert_eq!(held.update(50).as_slice(), &[Intent::MoveLeft]);
        assert!(held.update(1).is_empty());
        assert!(!held.is_held(Direction::Left));
    }

    #[test]
    fn test_repeat_press_extends_hold() {
        let mut held = HeldDirections::new().with_key_release_timeout_ms(150);
        held.handle_key_press(KeyCode::Char('d'));
        held.update(140);
        held.handle_key_press(KeyCode::Char('d'));
        assert_eq!(held.update(140).as_slice(), &[Intent::MoveRight]);
    }

    #[test]
    fn test_release_event_stops_hold() {
        let mut held = HeldDirections::new();
        held.handle_key_press(KeyCode::Up);
        held.handle_key_press(KeyCode::Right);
        held.handle_key_release(KeyCode::Up);
        assert_eq!(held.update(10).as_slice(), &[Intent::MoveRight]);
    }

    #[test]
    fn test_non_movement_key_is_ignored() {
        let mut held = HeldDirections::new();
        assert_eq!(held.handle_key_press(KeyCode::Char('x')), None);
        assert!(held.update(0).is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut held = HeldDirections::new().with_key_release_timeout_ms(10_000);
        held.handle_key_press(KeyCode::Down);
        held.handle_key_press(KeyCode::Left);
        held.reset();
        assert!(held.update(0).is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(HeldDirections::new().key_release_timeout_ms() > 0);
    }
}
