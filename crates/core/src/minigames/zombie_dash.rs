//! Zombie dash: survive zombies that shamble toward the player.

use crate::rng::SimpleRng;
use crate::types::{Intent, ARENA_HEIGHT, ARENA_WIDTH};

use super::{Controls, MiniGame, Point};

const PLAYER_START_Y: f32 = 550.0;
const PLAYER_SPEED: f32 = 5.0;
/// The player cannot go lower than this distance above the bottom edge
const BOTTOM_MARGIN: f32 = 50.0;
const ZOMBIE_SPEED: f32 = 1.0;
/// Ticks between zombie spawns
const ZOMBIE_SPAWN_TICKS: u32 = 120;
const BITE_REACH: f32 = 30.0;
pub const MAX_HEALTH: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ZombieDash {
    player: Point,
    zombies: Vec<Point>,
    spawn_timer: u32,
    health: u32,
    score: u32,
}

impl ZombieDash {
    pub fn new() -> Self {
        Self {
            player: Point::new(ARENA_WIDTH / 2.0, PLAYER_START_Y),
            zombies: Vec::new(),
            spawn_timer: 0,
            health: MAX_HEALTH,
            score: 0,
        }
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn zombies(&self) -> &[Point] {
        &self.zombies
    }

    pub fn health(&self) -> u32 {
        self.health
    }
}

impl Default for ZombieDash {
    fn default() -> Self {
        Self::new()
    }
}

fn approach(from: f32, to: f32) -> f32 {
    if from < to {
        from + ZOMBIE_SPEED
    } else if from > to {
        from - ZOMBIE_SPEED
    } else {
        from
    }
}

impl MiniGame for ZombieDash {
    fn press(&mut self, _intent: Intent) -> bool {
        false
    }

    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng) {
        if controls.left && self.player.x > 0.0 {
            self.player.x -= PLAYER_SPEED;
        }
        if controls.right && self.player.x < ARENA_WIDTH {
            self.player.x += PLAYER_SPEED;
        }
        if controls.up && self.player.y > 0.0 {
            self.player.y -= PLAYER_SPEED;
        }
        if controls.down && self.player.y < ARENA_HEIGHT - BOTTOM_MARGIN {
            self.player.y += PLAYER_SPEED;
        }

        self.spawn_timer += 1;
        if self.spawn_timer > ZOMBIE_SPAWN_TICKS {
            let x = rng.range_inclusive(0, ARENA_WIDTH as i32) as f32;
            let y = rng.range_inclusive(0, ARENA_HEIGHT as i32) as f32;
            self.zombies.push(Point::new(x, y));
            self.spawn_timer = 0;
        }

        let player = self.player;
        for zombie in &mut self.zombies {
            zombie.x = approach(zombie.x, player.x);
            zombie.y = approach(zombie.y, player.y);
        }
        let before = self.zombies.len();
        self.zombies.retain(|z| !z.near(player, BITE_REACH));
        let bites = (before - self.zombies.len()) as u32;
        self.health = self.health.saturating_sub(bites);

        self.score += 1;
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn finished(&self) -> bool {
        self.health == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zombies_chase_player() {
        let mut game = ZombieDash::new();
        game.zombies.push(Point::new(100.0, 100.0));
        let mut rng = SimpleRng::new(5);
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.zombies()[0], Point::new(101.0, 101.0));
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn bite_costs_health_and_removes_zombie() {
        let mut game = ZombieDash::new();
        let p = game.player();
        game.zombies.push(Point::new(p.x + 10.0, p.y - 10.0));
        let mut rng = SimpleRng::new(5);
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.health(), MAX_HEALTH - 1);
        assert!(game.zombies().is_empty());
    }

    #[test]
    fn run_ends_at_zero_health() {
        let mut game = ZombieDash::new();
        game.health = 1;
        let p = game.player();
        game.zombies.push(p);
        let mut rng = SimpleRng::new(5);
        game.tick(Controls::default(), &mut rng);
        assert!(game.finished());
    }

    #[test]
    fn bottom_margin_limits_player() {
        let mut game = ZombieDash::new();
        let mut rng = SimpleRng::new(5);
        let down = Controls {
            down: true,
            ..Controls::default()
        };
        for _ in 0..50 {
            game.zombies.clear();
            game.tick(down, &mut rng);
        }
        assert_eq!(game.player().y, ARENA_HEIGHT - BOTTOM_MARGIN);
    }
}
