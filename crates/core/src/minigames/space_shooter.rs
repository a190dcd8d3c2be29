//! Space shooter: slide along the bottom edge and shoot falling enemies.

use crate::rng::SimpleRng;
use crate::types::{Intent, ARENA_HEIGHT, ARENA_WIDTH};

use super::{Controls, MiniGame, Point};

const PLAYER_Y: f32 = 550.0;
const PLAYER_SPEED: f32 = 5.0;
const BULLET_SPEED: f32 = 10.0;
const ENEMY_SPEED: f32 = 3.0;
/// Ticks between enemy spawns
const ENEMY_SPAWN_TICKS: u32 = 60;
const HIT_REACH: f32 = 20.0;
const POINTS_PER_HIT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct SpaceShooter {
    player: Point,
    bullets: Vec<Point>,
    enemies: Vec<Point>,
    spawn_timer: u32,
    score: u32,
}

impl SpaceShooter {
    pub fn new() -> Self {
        Self {
            player: Point::new(ARENA_WIDTH / 2.0, PLAYER_Y),
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawn_timer: 0,
            score: 0,
        }
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn bullets(&self) -> &[Point] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Point] {
        &self.enemies
    }

    fn fire(&mut self) {
        self.bullets.push(self.player);
    }
}

impl Default for SpaceShooter {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for SpaceShooter {
    fn press(&mut self, intent: Intent) -> bool {
        if intent == Intent::Fire {
            self.fire();
            return true;
        }
        false
    }

    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng) {
        if controls.left && self.player.x > 0.0 {
            self.player.x -= PLAYER_SPEED;
        }
        if controls.right && self.player.x < ARENA_WIDTH {
            self.player.x += PLAYER_SPEED;
        }

        for bullet in &mut self.bullets {
            bullet.y -= BULLET_SPEED;
        }
        self.bullets.retain(|b| b.y >= 0.0);

        self.spawn_timer += 1;
        if self.spawn_timer > ENEMY_SPAWN_TICKS {
            let x = rng.range_inclusive(0, ARENA_WIDTH as i32) as f32;
            self.enemies.push(Point::new(x, 0.0));
            self.spawn_timer = 0;
        }

        for enemy in &mut self.enemies {
            enemy.y += ENEMY_SPEED;
        }
        self.enemies.retain(|e| e.y <= ARENA_HEIGHT);

        // Each bullet destroys at most one enemy.
        let mut b = 0;
        while b < self.bullets.len() {
            let bullet = self.bullets[b];
            match self.enemies.iter().position(|e| e.near(bullet, HIT_REACH)) {
                Some(e) => {
                    self.enemies.swap_remove(e);
                    self.bullets.swap_remove(b);
                    self.score += POINTS_PER_HIT;
                }
                None => b += 1,
            }
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn finished(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_is_clamped_by_edges() {
        let mut game = SpaceShooter::new();
        let mut rng = SimpleRng::new(1);
        let left = Controls {
            left: true,
            ..Controls::default()
        };
        for _ in 0..200 {
            game.tick(left, &mut rng);
        }
        assert_eq!(game.player().x, 0.0);
    }

    #[test]
    fn bullets_fly_up_and_expire() {
        let mut game = SpaceShooter::new();
        let mut rng = SimpleRng::new(1);
        assert!(game.press(Intent::Fire));
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.bullets()[0].y, PLAYER_Y - BULLET_SPEED);
        for _ in 0..60 {
            game.tick(Controls::default(), &mut rng);
        }
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn enemy_spawns_after_timer() {
        let mut game = SpaceShooter::new();
        let mut rng = SimpleRng::new(1);
        for _ in 0..ENEMY_SPAWN_TICKS {
            game.tick(Controls::default(), &mut rng);
        }
        assert!(game.enemies().is_empty());
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.enemies().len(), 1);
    }

    #[test]
    fn hit_scores_and_removes_both() {
        let mut game = SpaceShooter::new();
        game.enemies.push(Point::new(400.0, 300.0));
        game.bullets.push(Point::new(405.0, 312.0));
        let mut rng = SimpleRng::new(1);
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.score(), POINTS_PER_HIT);
        assert!(game.enemies().is_empty());
        assert!(game.bullets().is_empty());
    }
}
