//! Ball run: roll a ball with momentum around an arena littered with obstacles.

use crate::rng::SimpleRng;
use crate::types::{Intent, ARENA_HEIGHT, ARENA_WIDTH};

use super::{Controls, MiniGame, Point};

const ACCELERATION: f32 = 0.5;
const FRICTION: f32 = 0.95;
/// Velocity kept (and reversed) on a bounce
const RESTITUTION: f32 = 0.8;
/// Ball radius; also its distance from the walls at contact
const WALL_MARGIN: f32 = 20.0;
/// Obstacle spawn chance per tick, out of 200
const SPAWN_CHANCE: u32 = 2;
const SPAWN_MARGIN: i32 = 50;
const MAX_OBSTACLES: usize = 16;
const CONTACT_REACH: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BallRun {
    ball: Point,
    velocity: Point,
    obstacles: Vec<Point>,
    score: u32,
}

impl BallRun {
    pub fn new() -> Self {
        Self {
            ball: Point::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            velocity: Point::default(),
            obstacles: Vec::new(),
            score: 0,
        }
    }

    pub fn ball(&self) -> Point {
        self.ball
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }
}

impl Default for BallRun {
    fn default() -> Self {
        Self::new()
    }
}

/// Reflect `pos` into `[lo, hi]`, damping the velocity on contact.
fn bounce(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32) {
    if *pos < lo || *pos > hi {
        *vel *= -RESTITUTION;
        *pos = pos.clamp(lo, hi);
    }
}

impl MiniGame for BallRun {
    fn press(&mut self, _intent: Intent) -> bool {
        false
    }

    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng) {
        if controls.left {
            self.velocity.x -= ACCELERATION;
        }
        if controls.right {
            self.velocity.x += ACCELERATION;
        }
        if controls.up {
            self.velocity.y -= ACCELERATION;
        }
        if controls.down {
            self.velocity.y += ACCELERATION;
        }

        self.velocity.x *= FRICTION;
        self.velocity.y *= FRICTION;
        self.ball.x += self.velocity.x;
        self.ball.y += self.velocity.y;

        bounce(
            &mut self.ball.x,
            &mut self.velocity.x,
            WALL_MARGIN,
            ARENA_WIDTH - WALL_MARGIN,
        );
        bounce(
            &mut self.ball.y,
            &mut self.velocity.y,
            WALL_MARGIN,
            ARENA_HEIGHT - WALL_MARGIN,
        );

        if self.obstacles.len() < MAX_OBSTACLES && rng.chance(SPAWN_CHANCE, 200) {
            let x = rng.range_inclusive(SPAWN_MARGIN, ARENA_WIDTH as i32 - SPAWN_MARGIN);
            let y = rng.range_inclusive(SPAWN_MARGIN, ARENA_HEIGHT as i32 - SPAWN_MARGIN);
            self.obstacles.push(Point::new(x as f32, y as f32));
        }

        let ball = self.ball;
        if let Some(hit) = self.obstacles.iter().position(|o| o.near(ball, CONTACT_REACH)) {
            self.obstacles.swap_remove(hit);
            self.velocity.x *= -RESTITUTION;
            self.velocity.y *= -RESTITUTION;
        }

        self.score += 1;
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

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn acceleration_and_friction() {
        let mut game = BallRun::new();
        let mut rng = SimpleRng::new(1);
        let right = Controls {
            right: true,
            ..Controls::default()
        };
        game.tick(right, &mut rng);
        assert!(approx(game.velocity().x, 0.475));
        assert!(approx(game.ball().x, 400.475));
    }

    #[test]
    fn walls_reflect_with_restitution() {
        let mut game = BallRun::new();
        game.ball = Point::new(21.0, 300.0);
        game.velocity = Point::new(-10.0, 0.0);
        let mut rng = SimpleRng::new(1);
        game.obstacles.clear();
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.ball().x, WALL_MARGIN);
        assert!(approx(game.velocity().x, 10.0 * FRICTION * RESTITUTION));
    }

    #[test]
    fn obstacle_knocks_ball_back() {
        let mut game = BallRun::new();
        game.velocity = Point::new(2.0, 0.0);
        game.obstacles.push(Point::new(410.0, 300.0));
        let mut rng = SimpleRng::new(1);
        game.tick(Controls::default(), &mut rng);
        assert!(game.velocity().x < 0.0);
        assert!(!game.obstacles().contains(&Point::new(410.0, 300.0)));
    }

    #[test]
    fn score_counts_ticks() {
        let mut game = BallRun::new();
        let mut rng = SimpleRng::new(1);
        for _ in 0..10 {
            game.tick(Controls::default(), &mut rng);
        }
        assert_eq!(game.score(), 10);
    }
}
