//! Car racing: steer between lanes, dodge oncoming obstacles.
//!
//! Each obstacle that leaves the bottom of the road scores a point; touching
//! one crashes the car and ends the run.

use crate::rng::SimpleRng;
use crate::types::{Intent, ARENA_HEIGHT, ARENA_WIDTH};

use super::{Controls, MiniGame, Point};

const CAR_Y: f32 = 500.0;
const CAR_SPEED: f32 = 5.0;
/// Closest the car gets to either side of the arena
const ROAD_MARGIN: f32 = 50.0;
const OBSTACLE_SPEED: f32 = 8.0;
const OBSTACLE_START_Y: f32 = -50.0;
const ROAD_SCROLL: f32 = 5.0;
/// Lane-marking period
const ROAD_PERIOD: f32 = 50.0;
/// Obstacle spawn chance per tick, out of 100
const SPAWN_CHANCE: u32 = 2;
const CAR_HALF_WIDTH: f32 = 20.0;
const CAR_HALF_HEIGHT: f32 = 40.0;
const OBSTACLE_HALF: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CarRacing {
    car: Point,
    obstacles: Vec<Point>,
    road_offset: f32,
    score: u32,
    crashed: bool,
}

impl CarRacing {
    pub fn new() -> Self {
        Self {
            car: Point::new(ARENA_WIDTH / 2.0, CAR_Y),
            obstacles: Vec::new(),
            road_offset: 0.0,
            score: 0,
            crashed: false,
        }
    }

    pub fn car(&self) -> Point {
        self.car
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn road_offset(&self) -> f32 {
        self.road_offset
    }

    pub fn crashed(&self) -> bool {
        self.crashed
    }

    fn hits(&self, obstacle: Point) -> bool {
        (self.car.x - obstacle.x).abs() < CAR_HALF_WIDTH + OBSTACLE_HALF
            && (self.car.y - obstacle.y).abs() < CAR_HALF_HEIGHT + OBSTACLE_HALF
    }
}

impl Default for CarRacing {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for CarRacing {
    fn press(&mut self, _intent: Intent) -> bool {
        false
    }

    fn tick(&mut self, controls: Controls, rng: &mut SimpleRng) {
        if controls.left && self.car.x > ROAD_MARGIN {
            self.car.x -= CAR_SPEED;
        }
        if controls.right && self.car.x < ARENA_WIDTH - ROAD_MARGIN {
            self.car.x += CAR_SPEED;
        }

        self.road_offset += ROAD_SCROLL;
        if self.road_offset > ROAD_PERIOD {
            self.road_offset = 0.0;
        }

        if rng.chance(SPAWN_CHANCE, 100) {
            let x = rng.range_inclusive(100, ARENA_WIDTH as i32 - 100) as f32;
            self.obstacles.push(Point::new(x, OBSTACLE_START_Y));
        }

        for obstacle in &mut self.obstacles {
            obstacle.y += OBSTACLE_SPEED;
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.y <= ARENA_HEIGHT);
        self.score += (before - self.obstacles.len()) as u32;

        if self.obstacles.iter().any(|&o| self.hits(o)) {
            self.crashed = true;
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn finished(&self) -> bool {
        self.crashed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_stays_on_road() {
        let mut game = CarRacing::new();
        let mut rng = SimpleRng::new(2);
        let right = Controls {
            right: true,
            ..Controls::default()
        };
        for _ in 0..200 {
            game.obstacles.clear();
            game.tick(right, &mut rng);
        }
        assert_eq!(game.car().x, ARENA_WIDTH - ROAD_MARGIN);
    }

    #[test]
    fn road_offset_wraps() {
        let mut game = CarRacing::new();
        let mut rng = SimpleRng::new(2);
        for _ in 0..11 {
            game.obstacles.clear();
            game.tick(Controls::default(), &mut rng);
        }
        assert_eq!(game.road_offset(), 0.0);
    }

    #[test]
    fn passed_obstacle_scores() {
        let mut game = CarRacing::new();
        game.obstacles.push(Point::new(100.0, ARENA_HEIGHT - 4.0));
        let mut rng = SimpleRng::new(3);
        game.tick(Controls::default(), &mut rng);
        assert_eq!(game.score(), 1);
        assert!(!game.crashed());
    }

    #[test]
    fn collision_ends_run() {
        let mut game = CarRacing::new();
        game.obstacles.push(Point::new(game.car().x, CAR_Y - 60.0));
        let mut rng = SimpleRng::new(3);
        game.tick(Controls::default(), &mut rng);
        assert!(game.crashed());
        assert!(game.finished());
    }
}
