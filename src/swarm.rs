// Copyright (c) 2026 rezky_nightky

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::snake::Snake;

pub const DEFAULT_SPAWN_CHANCE: f32 = 0.08;
// Only every other column may spawn, leaving visual gaps.
pub const SPAWN_STRIDE: u16 = 2;
pub const DEFAULT_MIN_LENGTH: u16 = 3;
pub const DEFAULT_MAX_LENGTH: u16 = 12;

pub struct Swarm {
    snakes: Vec<Snake>,
    spawn_chance: f32,
    mt: StdRng,
    rand_chance: Uniform<f32>,
    rand_len: Uniform<u16>,
}

impl Swarm {
    pub fn new(seed: Option<u64>) -> Self {
        let mt = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            snakes: Vec::new(),
            spawn_chance: DEFAULT_SPAWN_CHANCE,
            mt,
            rand_chance: Uniform::new(0.0, 1.0).expect("valid range"),
            rand_len: Uniform::new_inclusive(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
                .expect("valid range"),
        }
    }

    pub fn set_spawn_chance(&mut self, chance: f32) {
        self.spawn_chance = chance.clamp(0.0, 1.0);
    }

    pub fn set_length_range(&mut self, low: u16, high: u16) {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        self.rand_len = Uniform::new_inclusive(lo.max(1), hi.max(1)).expect("valid range");
    }

    pub fn push(&mut self, snake: Snake) {
        self.snakes.push(snake);
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    // A column is closed this tick while an existing snake's trail still
    // covers row 0, so two snakes never stack on the same spawn point.
    pub fn spawn(&mut self, width: u16) {
        let mut open = vec![true; width as usize];
        for s in &self.snakes {
            if s.head.y - s.length as i32 <= 0 {
                if let Some(slot) = open.get_mut(s.head.x as usize) {
                    *slot = false;
                }
            }
        }

        for x in (0..width).step_by(SPAWN_STRIDE as usize) {
            if self.rand_chance.sample(&mut self.mt) < self.spawn_chance && open[x as usize] {
                let length = self.rand_len.sample(&mut self.mt);
                self.snakes.push(Snake::new(x, 0, length));
            }
        }
    }

    // Full pass each tick; relative order of survivors is preserved.
    pub fn cull(&mut self, height: u16) {
        self.snakes.retain(|s| !s.is_off_screen(height));
    }

    // Sequential, before the render fan-out starts, so no render task ever
    // sees a half-updated position.
    pub fn advance_all(&mut self) {
        for s in &mut self.snakes {
            s.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_swarm() -> Swarm {
        Swarm::new(Some(0x5eed))
    }

    #[test]
    fn cull_on_empty_population_is_empty() {
        let mut swarm = make_swarm();
        swarm.cull(24);
        assert!(swarm.snakes().is_empty());
    }

    #[test]
    fn cull_preserves_order_and_is_idempotent() {
        let mut swarm = make_swarm();
        swarm.push(Snake::new(2, 10, 4));
        swarm.push(Snake::new(4, 40, 3)); // off-screen at height 24
        swarm.push(Snake::new(6, 5, 5));
        swarm.push(Snake::new(8, 29, 5)); // boundary case, still visible

        swarm.cull(24);
        let survivors: Vec<u16> = swarm.snakes().iter().map(|s| s.head.x).collect();
        assert_eq!(survivors, vec![2, 6, 8]);

        let before = swarm.snakes().to_vec();
        swarm.cull(24);
        assert_eq!(swarm.snakes(), &before[..]);
    }

    #[test]
    fn spawn_only_uses_even_columns() {
        let mut swarm = make_swarm();
        swarm.set_spawn_chance(1.0);
        swarm.spawn(11);

        let mut cols: Vec<u16> = swarm.snakes().iter().map(|s| s.head.x).collect();
        cols.sort_unstable();
        assert_eq!(cols, vec![0, 2, 4, 6, 8, 10]);
        assert!(swarm.snakes().iter().all(|s| s.head.y == 0));
    }

    #[test]
    fn spawn_skips_columns_still_covering_row_zero() {
        let mut swarm = make_swarm();
        swarm.set_spawn_chance(1.0);
        // head.y - length == -3 <= 0: still on the spawn row.
        swarm.push(Snake::new(4, 2, 5));
        swarm.spawn(10);

        let at_four = swarm.snakes().iter().filter(|s| s.head.x == 4).count();
        assert_eq!(at_four, 1);
        for x in [0u16, 2, 6, 8] {
            assert_eq!(swarm.snakes().iter().filter(|s| s.head.x == x).count(), 1);
        }
    }

    #[test]
    fn spawn_reopens_columns_once_the_trail_clears_row_zero() {
        let mut swarm = make_swarm();
        swarm.set_spawn_chance(1.0);
        // head.y - length == 7 > 0: trail no longer touches the top row.
        swarm.push(Snake::new(2, 10, 3));
        swarm.spawn(4);

        let at_two = swarm.snakes().iter().filter(|s| s.head.x == 2).count();
        assert_eq!(at_two, 2);
    }

    #[test]
    fn spawn_on_empty_population_stays_within_bounds() {
        let mut swarm = make_swarm();
        swarm.spawn(10);

        assert!(swarm.snakes().len() <= 5);
        for s in swarm.snakes() {
            assert_eq!(s.head.x % 2, 0);
            assert_eq!(s.head.y, 0);
            assert!((3..=12).contains(&s.length));
        }
    }

    #[test]
    fn advance_all_moves_every_head_down_one() {
        let mut swarm = make_swarm();
        swarm.push(Snake::new(0, 1, 3));
        swarm.push(Snake::new(2, 9, 6));
        swarm.advance_all();

        let ys: Vec<i32> = swarm.snakes().iter().map(|s| s.head.y).collect();
        assert_eq!(ys, vec![2, 10]);
    }
}
