#![allow(dead_code)]

use grid_pathfinder::{Position, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Empty `size`x`size` session with both endpoints painted.
pub fn open_session(size: usize, start: Position, end: Position) -> Session {
    let mut session = Session::new(size);
    session.set_start(start).unwrap();
    session.set_end(end).unwrap();
    session
}

/// Corner-to-corner session with roughly `percent`% of cells walled.
pub fn random_session(seed: u64, size: usize, percent: u32) -> Session {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = open_session(size, pos(0, 0), pos(size - 1, size - 1));
    for row in 0..size {
        for col in 0..size {
            let p = pos(row, col);
            if p == pos(0, 0) || p == pos(size - 1, size - 1) {
                continue;
            }
            if rng.gen_range(0..100) < percent {
                session.toggle_obstacle(p).unwrap();
            }
        }
    }
    session
}
