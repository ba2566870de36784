//! Shared helpers for integration tests.

#![allow(dead_code)]

use kamisado::core::{Coord, Setup};
use kamisado::rules::Referee;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

/// A referee loaded with `setup`.
pub fn load(setup: Setup) -> Referee {
    let mut referee = Referee::default();
    referee.apply_setup(&setup).expect("setup is on the board");
    referee
}
