//! Placeholder contribution graph.
//!
//! DESIGN
//! ======
//! The graph is decoration, not data. It is generated from a fixed seed so
//! the server-rendered grid and the hydrated grid are identical.

#[cfg(test)]
#[path = "contributions_test.rs"]
mod contributions_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;
/// Highest activity level; levels run `0..=MAX_LEVEL`.
pub const MAX_LEVEL: u8 = 4;
/// Seed used by the stats section.
pub const GRAPH_SEED: u64 = 0x5eed_2024;

/// One column of the graph, Sunday first.
pub type Week = [u8; DAYS_PER_WEEK];

/// Generate `WEEKS` columns of activity levels from `seed`.
pub fn generate(seed: u64) -> Vec<Week> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..WEEKS)
        .map(|_| {
            let mut week = [0; DAYS_PER_WEEK];
            for day in &mut week {
                *day = rng.random_range(0..=MAX_LEVEL);
            }
            week
        })
        .collect()
}

/// Sum of all levels, shown as the yearly total.
pub fn total(weeks: &[Week]) -> u32 {
    weeks.iter().flatten().map(|&level| u32::from(level)).sum()
}

/// CSS modifier for a cell; levels above `MAX_LEVEL` clamp to it.
pub fn level_class(level: u8) -> &'static str {
    match level {
        0 => "contrib-cell contrib-cell--0",
        1 => "contrib-cell contrib-cell--1",
        2 => "contrib-cell contrib-cell--2",
        3 => "contrib-cell contrib-cell--3",
        _ => "contrib-cell contrib-cell--4",
    }
}

/// Tooltip text for a cell.
pub fn cell_title(level: u8) -> String {
    match level {
        1 => "1 contribution".to_owned(),
        n => format!("{n} contributions"),
    }
}
