// Level 1: three ledges climbing left to right.
use super::{Level, Platform};
use crate::config::Bounds;

pub fn level1(b: Bounds) -> Level {
    Level {
        name: "First Steps",
        platforms: vec![
            Platform::floor(b),
            Platform::ledge(b, 120.0, 90.0, 100.0),
            Platform::ledge(b, 280.0, 140.0, 100.0),
            Platform::ledge(b, 450.0, 190.0, 120.0),
        ],
    }
}
