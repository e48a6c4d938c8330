// Level 2: more spaced platforms.
use super::{Level, Platform};
use crate::config::Bounds;

pub fn level2(b: Bounds) -> Level {
    Level {
        name: "Wide Gaps",
        platforms: vec![
            Platform::floor(b),
            Platform::ledge(b, 90.0, 120.0, 80.0),
            Platform::ledge(b, 220.0, 160.0, 120.0),
            Platform::ledge(b, 400.0, 100.0, 90.0),
            Platform::ledge(b, 520.0, 140.0, 70.0),
        ],
    }
}
