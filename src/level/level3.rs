// Level 3: higher platforms.
use super::{Level, Platform};
use crate::config::Bounds;

pub fn level3(b: Bounds) -> Level {
    Level {
        name: "High Ledges",
        platforms: vec![
            Platform::floor(b),
            Platform::ledge(b, 150.0, 180.0, 130.0),
            Platform::ledge(b, 350.0, 210.0, 90.0),
            Platform::ledge(b, 500.0, 240.0, 100.0),
        ],
    }
}
