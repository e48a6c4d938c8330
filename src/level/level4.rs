// Level 4: small platforms, more jumps.
use super::{Level, Platform};
use crate::config::Bounds;

pub fn level4(b: Bounds) -> Level {
    Level {
        name: "Stepping Stones",
        platforms: vec![
            Platform::floor(b),
            Platform::ledge(b, 80.0, 90.0, 50.0),
            Platform::ledge(b, 160.0, 130.0, 60.0),
            Platform::ledge(b, 250.0, 170.0, 40.0),
            Platform::ledge(b, 320.0, 110.0, 70.0),
            Platform::ledge(b, 430.0, 150.0, 60.0),
            Platform::ledge(b, 520.0, 90.0, 50.0),
        ],
    }
}
