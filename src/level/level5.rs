// Level 5: final mix of heights and widths.
use super::{Level, Platform};
use crate::config::Bounds;

pub fn level5(b: Bounds) -> Level {
    Level {
        name: "Finale",
        platforms: vec![
            Platform::floor(b),
            Platform::ledge(b, 100.0, 150.0, 90.0),
            Platform::ledge(b, 220.0, 100.0, 80.0),
            Platform::ledge(b, 350.0, 160.0, 110.0),
            Platform::ledge(b, 490.0, 120.0, 90.0),
        ],
    }
}
