pub mod controller;
pub mod geometry;
pub mod motion_state;
pub mod palette;
pub mod sprite;

use std::time::Duration;

use geometry::Size;

/// Logical size of the view the logo bounces inside.
pub const VIEW_SIZE: Size = Size {
    width: 375.0,
    height: 668.0,
};
pub const LOGO_SIZE: Size = Size {
    width: 70.0,
    height: 35.0,
};
/// Distance travelled along each axis per tick.
pub const SPEED: f64 = 1.0;
pub const TICKS_PER_SECOND: u32 = 60;

pub fn tick_interval() -> Duration {
    Duration::from_secs(1) / TICKS_PER_SECOND
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_velocity {
    ($motion:expr, $x:expr, $y:expr $(,)?) => {
        assert_eq!(
            ($motion.velocity_x(), $motion.velocity_y()),
            ($x as f64, $y as f64)
        )
    };
}
