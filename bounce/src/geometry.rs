use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }
}

/// A move of a rect from one origin to another, spread over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Rect,
    pub to: Rect,
    pub duration: Duration,
}

impl Transition {
    /// The rect `elapsed` into the transition. Clamped to `to` once the
    /// duration has passed.
    pub fn at(&self, elapsed: Duration) -> Rect {
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        self.to.with_origin(Point {
            x: lerp(self.from.origin.x, self.to.origin.x),
            y: lerp(self.from.origin.y, self.to.origin.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::geometry::{Point, Rect, Size, Transition};

    const SIZE: Size = Size {
        width: 70.0,
        height: 35.0,
    };

    #[test]
    fn edges() {
        let rect = Rect::new(Point { x: 10.0, y: 20.0 }, SIZE);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 80.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 55.0);
    }

    #[test]
    fn transition_interpolates_and_clamps() {
        let transition = Transition {
            from: Rect::new(Point { x: 0.0, y: 10.0 }, SIZE),
            to: Rect::new(Point { x: 4.0, y: 6.0 }, SIZE),
            duration: Duration::from_millis(100),
        };
        assert_eq!(transition.at(Duration::ZERO), transition.from);
        assert_eq!(
            transition.at(Duration::from_millis(50)).origin,
            Point { x: 2.0, y: 8.0 }
        );
        assert_eq!(transition.at(Duration::from_millis(100)), transition.to);
        assert_eq!(transition.at(Duration::from_secs(3)), transition.to);
        assert_eq!(transition.at(Duration::from_millis(50)).size, SIZE);
    }
}
