use rand::Rng;

use crate::{palette::ImageId, SPEED};

/// Velocity of the logo together with the image it is showing.
///
/// Values are replaced rather than mutated: every reversal goes through
/// [`MotionState::new`], which picks a fresh image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    velocity_x: f64,
    velocity_y: f64,
    image: ImageId,
}

impl MotionState {
    /// The caller is responsible for passing velocities of magnitude [`SPEED`].
    pub fn new<R: Rng + ?Sized>(velocity_x: f64, velocity_y: f64, rng: &mut R) -> Self {
        Self {
            velocity_x,
            velocity_y,
            image: ImageId::random(rng),
        }
    }

    /// Random sign on each axis, `SPEED` in magnitude.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let velocity_x = random_direction(rng);
        let velocity_y = random_direction(rng);
        Self::new(velocity_x, velocity_y, rng)
    }

    pub fn velocity_x(&self) -> f64 {
        self.velocity_x
    }

    pub fn velocity_y(&self) -> f64 {
        self.velocity_y
    }

    pub fn image(&self) -> ImageId {
        self.image
    }

    pub fn reverse_velocity_x<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(-self.velocity_x, self.velocity_y, rng)
    }

    pub fn reverse_velocity_y<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.velocity_x, -self.velocity_y, rng)
    }

    pub fn with_image(self, image: ImageId) -> Self {
        Self { image, ..self }
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) {
        SPEED
    } else {
        -SPEED
    }
}
