use std::ops::ControlFlow;

use log::{debug, trace};
use rand::Rng;

use crate::{
    geometry::{Point, Rect, Transition},
    motion_state::MotionState,
    sprite::BouncingSprite,
    tick_interval, LOGO_SIZE, VIEW_SIZE,
};

/// The display/timer side of the animation.
pub trait Host {
    /// Renders `transition` for `sprite` and returns once its duration has
    /// elapsed. `Break` ends the animation.
    fn animate(&mut self, sprite: &BouncingSprite, transition: &Transition) -> ControlFlow<()>;
}

/// What happens to the logo image when the logo bounces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePolicy {
    /// Every reversal picks a new random image, corner hits pick twice.
    #[default]
    Reroll,
    /// The image chosen at spawn is kept for the sprite's lifetime.
    Keep,
}

/// Axes that reversed during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn is_corner(&self) -> bool {
        self.x && self.y
    }
}

pub struct AnimationController<R> {
    sprite: BouncingSprite,
    rng: R,
    image_policy: ImagePolicy,
    ticks: u64,
}

impl<R: Rng> AnimationController<R> {
    /// Places a logo at a random point strictly inside the view, moving
    /// diagonally in a random direction.
    pub fn spawn(mut rng: R, image_policy: ImagePolicy) -> Self {
        let origin = random_origin(&mut rng);
        let motion = MotionState::random(&mut rng);
        debug!(
            "spawning {} at ({}, {}) with velocity ({}, {})",
            motion.image(),
            origin.x,
            origin.y,
            motion.velocity_x(),
            motion.velocity_y()
        );
        let sprite = BouncingSprite::new(Rect::new(origin, LOGO_SIZE), motion);
        Self::with_sprite(sprite, rng, image_policy)
    }

    pub fn with_sprite(sprite: BouncingSprite, rng: R, image_policy: ImagePolicy) -> Self {
        Self {
            sprite,
            rng,
            image_policy,
            ticks: 0,
        }
    }

    pub fn sprite(&self) -> &BouncingSprite {
        &self.sprite
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks until the host breaks.
    pub fn run<H: Host>(&mut self, host: &mut H) {
        while self.tick(host).is_continue() {}
        debug!("animation stopped after {} ticks", self.ticks);
    }

    /// Moves the sprite one step, waits for the host to finish animating the
    /// move and only then checks the walls.
    pub fn tick<H: Host>(&mut self, host: &mut H) -> ControlFlow<(), Bounce> {
        let from = self.sprite.rect();
        let motion = self.sprite.motion();
        self.sprite.move_to(Point {
            x: from.origin.x + motion.velocity_x(),
            y: from.origin.y + motion.velocity_y(),
        });
        let transition = Transition {
            from,
            to: self.sprite.rect(),
            duration: tick_interval(),
        };
        host.animate(&self.sprite, &transition)?;
        self.ticks += 1;
        trace!(
            "tick {} at ({}, {})",
            self.ticks,
            transition.to.origin.x,
            transition.to.origin.y
        );
        ControlFlow::Continue(self.check_for_collision())
    }

    fn check_for_collision(&mut self) -> Bounce {
        let mut bounce = Bounce::default();
        let mut motion = self.sprite.motion();
        // inclusive: a logo flush with a wall flips again next tick
        if self.sprite.left() <= 0.0 || self.sprite.right() >= VIEW_SIZE.width {
            let reversed = motion.reverse_velocity_x(&mut self.rng);
            motion = self.apply_image_policy(motion, reversed);
            self.sprite.set_motion(motion);
            bounce.x = true;
        }
        if self.sprite.top() <= 0.0 || self.sprite.bottom() >= VIEW_SIZE.height {
            let reversed = motion.reverse_velocity_y(&mut self.rng);
            motion = self.apply_image_policy(motion, reversed);
            self.sprite.set_motion(motion);
            bounce.y = true;
        }
        if bounce.is_corner() {
            debug!(
                "corner hit at ({}, {}), now showing {}",
                self.sprite.left(),
                self.sprite.top(),
                motion.image()
            );
        } else if bounce.x || bounce.y {
            debug!(
                "bounce (x: {}, y: {}) at ({}, {}), now showing {}",
                bounce.x,
                bounce.y,
                self.sprite.left(),
                self.sprite.top(),
                motion.image()
            );
        }
        bounce
    }

    fn apply_image_policy(&self, previous: MotionState, reversed: MotionState) -> MotionState {
        match self.image_policy {
            ImagePolicy::Reroll => reversed,
            ImagePolicy::Keep => reversed.with_image(previous.image()),
        }
    }
}

fn random_origin<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let max_x = (VIEW_SIZE.width - LOGO_SIZE.width) as i64;
    let max_y = (VIEW_SIZE.height - LOGO_SIZE.height) as i64;
    Point {
        x: rng.gen_range(1..max_x) as f64,
        y: rng.gen_range(1..max_y) as f64,
    }
}
