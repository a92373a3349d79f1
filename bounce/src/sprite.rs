use crate::{
    geometry::{Point, Rect},
    motion_state::MotionState,
};

pub struct BouncingSprite {
    rect: Rect,
    motion: MotionState,
    asset: String,
    asset_selections: u64,
}

impl BouncingSprite {
    pub fn new(rect: Rect, motion: MotionState) -> Self {
        let mut sprite = Self {
            rect,
            motion,
            asset: String::new(),
            asset_selections: 0,
        };
        sprite.select_asset();
        sprite
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// Path of the image currently on display.
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// How many times an asset has been looked up, including the one done on
    /// construction.
    pub fn asset_selections(&self) -> u64 {
        self.asset_selections
    }

    /// Replaces the motion. The asset is looked up again even if the image
    /// did not change.
    pub fn set_motion(&mut self, motion: MotionState) {
        self.motion = motion;
        self.select_asset();
    }

    pub fn move_to(&mut self, origin: Point) {
        self.rect = self.rect.with_origin(origin);
    }

    pub fn left(&self) -> f64 {
        self.rect.min_x()
    }

    pub fn right(&self) -> f64 {
        self.rect.max_x()
    }

    pub fn top(&self) -> f64 {
        self.rect.min_y()
    }

    pub fn bottom(&self) -> f64 {
        self.rect.max_y()
    }

    fn select_asset(&mut self) {
        self.asset = self.motion.image().asset_path();
        self.asset_selections += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        geometry::{Point, Rect},
        motion_state::MotionState,
        palette::ImageId,
        sprite::BouncingSprite,
        LOGO_SIZE,
    };

    fn sprite_at(x: f64, y: f64, image: ImageId) -> BouncingSprite {
        let mut rng = StdRng::seed_from_u64(0);
        let motion = MotionState::new(1.0, 1.0, &mut rng).with_image(image);
        BouncingSprite::new(Rect::new(Point { x, y }, LOGO_SIZE), motion)
    }

    #[test]
    fn edges_follow_rect() {
        let mut sprite = sprite_at(5.0, 9.0, ImageId::Blue);
        assert_eq!(
            (sprite.left(), sprite.right(), sprite.top(), sprite.bottom()),
            (5.0, 75.0, 9.0, 44.0)
        );
        sprite.move_to(Point { x: -1.0, y: 633.0 });
        assert_eq!(
            (sprite.left(), sprite.right(), sprite.top(), sprite.bottom()),
            (-1.0, 69.0, 633.0, 668.0)
        );
        assert_eq!(sprite.rect().size, LOGO_SIZE);
    }

    #[test]
    fn asset_selected_on_construction() {
        let sprite = sprite_at(1.0, 1.0, ImageId::Green);
        assert_eq!(sprite.asset(), "images/dvd_green.png");
        assert_eq!(sprite.asset_selections(), 1);
    }

    #[test]
    fn set_motion_reselects_asset_even_when_unchanged() {
        let mut sprite = sprite_at(1.0, 1.0, ImageId::Red);
        sprite.set_motion(sprite.motion());
        assert_eq!(sprite.asset(), "images/dvd_red.png");
        assert_eq!(sprite.asset_selections(), 2);
        sprite.set_motion(sprite.motion().with_image(ImageId::Yellow));
        assert_eq!(sprite.asset(), "images/dvd_yellow.png");
        assert_eq!(sprite.asset_selections(), 3);
    }
}
