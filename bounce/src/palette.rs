use std::fmt::Display;

use rand::Rng;

pub const ASSET_DIR: &str = "images";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    Blue,
    Green,
    Pink,
    Red,
    Yellow,
}

impl ImageId {
    pub const ALL: [ImageId; 5] = [
        ImageId::Blue,
        ImageId::Green,
        ImageId::Pink,
        ImageId::Red,
        ImageId::Yellow,
    ];

    /// Picks one of the five logos with equal odds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn color_name(self) -> &'static str {
        match self {
            ImageId::Blue => "blue",
            ImageId::Green => "green",
            ImageId::Pink => "pink",
            ImageId::Red => "red",
            ImageId::Yellow => "yellow",
        }
    }

    pub fn file_name(self) -> String {
        format!("dvd_{}.png", self.color_name())
    }

    pub fn asset_path(self) -> String {
        format!("{ASSET_DIR}/{}", self.file_name())
    }
}

impl Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.file_name(), f)
    }
}
