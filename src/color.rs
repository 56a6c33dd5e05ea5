use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with each component in `[0,1]`.
///
/// Posters work entirely in normalized components; conversion to 8 bit
/// channels only happens at the rendering boundary.
#[derive(Clone, Debug, PartialEq, PartialOrd, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Color {
    /// Red component in `[0,1]`
    pub red: f64,
    /// Green component in `[0,1]`
    pub green: f64,
    /// Blue component in `[0,1]`
    pub blue: f64,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (red, green, blue) = self.to_rgb8();
        write!(f, "rgb({} {} {})", red, green, blue)
    }
}

impl Color {
    /// Creates a color from normalized components.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Converts this color into 8 bit channels.
    ///
    /// Components are clamped into `[0,1]` first, then rounded to the nearest
    /// representable channel value.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        fn channel(value: f64) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        (channel(self.red), channel(self.green), channel(self.blue))
    }

    /// The poster's paper-like background color.
    pub const BACKGROUND: Self = Self::new(0.98, 0.98, 0.97);

    /// A saturated warm red.
    pub const REDDISH: Self = Self::new(0.8, 0.2, 0.2);

    /// A bright orange.
    pub const ORANGEISH: Self = Self::new(0.9, 0.5, 0.1);

    /// A golden yellow.
    pub const YELLOWISH: Self = Self::new(0.9, 0.7, 0.2);

    /// A muted burnt orange.
    pub const DARKER_ORANGE: Self = Self::new(0.7, 0.3, 0.1);

    /// A deep brick red.
    pub const DARKER_RED: Self = Self::new(0.6, 0.1, 0.1);
}

/// The fixed catalog of warm colors that all palettes are drawn from.
pub const WARM_CATALOG: [Color; 5] = [
    Color::REDDISH,
    Color::ORANGEISH,
    Color::YELLOWISH,
    Color::DARKER_ORANGE,
    Color::DARKER_RED,
];
