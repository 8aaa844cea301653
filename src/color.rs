//! 24-bit display colors.

use std::fmt::{Display, Formatter};

/// An opaque color stored as `0xRRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

/// Background of every scene
pub const BLACK: Rgb = Rgb::from_hex(0x000000);

/// Horizon, zero line and grid
pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

impl Rgb {
    /// Creates a color from a hex integer, keeping only its low 24 bits.
    ///
    /// ```
    /// use projplot::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex(0xff57f29), Rgb::from_hex(0xf57f29));
    /// ```
    pub const fn from_hex(hex: u32) -> Self {
        Rgb(hex & 0xff_ffff)
    }

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// The color as `0xRRGGBB`
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Red, green and blue channels
    pub const fn channels(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

/// Formats as a css hex color, e.g. `#66aaff`
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
