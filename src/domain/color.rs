use serde::{Deserialize, Serialize};

use crate::core::PhysicsError;

/// Display color of a ball, packed as `0xRRGGBB`.
///
/// Physics never reads it; it only travels to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, PhysicsError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PhysicsError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| PhysicsError::InvalidColor(s.to_string()))
    }

    pub fn to_css(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl TryFrom<String> for Color {
    type Error = PhysicsError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

/// Colors handed out to balls created without an explicit color
pub const PALETTE: [Color; 9] = [
    Color(0xFF0000), // red
    Color(0xFFCC00), // orange
    Color(0xFFFF00), // yellow
    Color(0x00FF00), // green
    Color(0x0000FF), // blue
    Color(0x4F2F4F), // purple
    Color(0x000000), // black
    Color(0xFF92BB), // pink
    Color(0x603311), // brown
];

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Deterministic palette picker, seeded per world.
#[derive(Clone, Debug)]
pub struct ColorPicker {
    state: u32,
}

impl ColorPicker {
    pub fn new(seed: u32) -> Self {
        // xorshift never leaves zero
        Self { state: seed.max(1) }
    }

    pub fn next_color(&mut self) -> Color {
        let i = xorshift32(&mut self.state) as usize % PALETTE.len();
        PALETTE[i]
    }
}
