//! Color result types

use serde::{Deserialize, Serialize};

/// Approximate CIE 1931 tristimulus values plus the display sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorResult {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorResult {
    /// Packed `0xRRGGBB`.
    pub fn to_rgb888(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Packed 5-6-5 value for the LCD.
    pub fn to_rgb565(&self) -> u16 {
        (((self.r as u16) & 0xF8) << 8) | (((self.g as u16) & 0xFC) << 3) | ((self.b as u16) >> 3)
    }

    /// `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
