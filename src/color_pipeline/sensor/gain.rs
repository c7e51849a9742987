//! Analog gain table

/// Number of discrete gain levels supported by the sensor.
pub const GAIN_COUNT: usize = 13;

/// Index of the 16x level, used after power-on.
pub const DEFAULT_GAIN_INDEX: usize = 5;

/// Hardware amplification levels, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    X0_5,
    X1,
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
    X256,
    X512,
    X1024,
    X2048,
}

pub const GAIN_TABLE: [Gain; GAIN_COUNT] = [
    Gain::X0_5,
    Gain::X1,
    Gain::X2,
    Gain::X4,
    Gain::X8,
    Gain::X16,
    Gain::X32,
    Gain::X64,
    Gain::X128,
    Gain::X256,
    Gain::X512,
    Gain::X1024,
    Gain::X2048,
];

impl Gain {
    /// Looks up a gain by table index. Out-of-range indices wrap.
    pub fn from_index(index: i64) -> Self {
        GAIN_TABLE[wrap_gain_index(index)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn multiplier(self) -> f32 {
        match self {
            Gain::X0_5 => 0.5,
            other => (1u32 << (other.index() - 1)) as f32,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gain::X0_5 => "0.5x",
            Gain::X1 => "1x",
            Gain::X2 => "2x",
            Gain::X4 => "4x",
            Gain::X8 => "8x",
            Gain::X16 => "16x",
            Gain::X32 => "32x",
            Gain::X64 => "64x",
            Gain::X128 => "128x",
            Gain::X256 => "256x",
            Gain::X512 => "512x",
            Gain::X1024 => "1024x",
            Gain::X2048 => "2048x",
        }
    }
}

/// Wraps any integer into `[0, GAIN_COUNT)`, negative inputs included.
pub fn wrap_gain_index(index: i64) -> usize {
    index.rem_euclid(GAIN_COUNT as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_negative_and_overflowing_indices() {
        assert_eq!(wrap_gain_index(-1), 12);
        assert_eq!(wrap_gain_index(13), 0);
        assert_eq!(wrap_gain_index(-14), 12);
        assert_eq!(wrap_gain_index(27), 1);
        assert_eq!(wrap_gain_index(5), 5);
    }

    #[test]
    fn multipliers_double_per_step() {
        assert_eq!(Gain::X0_5.multiplier(), 0.5);
        assert_eq!(Gain::X1.multiplier(), 1.0);
        assert_eq!(Gain::X16.multiplier(), 16.0);
        assert_eq!(Gain::X2048.multiplier(), 2048.0);
        assert_eq!(GAIN_TABLE[DEFAULT_GAIN_INDEX].label(), "16x");
    }

    #[test]
    fn lookup_by_index_wraps() {
        assert_eq!(Gain::from_index(-1), Gain::X2048);
        assert_eq!(Gain::from_index(13), Gain::X0_5);
        assert_eq!(Gain::from_index(5).index(), 5);
    }
}
