//! Spectral channel types

/// Number of spectral channels produced by one acquisition.
pub const NUM_CHANNELS: usize = 14;

/// Named photodetector channels, in acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    F1,
    F2,
    /// CIE Z approximation
    FZ,
    F3,
    F4,
    /// CIE Y approximation
    FY,
    F5,
    /// CIE X approximation
    FXL,
    F6,
    F7,
    F8,
    Nir,
    Clear,
    /// Flicker detect
    FD,
}

impl Channel {
    pub const ALL: [Channel; NUM_CHANNELS] = [
        Channel::F1,
        Channel::F2,
        Channel::FZ,
        Channel::F3,
        Channel::F4,
        Channel::FY,
        Channel::F5,
        Channel::FXL,
        Channel::F6,
        Channel::F7,
        Channel::F8,
        Channel::Nir,
        Channel::Clear,
        Channel::FD,
    ];

    /// Position of the channel inside a sample.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::F1 => "F1",
            Channel::F2 => "F2",
            Channel::FZ => "FZ",
            Channel::F3 => "F3",
            Channel::F4 => "F4",
            Channel::FY => "FY",
            Channel::F5 => "F5",
            Channel::FXL => "FXL",
            Channel::F6 => "F6",
            Channel::F7 => "F7",
            Channel::F8 => "F8",
            Channel::Nir => "NIR",
            Channel::Clear => "CLEAR",
            Channel::FD => "FD",
        }
    }

    /// Nominal passband of the filter, for display.
    pub fn band(self) -> &'static str {
        match self {
            Channel::F1 => "405 nm",
            Channel::F2 => "425 nm",
            Channel::FZ => "450 nm",
            Channel::F3 => "475 nm",
            Channel::F4 => "515 nm",
            Channel::FY => "555 nm",
            Channel::F5 => "550 nm",
            Channel::FXL => "600 nm",
            Channel::F6 => "640 nm",
            Channel::F7 => "690 nm",
            Channel::F8 => "745 nm",
            Channel::Nir => "855 nm",
            Channel::Clear => "VIS",
            Channel::FD => "flicker",
        }
    }
}

/// Raw counts from one acquisition, indexed by [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSample {
    counts: [u16; NUM_CHANNELS],
}

impl ChannelSample {
    pub fn new(counts: [u16; NUM_CHANNELS]) -> Self {
        Self { counts }
    }

    pub fn get(&self, channel: Channel) -> u16 {
        self.counts[channel.index()]
    }

    pub fn counts(&self) -> &[u16; NUM_CHANNELS] {
        &self.counts
    }
}

/// Dark-subtracted (and optionally gray-normalized) values, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibratedSample {
    values: [f32; NUM_CHANNELS],
}

impl CalibratedSample {
    pub(crate) fn new(values: [f32; NUM_CHANNELS]) -> Self {
        Self { values }
    }

    pub fn get(&self, channel: Channel) -> f32 {
        self.values[channel.index()]
    }

    pub fn values(&self) -> &[f32; NUM_CHANNELS] {
        &self.values
    }
}
