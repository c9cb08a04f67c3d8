//! Volume values
//!
//! The protocol only offers relative adjustments (`SVOL`/`MVOL`) and no
//! query, so the absolute [`Volume`] is a caller-held estimate.

use serde::Serialize;

token_enum! {
    /// Relative volume step sent with `SVOL` or `MVOL`
    VolumeAdjustment, "volume adjustment" {
        Decrease = "0",
        Increase = "1",
    }
}

/// Caller-side volume estimate clamped to `0..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Create a volume, clamping out-of-range levels
    pub fn new(level: u8) -> Self {
        Volume(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Apply one adjustment step, staying within bounds
    pub fn adjusted(self, adjustment: VolumeAdjustment) -> Self {
        match adjustment {
            VolumeAdjustment::Increase => Volume::new(self.0.saturating_add(1)),
            VolumeAdjustment::Decrease => Volume(self.0.saturating_sub(1)),
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(Self::MAX / 2)
    }
}
