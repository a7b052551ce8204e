use serde::{Deserialize, Serialize};

/// Gain/peak pair from a REPLAYGAIN comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayGainInfo {
    /// Gain adjustment in dB
    pub gain: Option<f32>,

    /// Peak sample amplitude (1.0 = full scale)
    pub peak: Option<f32>,
}

impl ReplayGainInfo {
    /// Set the gain from a raw value such as `-7.89 dB`
    ///
    /// Only the leading number is used. Unparseable input leaves the gain unchanged.
    pub fn set_gain_str(&mut self, raw: &str) {
        if let Some(value) = leading_float(raw) {
            self.gain = Some(value);
        }
    }

    /// Set the peak from a raw value such as `0.988251`
    pub fn set_peak_str(&mut self, raw: &str) {
        if let Some(value) = leading_float(raw) {
            self.peak = Some(value);
        }
    }

    /// An info block is usable once it carries a gain
    pub fn is_valid(&self) -> bool {
        self.gain.is_some()
    }
}

/// Album and track replay gain for one track
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayGain {
    pub album: ReplayGainInfo,
    pub track: ReplayGainInfo,
}

impl ReplayGain {
    /// True when neither album nor track gain is known
    pub fn is_empty(&self) -> bool {
        !self.album.is_valid() && !self.track.is_valid()
    }
}

fn leading_float(raw: &str) -> Option<f32> {
    raw.split_whitespace().next()?.parse::<f32>().ok()
}
