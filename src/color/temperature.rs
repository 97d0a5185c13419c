//! Human-readable color temperature bands

use serde::{Deserialize, Serialize};

/// Named color temperature band
///
/// Each band covers a half-open Kelvin range; a value exactly on a
/// breakpoint belongs to the cooler band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureBand {
    /// Below 3000 K
    Candle,
    /// 3000–3999 K
    Warm,
    /// 4000–4999 K
    Neutral,
    /// 5000–5999 K
    CoolWhite,
    /// 6000–6999 K
    Daylight,
    /// 7000 K and above
    BlueSky,
}

impl TemperatureBand {
    /// All bands from warmest to coolest
    pub const ALL: [TemperatureBand; 6] = [
        TemperatureBand::Candle,
        TemperatureBand::Warm,
        TemperatureBand::Neutral,
        TemperatureBand::CoolWhite,
        TemperatureBand::Daylight,
        TemperatureBand::BlueSky,
    ];

    /// Classify a Kelvin value
    pub fn from_kelvin(kelvin: f64) -> Self {
        if kelvin < 3000.0 {
            TemperatureBand::Candle
        } else if kelvin < 4000.0 {
            TemperatureBand::Warm
        } else if kelvin < 5000.0 {
            TemperatureBand::Neutral
        } else if kelvin < 6000.0 {
            TemperatureBand::CoolWhite
        } else if kelvin < 7000.0 {
            TemperatureBand::Daylight
        } else {
            TemperatureBand::BlueSky
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::Candle => "Candle",
            TemperatureBand::Warm => "Warm",
            TemperatureBand::Neutral => "Neutral",
            TemperatureBand::CoolWhite => "Cool White",
            TemperatureBand::Daylight => "Daylight",
            TemperatureBand::BlueSky => "Blue Sky",
        }
    }
}

/// Display label for a Kelvin value
pub fn temperature_label(kelvin: f64) -> &'static str {
    TemperatureBand::from_kelvin(kelvin).label()
}
