use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which algorithm the engine applies, trading speed for smoothness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurQuality {
    /// Separable box blur.
    Fast,
    /// Stack blur, a triangular approximation of Gaussian.
    #[default]
    Standard,
    /// Repeated stack blur passes converging on a Gaussian profile.
    Premium,
    /// Stack blur plus a chromatic refraction overlay.
    Liquid,
}

impl BlurQuality {
    pub const ALL: &'static [BlurQuality] = &[
        BlurQuality::Fast,
        BlurQuality::Standard,
        BlurQuality::Premium,
        BlurQuality::Liquid,
    ];
}

impl fmt::Display for BlurQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlurQuality::Fast => write!(f, "fast"),
            BlurQuality::Standard => write!(f, "standard"),
            BlurQuality::Premium => write!(f, "premium"),
            BlurQuality::Liquid => write!(f, "liquid"),
        }
    }
}

impl FromStr for BlurQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlurQuality::ALL
            .iter()
            .copied()
            .find(|q| q.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<String> = BlurQuality::ALL.iter().map(|q| q.to_string()).collect();
                format!("Quality must be one of: {}, got '{s}'", names.join(", "))
            })
    }
}
