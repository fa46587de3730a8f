//! Game configuration passed in from the host page.
//!
//! JS hosts pass a plain object such as `{ numSquaresPerSide: 4 }`. The value
//! may be a number or a numeric string, since host markup attributes arrive
//! as strings.

use crate::types::MIN_SIDE;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SideSetting {
    Number(f64),
    Text(String),
}

impl Default for SideSetting {
    fn default() -> Self {
        SideSetting::Number(MIN_SIDE as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub num_squares_per_side: SideSetting,
}

impl GameConfig {
    pub fn with_side(side: usize) -> Self {
        Self {
            num_squares_per_side: SideSetting::Number(side as f64),
        }
    }

    /// Effective board side: the configured value, but never below 3.
    ///
    /// Unparseable or non-finite values fall back to 3.
    pub fn side(&self) -> usize {
        let raw = match &self.num_squares_per_side {
            SideSetting::Number(n) => *n,
            SideSetting::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if !raw.is_finite() || raw <= MIN_SIDE as f64 {
            return MIN_SIDE;
        }
        raw as usize
    }
}
