//! Nautical-mile distance value and display conversions.
//!
//! # Invariants
//! - `Distance` keeps full `f64` precision; rounding happens only in `DistanceReadout`.
//! - Conversions are linear: km = nm × 1.852, statute mi = nm × 1.15078.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kilometers per nautical mile.
pub const KILOMETERS_PER_NAUTICAL_MILE: f64 = 1.852;

/// Statute miles per nautical mile.
pub const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.15078;

/// Route length in nautical miles.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Self = Self(0.0);

    pub fn from_nautical_miles(nautical_miles: f64) -> Self {
        Self(nautical_miles)
    }

    pub fn nautical_miles(self) -> f64 {
        self.0
    }

    pub fn kilometers(self) -> f64 {
        self.0 * KILOMETERS_PER_NAUTICAL_MILE
    }

    pub fn statute_miles(self) -> f64 {
        self.0 * STATUTE_MILES_PER_NAUTICAL_MILE
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Integer figures for the route details panel.
    pub fn readout(self) -> DistanceReadout {
        DistanceReadout {
            nautical_miles: round_for_display(self.nautical_miles()),
            kilometers: round_for_display(self.kilometers()),
            statute_miles: round_for_display(self.statute_miles()),
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} nm", self.0)
    }
}

/// Rounded display values of one distance in the three supported units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceReadout {
    pub nautical_miles: i64,
    pub kilometers: i64,
    pub statute_miles: i64,
}

impl DistanceReadout {
    /// `(label, grouped value)` rows in panel order.
    pub fn lines(&self) -> [(&'static str, String); 3] {
        [
            ("Nautical Miles", format_grouped(self.nautical_miles)),
            ("Kilometers", format_grouped(self.kilometers)),
            ("Miles", format_grouped(self.statute_miles)),
        ]
    }
}

/// Nearest-integer rounding used for every displayed figure.
fn round_for_display(value: f64) -> i64 {
    value.round() as i64
}

/// Formats an integer with comma thousands separators, e.g. `12,345`.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
