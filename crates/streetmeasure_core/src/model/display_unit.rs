//! Display unit model for rendering measured distances.
//!
//! # Responsibility
//! - Snap a raw metric distance to the configured rounding step.
//! - Render the snapped distance as a human-readable label.
//!
//! # Invariants
//! - Meter steps are `>= 1` centimeter.
//! - Inch steps are within `1..=12`.
//! - Feet/inch results never carry 12 or more inches.
//! - Step validation happens at construction, never while formatting.
//!
//! Distances are expected to be non-negative; negative input is not rejected
//! and simply follows the same arithmetic.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const METERS_PER_FOOT: f64 = 0.3048;
const INCHES_PER_FOOT: i32 = 12;
const MAX_INCH_STEP: i64 = 12;

/// Invalid display unit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitConfigError {
    /// Centimeter step must be at least 1.
    InvalidMeterStep(i64),
    /// Inch step must be within `1..=12`.
    InvalidInchStep(i64),
}

impl Display for UnitConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMeterStep(step) => {
                write!(f, "invalid meter step {step}cm; expected a value >= 1")
            }
            Self::InvalidInchStep(step) => {
                write!(f, "invalid inch step {step}in; expected a value in 1..=12")
            }
        }
    }
}

impl Error for UnitConfigError {}

/// Metric display rounded to the nearest `step_cm` centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeterUnit {
    step_cm: u32,
}

impl MeterUnit {
    /// Creates a metric unit with the given centimeter step.
    ///
    /// # Errors
    /// - Returns [`UnitConfigError::InvalidMeterStep`] when `step_cm < 1`.
    pub fn new(step_cm: i64) -> Result<Self, UnitConfigError> {
        match u32::try_from(step_cm) {
            Ok(step) if step >= 1 => Ok(Self { step_cm: step }),
            _ => Err(UnitConfigError::InvalidMeterStep(step_cm)),
        }
    }

    pub fn step_cm(&self) -> u32 {
        self.step_cm
    }

    /// Returns `distance_m` rounded to the nearest step, in meters.
    ///
    /// Ties round away from zero.
    pub fn rounded(&self, distance_m: f64) -> f64 {
        let step = f64::from(self.step_cm);
        (distance_m * 100.0 / step).round() * step / 100.0
    }

    /// Number of decimals shown for this step.
    pub fn decimals(&self) -> usize {
        if self.step_cm % 100 == 0 {
            0
        } else if self.step_cm % 10 == 0 {
            1
        } else {
            2
        }
    }

    /// Formats `distance_m` as `"<value> m"`.
    pub fn format(&self, distance_m: f64) -> String {
        format!("{:.*} m", self.decimals(), self.rounded(distance_m))
    }
}

/// Imperial display as feet plus inches rounded to the nearest `step_inches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeetInchUnit {
    step_inches: u32,
}

impl FeetInchUnit {
    /// Creates an imperial unit with the given inch step.
    ///
    /// # Errors
    /// - Returns [`UnitConfigError::InvalidInchStep`] when the step is outside `1..=12`.
    pub fn new(step_inches: i64) -> Result<Self, UnitConfigError> {
        if !(1..=MAX_INCH_STEP).contains(&step_inches) {
            return Err(UnitConfigError::InvalidInchStep(step_inches));
        }
        let step = u32::try_from(step_inches)
            .map_err(|_| UnitConfigError::InvalidInchStep(step_inches))?;
        Ok(Self { step_inches: step })
    }

    pub fn step_inches(&self) -> u32 {
        self.step_inches
    }

    /// Returns `distance_m` as whole feet plus stepped inches.
    ///
    /// Inches that round up to a full foot carry into `feet`.
    pub fn rounded(&self, distance_m: f64) -> FeetInches {
        let step = self.step_inches as i32;
        let distance_ft = distance_m / METERS_PER_FOOT;
        let whole_ft = distance_ft.floor();
        let inches = (distance_ft - whole_ft) * f64::from(INCHES_PER_FOOT);

        let mut feet = whole_ft as i64;
        let mut stepped = (inches / f64::from(step)).round() as i32 * step;
        // Steps that do not divide 12 (e.g. 7) can overshoot a full foot.
        if stepped >= INCHES_PER_FOOT {
            feet += 1;
            stepped -= INCHES_PER_FOOT;
        }

        FeetInches {
            feet,
            inches: stepped,
        }
    }

    /// Formats `distance_m` as `"<feet>′ <inches>″"`.
    ///
    /// Single-digit inches keep a padding space after the foot mark so labels
    /// line up; two-digit inches drop it.
    pub fn format(&self, distance_m: f64) -> String {
        self.rounded(distance_m).to_string()
    }
}

/// Whole feet and remaining inches, with `inches` in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeetInches {
    pub feet: i64,
    pub inches: i32,
}

impl Display for FeetInches {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.inches < 10 {
            write!(f, "{}′ {}″", self.feet, self.inches)
        } else {
            write!(f, "{}′{}″", self.feet, self.inches)
        }
    }
}

/// Rounded distance produced by [`DisplayUnit::round`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundedDistance {
    Meters(f64),
    FeetInches(FeetInches),
}

/// How a measured distance is rounded and rendered.
///
/// Closed set of two variants, each carrying an already validated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DisplayUnitSpec", into = "DisplayUnitSpec")]
pub enum DisplayUnit {
    Meter(MeterUnit),
    FeetInch(FeetInchUnit),
}

impl DisplayUnit {
    /// Metric display with a centimeter rounding step.
    ///
    /// # Errors
    /// - Returns [`UnitConfigError::InvalidMeterStep`] when `step_cm < 1`.
    pub fn meter(step_cm: i64) -> Result<Self, UnitConfigError> {
        MeterUnit::new(step_cm).map(Self::Meter)
    }

    /// Feet+inch display with an inch rounding step.
    ///
    /// # Errors
    /// - Returns [`UnitConfigError::InvalidInchStep`] when the step is outside `1..=12`.
    pub fn feet_inch(step_inches: i64) -> Result<Self, UnitConfigError> {
        FeetInchUnit::new(step_inches).map(Self::FeetInch)
    }

    pub fn round(&self, distance_m: f64) -> RoundedDistance {
        match self {
            Self::Meter(unit) => RoundedDistance::Meters(unit.rounded(distance_m)),
            Self::FeetInch(unit) => RoundedDistance::FeetInches(unit.rounded(distance_m)),
        }
    }

    pub fn format(&self, distance_m: f64) -> String {
        match self {
            Self::Meter(unit) => unit.format(distance_m),
            Self::FeetInch(unit) => unit.format(distance_m),
        }
    }
}

impl Default for DisplayUnit {
    fn default() -> Self {
        Self::Meter(MeterUnit { step_cm: 1 })
    }
}

/// Serialized configuration shape of [`DisplayUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayUnitSpec {
    Meter { step_cm: i64 },
    FeetInch { step_inches: i64 },
}

impl TryFrom<DisplayUnitSpec> for DisplayUnit {
    type Error = UnitConfigError;

    fn try_from(value: DisplayUnitSpec) -> Result<Self, Self::Error> {
        match value {
            DisplayUnitSpec::Meter { step_cm } => Self::meter(step_cm),
            DisplayUnitSpec::FeetInch { step_inches } => Self::feet_inch(step_inches),
        }
    }
}

impl From<DisplayUnit> for DisplayUnitSpec {
    fn from(value: DisplayUnit) -> Self {
        match value {
            DisplayUnit::Meter(unit) => Self::Meter {
                step_cm: i64::from(unit.step_cm),
            },
            DisplayUnit::FeetInch(unit) => Self::FeetInch {
                step_inches: i64::from(unit.step_inches),
            },
        }
    }
}
