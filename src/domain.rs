//! Domain types for person records and exercise intensity.

use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

/// Heights at or above this value are read as centimeters.
pub const CENTIMETER_THRESHOLD: f64 = 4.0;

/// Exercise intensity categories tracked by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    /// Returns all intensity variants, lowest first.
    pub fn all() -> &'static [Intensity] {
        &[Intensity::Low, Intensity::Moderate, Intensity::High]
    }

    /// Metabolic equivalent (MET) coefficient for this intensity.
    pub fn met(&self) -> f64 {
        match self {
            Intensity::Low => 2.5,
            Intensity::Moderate => 4.5,
            Intensity::High => 7.0,
        }
    }

    /// Returns the lowercase name used for input and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

impl FromStr for Intensity {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Intensity::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == name)
            .ok_or_else(|| InputError::UnknownIntensity(s.trim().to_string()))
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit a height value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightUnit {
    Meters,
    Centimeters,
}

impl HeightUnit {
    /// Guesses the unit from magnitude alone.
    ///
    /// No adult is taller than 3 m and no plausible centimeter value is below
    /// 4, so anything `>= 4` is centimeters. This is a heuristic, not a
    /// typed unit: a 3.5 cm input would be read as 3.5 m.
    pub fn infer(height: f64) -> Self {
        if height >= CENTIMETER_THRESHOLD {
            HeightUnit::Centimeters
        } else {
            HeightUnit::Meters
        }
    }

    /// Converts a height in this unit to meters.
    pub fn to_meters(&self, height: f64) -> f64 {
        match self {
            HeightUnit::Meters => height,
            HeightUnit::Centimeters => height / 100.0,
        }
    }
}

/// Coarse BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// True for every category at or above the overweight threshold.
    pub fn is_overweight(&self) -> bool {
        matches!(self, BmiCategory::Overweight | BmiCategory::Obese)
    }
}

/// Fitness data submitted for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    name: String,
    weight_kg: f64,
    height: f64,
    duration_min: f64,
    intensity: Intensity,
}

impl PersonRecord {
    /// Creates a validated record.
    ///
    /// All numeric fields must be finite and strictly positive and the name
    /// must contain something other than whitespace.
    pub fn new(
        name: impl Into<String>,
        weight_kg: f64,
        height: f64,
        duration_min: f64,
        intensity: Intensity,
    ) -> Result<Self, InputError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InputError::EmptyName);
        }

        let weight_kg = ensure_positive("Weight", weight_kg)?;
        let height = ensure_positive("Height", height)?;
        let duration_min = ensure_positive("Duration", duration_min)?;

        Ok(Self {
            name,
            weight_kg,
            height,
            duration_min,
            intensity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Raw height as entered, in meters or centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }
}

/// Returns the value if it is a finite number above zero.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::InvalidNumber(value.to_string()));
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}
