//! BMI and exercise energy formulas.

use crate::domain::{HeightUnit, Intensity};

/// Oxygen uptake at rest, in ml O2 per kg per minute for 1 MET.
const RESTING_O2_ML_PER_KG_MIN: f64 = 3.5;

/// Converts ml O2 × kg into kcal (5 kcal per litre, 1000 ml per litre).
const KCAL_DIVISOR: f64 = 200.0;

/// MET used when an intensity name is not recognized.
pub const DEFAULT_MET: f64 = 4.5;

/// Calculates Body Mass Index, inferring the height unit from its magnitude.
///
/// Heights `>= 4` are treated as centimeters, anything below as meters.
/// Inputs are not validated: a zero height yields a non-finite result.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height` - Height in meters or centimeters
pub fn calculate_bmi(weight_kg: f64, height: f64) -> f64 {
    calculate_bmi_with_unit(weight_kg, height, HeightUnit::infer(height))
}

/// Calculates Body Mass Index for a height in an explicit unit.
///
/// Formula: BMI = weight / height_m²
pub fn calculate_bmi_with_unit(weight_kg: f64, height: f64, unit: HeightUnit) -> f64 {
    let height_m = unit.to_meters(height);
    weight_kg / (height_m * height_m)
}

/// Looks up the MET coefficient for an intensity name.
///
/// Only the exact names "low", "moderate" and "high" match; anything else,
/// including other casings or surrounding whitespace, falls back to the
/// moderate coefficient.
pub fn met_for(intensity: &str) -> f64 {
    match Intensity::all().iter().find(|i| i.as_str() == intensity) {
        Some(known) => known.met(),
        None => {
            log::warn!(
                "Unknown intensity '{}', using moderate MET {}",
                intensity,
                DEFAULT_MET
            );
            DEFAULT_MET
        }
    }
}

/// Estimates calories burned during exercise from MET.
///
/// Formula:
/// ```text
/// kcal/min = MET × 3.5 × weight / 200
/// total    = kcal/min × duration
/// ```
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `duration_min` - Exercise duration in minutes
/// * `intensity` - "low", "moderate" or "high"; anything else counts as moderate
pub fn calculate_calories_burned(weight_kg: f64, duration_min: f64, intensity: &str) -> f64 {
    let met = met_for(intensity);
    let per_minute = (met * RESTING_O2_ML_PER_KG_MIN * weight_kg) / KCAL_DIVISOR;
    per_minute * duration_min
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_bmi_meters() {
        // 70 / 1.75² = 22.857
        let bmi = calculate_bmi(70.0, 1.75);
        assert!(approx_eq(bmi, 22.86, 0.01));
        assert!(bmi < 25.0);
    }

    #[test]
    fn test_bmi_centimeters() {
        // 90 / 1.75² = 29.388
        let bmi = calculate_bmi(90.0, 175.0);
        assert!(approx_eq(bmi, 29.39, 0.01));
        assert!(bmi >= 25.0);
    }

    #[test]
    fn test_bmi_units_agree() {
        for &(w, m) in &[(50.0, 1.5), (70.0, 1.75), (120.0, 2.05)] {
            assert!(approx_eq(calculate_bmi(w, m), calculate_bmi(w, m * 100.0), 1e-9));
        }
    }

    #[test]
    fn test_bmi_below_threshold_is_meters() {
        for &h in &[0.5, 1.0, 2.2, 3.99] {
            assert_eq!(calculate_bmi(80.0, h), 80.0 / (h * h));
        }
    }

    #[test]
    fn test_bmi_at_or_above_threshold_is_centimeters() {
        for &h in &[4.0, 50.0, 180.0, 250.0] {
            let m = h / 100.0;
            assert_eq!(calculate_bmi(80.0, h), 80.0 / (m * m));
        }
    }

    #[test]
    fn test_bmi_with_explicit_unit_overrides_heuristic() {
        // 3.5 is inferred as meters, but can be forced to centimeters
        let inferred = calculate_bmi(70.0, 3.5);
        let forced = calculate_bmi_with_unit(70.0, 3.5, HeightUnit::Centimeters);
        assert!(approx_eq(inferred, 70.0 / 12.25, 1e-9));
        assert!(forced > 50_000.0);
    }

    #[test]
    fn test_bmi_zero_height_is_not_finite() {
        assert!(!calculate_bmi(70.0, 0.0).is_finite());
    }

    #[test]
    fn test_calories_moderate() {
        // (4.5 × 3.5 × 70 / 200) × 30 = 165.375
        assert!(approx_eq(
            calculate_calories_burned(70.0, 30.0, "moderate"),
            165.375,
            1e-9
        ));
    }

    #[test]
    fn test_calories_low_and_high() {
        assert!(approx_eq(
            calculate_calories_burned(70.0, 30.0, "low"),
            91.875,
            1e-9
        ));
        assert!(approx_eq(
            calculate_calories_burned(70.0, 30.0, "high"),
            257.25,
            1e-9
        ));
    }

    #[test]
    fn test_calories_increase_with_intensity() {
        for &(w, d) in &[(50.0, 10.0), (70.0, 30.0), (110.0, 95.5)] {
            let low = calculate_calories_burned(w, d, "low");
            let moderate = calculate_calories_burned(w, d, "moderate");
            let high = calculate_calories_burned(w, d, "high");
            assert!(low < moderate);
            assert!(moderate < high);
        }
    }

    #[test]
    fn test_calories_unknown_intensity_falls_back_to_moderate() {
        let moderate = calculate_calories_burned(70.0, 30.0, "moderate");
        assert_eq!(calculate_calories_burned(70.0, 30.0, "unknown"), moderate);
        assert_eq!(calculate_calories_burned(70.0, 30.0, ""), moderate);
        assert_eq!(met_for("sprint"), DEFAULT_MET);
    }

    #[test]
    fn test_calories_intensity_lookup_is_exact() {
        let moderate = calculate_calories_burned(70.0, 30.0, "moderate");
        assert_eq!(calculate_calories_burned(70.0, 30.0, "HIGH"), moderate);
        assert_eq!(calculate_calories_burned(70.0, 30.0, " low "), moderate);
        assert_eq!(calculate_calories_burned(70.0, 30.0, "Low"), moderate);
        assert_eq!(met_for("high"), 7.0);
        assert_eq!(met_for("low"), 2.5);
    }

    #[test]
    fn test_calories_scale_linearly_with_duration() {
        for intensity in ["low", "moderate", "high", "other"] {
            let once = calculate_calories_burned(82.0, 25.0, intensity);
            let twice = calculate_calories_burned(82.0, 50.0, intensity);
            assert!(approx_eq(twice, 2.0 * once, 1e-9));
        }
    }

    #[test]
    fn test_calories_finite_and_non_negative() {
        let kcal = calculate_calories_burned(0.1, 0.1, "low");
        assert!(kcal.is_finite());
        assert!(kcal >= 0.0);
    }
}
