//! Per-person analysis and overweight filtering.
//!
//! Combines the BMI and calorie formulas over a collected session and
//! produces the data both report formats are rendered from.

use serde::Serialize;

use crate::domain::{BmiCategory, Intensity, PersonRecord};
use crate::formulas::{calculate_bmi, calculate_calories_burned};

/// BMI at or above which a person counts as overweight.
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// Computed figures for one person.
#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub name: String,
    pub bmi: f64,
    pub category: BmiCategory,
    pub overweight: bool,
    pub intensity: Intensity,
    pub met: f64,
    pub calories_burned: f64,
}

impl PersonSummary {
    pub fn from_record(person: &PersonRecord) -> Self {
        let bmi = calculate_bmi(person.weight_kg(), person.height());
        let intensity = person.intensity();
        let category = BmiCategory::from_bmi(bmi);
        Self {
            name: person.name().to_string(),
            bmi,
            category,
            overweight: category.is_overweight(),
            intensity,
            met: intensity.met(),
            calories_burned: calculate_calories_burned(
                person.weight_kg(),
                person.duration_min(),
                intensity.as_str(),
            ),
        }
    }
}

/// Full session report: everyone in entry order, then the overweight subset.
#[derive(Debug, Clone, Serialize)]
pub struct FitnessReport {
    pub people: Vec<PersonSummary>,
    pub overweight: Vec<PersonSummary>,
}

impl FitnessReport {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Returns the people whose BMI is at or above 25, in input order.
pub fn filter_overweight_people(people: &[PersonRecord]) -> Vec<PersonRecord> {
    people
        .iter()
        .filter(|p| calculate_bmi(p.weight_kg(), p.height()) >= OVERWEIGHT_BMI)
        .cloned()
        .collect()
}

/// Builds the report for a collected session.
pub fn analyze_people(people: &[PersonRecord]) -> FitnessReport {
    let summaries: Vec<PersonSummary> = people.iter().map(PersonSummary::from_record).collect();

    let overweight: Vec<PersonSummary> = filter_overweight_people(people)
        .iter()
        .map(PersonSummary::from_record)
        .collect();

    log::info!(
        "Analyzed {} people, {} overweight",
        summaries.len(),
        overweight.len()
    );

    FitnessReport {
        people: summaries,
        overweight,
    }
}
