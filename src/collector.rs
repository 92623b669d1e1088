//! Interactive collection of person records.
//!
//! Reads one answer per line and re-prompts until each field is valid.
//! A blank name, or end of input at the name prompt, ends the session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::domain::{Intensity, PersonRecord, ensure_positive};
use crate::error::{CollectError, InputError};

const HEADER: &str = "Enter fitness data for each person (Enter a blank name to finish):";
const NAME_PROMPT: &str = "Enter person's name: ";
const INTENSITY_PROMPT: &str = "Enter exercise intensity (low, moderate, high): ";
const INTENSITY_HINT: &str = "Please enter 'low', 'moderate', or 'high'.";

/// A numeric question asked for every person.
struct NumericField {
    /// Capitalized name used in validation errors.
    label: &'static str,
    /// Lowercase name used in the re-prompt hint.
    noun: &'static str,
    prompt: &'static str,
}

const WEIGHT: NumericField = NumericField {
    label: "Weight",
    noun: "weight",
    prompt: "Enter person's weight in kilograms: ",
};

const HEIGHT: NumericField = NumericField {
    label: "Height",
    noun: "height",
    prompt: "Enter person's height in meters or centimeters: ",
};

const DURATION: NumericField = NumericField {
    label: "Duration",
    noun: "duration",
    prompt: "Enter exercise duration in minutes: ",
};

/// Parses a positive, finite real number from one answer line.
pub fn parse_positive(field: &'static str, answer: &str) -> Result<f64, InputError> {
    let trimmed = answer.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))?;
    ensure_positive(field, value)
}

/// Collects person records until a blank name is entered.
///
/// Prompts and validation messages are written to `prompts`. Invalid answers
/// are reported and asked again; only I/O failures and input ending in the
/// middle of a record abort the session.
pub fn collect_people<R: BufRead, W: Write>(
    mut input: R,
    mut prompts: W,
) -> Result<Vec<PersonRecord>, CollectError> {
    let mut people = Vec::new();

    writeln!(prompts, "{}", HEADER)?;

    loop {
        let Some(name) = ask(&mut input, &mut prompts, NAME_PROMPT)? else {
            debug!("Input ended at name prompt");
            break;
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            break;
        }

        let weight = ask_number(&mut input, &mut prompts, &WEIGHT)?;
        let height = ask_number(&mut input, &mut prompts, &HEIGHT)?;
        let duration = ask_number(&mut input, &mut prompts, &DURATION)?;
        let intensity = ask_intensity(&mut input, &mut prompts)?;

        let person = PersonRecord::new(name, weight, height, duration, intensity)?;
        debug!("Collected record for {}", person.name());
        people.push(person);
    }

    log::info!("Collected {} person records", people.len());
    Ok(people)
}

/// Writes a prompt and reads one line. Returns None at end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    prompt: &str,
) -> Result<Option<String>, CollectError> {
    write!(prompts, "{}", prompt)?;
    prompts.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    field: &NumericField,
) -> Result<f64, CollectError> {
    loop {
        let answer = ask(input, prompts, field.prompt)?
            .ok_or(CollectError::UnexpectedEof { field: field.noun })?;

        match parse_positive(field.label, &answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("Rejected {} '{}': {}", field.noun, answer.trim(), e);
                writeln!(
                    prompts,
                    "Invalid input - error message: {}. Please enter a positive number for {}.",
                    e, field.noun
                )?;
            }
        }
    }
}

fn ask_intensity<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
) -> Result<Intensity, CollectError> {
    loop {
        let answer = ask(input, prompts, INTENSITY_PROMPT)?
            .ok_or(CollectError::UnexpectedEof { field: "intensity" })?;

        match Intensity::from_str(&answer) {
            Ok(intensity) => return Ok(intensity),
            Err(e) => {
                debug!("Rejected intensity '{}': {}", answer.trim(), e);
                writeln!(
                    prompts,
                    "Invalid input - error message: {}. {}",
                    e, INTENSITY_HINT
                )?;
            }
        }
    }
}
