//! Rendering of assembled splits into the text report.

use crate::types::{Exercise, Intensity, Rir, Weight};

/// Line that opens (with a title) and closes every rendered block
pub const DELIMITER: &str = "---------";

fn weight_phrase(weight: Weight) -> &'static str {
    match weight {
        Weight::Low => "low weight",
        Weight::Medium => "medium weight",
        Weight::Heavy => "heavy weight",
    }
}

fn reps_phrase(rep_num: u32) -> &'static str {
    match rep_num {
        0 => "low reps",
        1 => "medium reps",
        _ => "high reps",
    }
}

fn rir_phrase(rir: Option<Rir>) -> &'static str {
    match rir {
        Some(Rir::NoneInReserve) => "with no reps in reserve",
        _ => "with reps in reserve",
    }
}

fn intensity_phrase(intensity: Option<Intensity>) -> &'static str {
    match intensity {
        Some(Intensity::Low) => "low-intensity",
        _ => "high-intensity",
    }
}

/// Focus phrase for a main-split exercise
pub fn main_focus(exercise: &Exercise) -> String {
    format!(
        "Focus on {} for {}, {}",
        weight_phrase(exercise.weight),
        reps_phrase(exercise.rep_num),
        rir_phrase(exercise.rir)
    )
}

/// Focus phrase for a core exercise
pub fn core_focus(exercise: &Exercise) -> String {
    format!(
        "This is a {} exercise. Focus on {}",
        intensity_phrase(exercise.intensity),
        weight_phrase(exercise.weight)
    )
}

/// Collapse embedded line breaks so a catalog cell never spans report lines
fn single_line(text: &str) -> String {
    text.split(|c: char| c == '\r' || c == '\n')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_instructions(mut line: String, exercise: &Exercise, include: bool) -> String {
    if include {
        if let Some(text) = exercise.instructions.as_deref().filter(|t| !t.is_empty()) {
            line.push_str(" | Instructions: ");
            line.push_str(&single_line(text));
        }
    }
    line
}

fn block(title: &str, lines: impl Iterator<Item = String>) -> String {
    let mut text = format!("{DELIMITER} {title} {DELIMITER}\n");
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text.push_str(DELIMITER);
    text
}

/// Render the main split as a delimited block
pub fn render_main(sequence: &[Exercise], split_name: &str, include_instructions: bool) -> String {
    block(
        split_name,
        sequence.iter().map(|exercise| {
            let line = format!(
                "Exercise: {} | Area: {} | {}",
                single_line(&exercise.name),
                single_line(&exercise.area),
                main_focus(exercise)
            );
            with_instructions(line, exercise, include_instructions)
        }),
    )
}

/// Render the core split as a delimited block
pub fn render_core(sequence: &[Exercise], include_instructions: bool) -> String {
    block(
        "Core",
        sequence.iter().map(|exercise| {
            let line = format!(
                "Exercise: {} | Area: {} | {} for {} {}",
                single_line(&exercise.name),
                single_line(&exercise.area),
                core_focus(exercise),
                exercise.rep_num,
                single_line(exercise.unit.as_deref().unwrap_or_default())
            );
            with_instructions(line, exercise, include_instructions)
        }),
    )
}

/// Join the main and core blocks into the final report
pub fn render_report(main_block: &str, core_block: &str) -> String {
    format!("{main_block}\n\n{core_block}")
}
