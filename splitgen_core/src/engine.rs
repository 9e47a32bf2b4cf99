//! Workout engine: catalogs in, rendered report out.
//!
//! The pipeline for one invocation is
//! partition → sample → assemble → order → render. The main split may be
//! shuffled; the core split always keeps its alternating order.

use crate::assembly::{assemble_core, assemble_lower, assemble_upper_with, maybe_shuffle};
use crate::catalog::CatalogSet;
use crate::render::{render_core, render_main, render_report};
use crate::sink::ReportSink;
use crate::{Result, SplitType, Workout, WorkoutOptions};
use rand::Rng;

/// Assemble a workout for the given options
pub fn generate_workout<R: Rng + ?Sized>(
    catalogs: &CatalogSet,
    options: &WorkoutOptions,
    rng: &mut R,
) -> Result<Workout> {
    tracing::info!("Generating {} workout", options.split);

    let main = match options.split {
        SplitType::Upper => assemble_upper_with(
            &catalogs.arms,
            &catalogs.push_pull,
            &catalogs.compound,
            options.unpaired,
            rng,
        )?,
        SplitType::Lower => assemble_lower(&catalogs.legs, &catalogs.compound, rng)?,
    };
    let core = assemble_core(&catalogs.core, rng)?;

    Ok(Workout {
        split: options.split,
        main: maybe_shuffle(main, options.shuffle, rng),
        core,
    })
}

impl Workout {
    /// Render the full report text
    pub fn render(&self, main_instructions: bool, core_instructions: bool) -> String {
        render_report(
            &render_main(&self.main, self.split.title(), main_instructions),
            &render_core(&self.core, core_instructions),
        )
    }
}

/// Generate, render and deliver a workout
///
/// Returns the confirmation summary. Nothing reaches the sink unless every
/// step before delivery succeeded.
pub fn run<R: Rng + ?Sized>(
    catalogs: &CatalogSet,
    options: &WorkoutOptions,
    rng: &mut R,
    sink: &mut dyn ReportSink,
) -> Result<String> {
    let workout = generate_workout(catalogs, options, rng)?;
    let report = workout.render(options.main_instructions, options.core_instructions);

    sink.deliver(&report)?;
    Ok(options.summary(sink.destination()))
}
