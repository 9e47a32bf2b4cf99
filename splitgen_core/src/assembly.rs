//! Assembly of the upper, lower and core splits.
//!
//! ## Upper
//! One pick per arm area and one per push/pull area, interleaved pairwise
//! (arm, push/pull, arm, ...), followed by an upper-body compound lift.
//!
//! ## Lower
//! One pick per leg area in catalog order, followed by a lower-body compound lift.
//!
//! ## Core
//! Four picks across the three core areas with intensity alternating from
//! one exercise to the next:
//!
//! | # | area    | intensity             |
//! |---|---------|-----------------------|
//! | 1 | area[0] | any (call it `i`)     |
//! | 2 | area[1] | opposite of `i`       |
//! | 3 | area[0] | `i`, not #1 by name   |
//! | 4 | area[2] | opposite of `i`       |

use crate::catalog::Catalog;
use crate::partition::partition;
use crate::sampler::{sample_all, sample_area, sample_where};
use crate::types::{Exercise, SplitType, UnpairedAreas};
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Area label compound lifts are rendered under
pub const COMPOUND_AREA: &str = "Compound";

/// Draw the compound lift for `split` and relabel it for rendering
fn compound_for<R: Rng + ?Sized>(
    compound: &Catalog,
    split: SplitType,
    rng: &mut R,
) -> Result<Exercise> {
    let picked = sample_area(compound, split.compound_area(), rng)?;
    Ok(picked.relabeled(COMPOUND_AREA))
}

/// Interleave two pick lists pairwise
fn interleave(
    first: Vec<Exercise>,
    second: Vec<Exercise>,
    unpaired: UnpairedAreas,
) -> Vec<Exercise> {
    let pairs = first.len().min(second.len());
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    let mut sequence = Vec::with_capacity(pairs * 2 + 1);
    for (a, b) in first.by_ref().zip(second.by_ref()).take(pairs) {
        sequence.push(a);
        sequence.push(b);
    }

    let leftover: Vec<Exercise> = first.chain(second).collect();
    if !leftover.is_empty() {
        match unpaired {
            UnpairedAreas::Drop => {
                tracing::debug!("Dropping {} unpaired upper-body picks", leftover.len());
            }
            UnpairedAreas::Append => sequence.extend(leftover),
        }
    }

    sequence
}

/// Assemble the upper split, dropping any unpaired area picks
pub fn assemble_upper<R: Rng + ?Sized>(
    arms: &Catalog,
    push_pull: &Catalog,
    compound: &Catalog,
    rng: &mut R,
) -> Result<Vec<Exercise>> {
    assemble_upper_with(arms, push_pull, compound, UnpairedAreas::Drop, rng)
}

/// Assemble the upper split with an explicit policy for unpaired area picks
pub fn assemble_upper_with<R: Rng + ?Sized>(
    arms: &Catalog,
    push_pull: &Catalog,
    compound: &Catalog,
    unpaired: UnpairedAreas,
    rng: &mut R,
) -> Result<Vec<Exercise>> {
    let arm_picks = sample_all(arms, &partition(arms), rng)?;
    let push_pull_picks = sample_all(push_pull, &partition(push_pull), rng)?;

    let mut sequence = interleave(arm_picks, push_pull_picks, unpaired);
    sequence.push(compound_for(compound, SplitType::Upper, rng)?);

    tracing::info!("Assembled upper split with {} exercises", sequence.len());
    Ok(sequence)
}

/// Assemble the lower split
pub fn assemble_lower<R: Rng + ?Sized>(
    legs: &Catalog,
    compound: &Catalog,
    rng: &mut R,
) -> Result<Vec<Exercise>> {
    let mut sequence = sample_all(legs, &partition(legs), rng)?;
    sequence.push(compound_for(compound, SplitType::Lower, rng)?);

    tracing::info!("Assembled lower split with {} exercises", sequence.len());
    Ok(sequence)
}

/// Assemble the four-exercise core split
pub fn assemble_core<R: Rng + ?Sized>(core: &Catalog, rng: &mut R) -> Result<Vec<Exercise>> {
    let areas = core.areas();
    let (primary, secondary, tertiary) = match areas[..] {
        [a, b, c, ..] => (a, b, c),
        _ => {
            return Err(Error::EmptySelection(format!(
                "{} catalog has {} areas, core assembly needs 3",
                core.kind,
                areas.len()
            )))
        }
    };

    let first = sample_area(core, primary, rng)?;
    let intensity = first.intensity.ok_or_else(|| Error::Schema {
        catalog: core.kind.to_string(),
        detail: format!("'{}' has no Intensity", first.name),
    })?;
    let alternate = intensity.opposite();

    let second = sample_where(
        core,
        rng,
        || format!("intensity {} exercises in area '{}'", alternate.code(), secondary),
        |e| e.area == secondary && e.intensity == Some(alternate),
    )?;

    let third = sample_where(
        core,
        rng,
        || {
            format!(
                "intensity {} exercises in area '{}' other than '{}'",
                intensity.code(),
                primary,
                first.name
            )
        },
        |e| e.area == primary && e.intensity == Some(intensity) && e.name != first.name,
    )?;

    let fourth = sample_where(
        core,
        rng,
        || format!("intensity {} exercises in area '{}'", alternate.code(), tertiary),
        |e| e.area == tertiary && e.intensity == Some(alternate),
    )?;

    tracing::info!(
        "Assembled core split starting at intensity {}",
        intensity.code()
    );
    Ok(vec![first, second, third, fourth])
}

/// Randomly permute the sequence when `enabled`, otherwise return it untouched
pub fn maybe_shuffle<R: Rng + ?Sized>(
    mut sequence: Vec<Exercise>,
    enabled: bool,
    rng: &mut R,
) -> Vec<Exercise> {
    if enabled {
        sequence.shuffle(rng);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogKind, Intensity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn catalog(kind: CatalogKind, csv: &str) -> Catalog {
        Catalog::from_reader(kind, csv.as_bytes()).unwrap()
    }

    fn names(sequence: &[Exercise]) -> Vec<&str> {
        sequence.iter().map(|e| e.name.as_str()).collect()
    }

    fn core_catalog() -> Catalog {
        catalog(
            CatalogKind::Core,
            "Name,Area,Weight,Rep_num,Intensity,Unit\n\
             Crunch,Abs,0,20,1,reps\n\
             Dead Bug,Abs,0,12,1,reps\n\
             Leg Raise,Abs,0,10,2,reps\n\
             Rollout,Abs,0,10,2,reps\n\
             Side Plank,Obliques,0,45,1,seconds\n\
             Russian Twist,Obliques,1,20,2,reps\n\
             Bird Dog,Lower Back,0,12,1,reps\n\
             Back Extension,Lower Back,1,15,2,reps\n",
        )
    }

    #[test]
    fn test_upper_drops_unpaired_tail() {
        let arms = catalog(
            CatalogKind::Arms,
            "Name,Area,Weight,Rep_num,RIR\nA1,Biceps,1,1,1\nA2,Triceps,1,1,1\n",
        );
        let push_pull = catalog(
            CatalogKind::PushPull,
            "Name,Area,Weight,Rep_num,RIR\nP1,Push,1,1,1\n",
        );
        let compound = catalog(
            CatalogKind::Compound,
            "Name,Area,Weight,Rep_num,RIR\nC1,Upper,2,0,1\n",
        );
        let mut rng = StdRng::seed_from_u64(42);

        let split = assemble_upper(&arms, &push_pull, &compound, &mut rng).unwrap();

        assert_eq!(names(&split), vec!["A1", "P1", "C1"]);
        assert_eq!(split[2].area, COMPOUND_AREA);
    }

    #[test]
    fn test_upper_can_append_unpaired_tail() {
        let arms = catalog(
            CatalogKind::Arms,
            "Name,Area,Weight,Rep_num,RIR\nA1,Biceps,1,1,1\nA2,Triceps,1,1,1\n",
        );
        let push_pull = catalog(
            CatalogKind::PushPull,
            "Name,Area,Weight,Rep_num,RIR\nP1,Push,1,1,1\n",
        );
        let compound = catalog(
            CatalogKind::Compound,
            "Name,Area,Weight,Rep_num,RIR\nC1,Upper,2,0,1\n",
        );
        let mut rng = StdRng::seed_from_u64(42);

        let split = assemble_upper_with(
            &arms,
            &push_pull,
            &compound,
            UnpairedAreas::Append,
            &mut rng,
        )
        .unwrap();

        assert_eq!(names(&split), vec!["A1", "P1", "A2", "C1"]);
    }

    #[test]
    fn test_upper_interleaves_builtin_areas() {
        let arms = Catalog::builtin(CatalogKind::Arms).unwrap();
        let push_pull = Catalog::builtin(CatalogKind::PushPull).unwrap();
        let compound = Catalog::builtin(CatalogKind::Compound).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let split = assemble_upper(&arms, &push_pull, &compound, &mut rng).unwrap();
        let areas: Vec<&str> = split.iter().map(|e| e.area.as_str()).collect();

        assert_eq!(
            areas,
            vec!["Biceps", "Shoulders", "Triceps", "Back", COMPOUND_AREA]
        );
    }

    #[test]
    fn test_lower_follows_partition_order() {
        let legs = Catalog::builtin(CatalogKind::Legs).unwrap();
        let compound = Catalog::builtin(CatalogKind::Compound).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let split = assemble_lower(&legs, &compound, &mut rng).unwrap();
        let areas: Vec<&str> = split.iter().map(|e| e.area.as_str()).collect();

        assert_eq!(
            areas,
            vec!["Quads", "Calves", "Glutes", "Hamstrings", COMPOUND_AREA]
        );

        let lower_compounds: HashSet<&str> = compound
            .exercises
            .iter()
            .filter(|e| e.area == "Lower")
            .map(|e| e.name.as_str())
            .collect();
        assert!(lower_compounds.contains(split[4].name.as_str()));
    }

    #[test]
    fn test_missing_compound_area_is_empty_selection() {
        let legs = Catalog::builtin(CatalogKind::Legs).unwrap();
        let compound = catalog(
            CatalogKind::Compound,
            "Name,Area,Weight,Rep_num,RIR\nBench,Upper,2,0,1\n",
        );
        let mut rng = StdRng::seed_from_u64(9);

        let err = assemble_lower(&legs, &compound, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptySelection(_)));
    }

    #[test]
    fn test_core_alternates_intensity_across_all_areas() {
        let core = core_catalog();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let split = assemble_core(&core, &mut rng).unwrap();

            assert_eq!(split.len(), 4);

            let areas: Vec<&str> = split.iter().map(|e| e.area.as_str()).collect();
            assert_eq!(areas, vec!["Abs", "Obliques", "Abs", "Lower Back"]);

            let first = split[0].intensity.unwrap();
            let expected = [first, first.opposite(), first, first.opposite()];
            let actual: Vec<Intensity> = split.iter().map(|e| e.intensity.unwrap()).collect();
            assert_eq!(actual, expected);

            assert_ne!(split[0].name, split[2].name);
        }
    }

    #[test]
    fn test_core_first_pick_covers_both_intensities() {
        let core = core_catalog();
        let mut rng = StdRng::seed_from_u64(21);

        let starts: HashSet<Intensity> = (0..100)
            .map(|_| assemble_core(&core, &mut rng).unwrap()[0].intensity.unwrap())
            .collect();
        assert_eq!(starts.len(), 2);
    }

    #[test]
    fn test_core_exclusion_can_empty_the_draw() {
        let core = catalog(
            CatalogKind::Core,
            "Name,Area,Weight,Rep_num,Intensity,Unit\n\
             Crunch,Abs,0,20,1,reps\n\
             Leg Raise,Abs,0,10,2,reps\n\
             Side Plank,Obliques,0,45,1,seconds\n\
             Russian Twist,Obliques,1,20,2,reps\n\
             Bird Dog,Lower Back,0,12,1,reps\n\
             Back Extension,Lower Back,1,15,2,reps\n",
        );
        let mut rng = StdRng::seed_from_u64(0);

        let err = assemble_core(&core, &mut rng).unwrap_err();
        match err {
            Error::EmptySelection(msg) => assert!(msg.contains("other than")),
            other => panic!("Expected empty selection, got {:?}", other),
        }
    }

    #[test]
    fn test_core_needs_three_areas() {
        let core = catalog(
            CatalogKind::Core,
            "Name,Area,Weight,Rep_num,Intensity,Unit\n\
             Crunch,Abs,0,20,1,reps\n\
             Side Plank,Obliques,0,45,2,seconds\n",
        );
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            assemble_core(&core, &mut rng),
            Err(Error::EmptySelection(_))
        ));
    }

    #[test]
    fn test_shuffle_disabled_keeps_order() {
        let legs = Catalog::builtin(CatalogKind::Legs).unwrap();
        let original = legs.exercises.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let result = maybe_shuffle(original.clone(), false, &mut rng);
        assert_eq!(result, original);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        let arms = Catalog::builtin(CatalogKind::Arms).unwrap();
        let input: Vec<Exercise> = arms.exercises[..3].to_vec();
        let mut rng = StdRng::seed_from_u64(2024);

        const TRIALS: usize = 6000;
        let mut counts: HashMap<Vec<u32>, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let shuffled = maybe_shuffle(input.clone(), true, &mut rng);
            *counts
                .entry(shuffled.iter().map(|e| e.index).collect())
                .or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every permutation should appear");
        let expected = TRIALS / 6;
        for (permutation, count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "permutation {:?} appeared {} times, expected about {}",
                permutation,
                count,
                expected
            );
        }
    }
}
