//! Uniform random draws from a catalog, one area at a time.

use crate::catalog::Catalog;
use crate::partition::AreaGroup;
use crate::types::Exercise;
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw one exercise uniformly from the rows matching `predicate`
pub(crate) fn sample_where<R, F>(
    catalog: &Catalog,
    rng: &mut R,
    describe: impl FnOnce() -> String,
    predicate: F,
) -> Result<Exercise>
where
    R: Rng + ?Sized,
    F: Fn(&Exercise) -> bool,
{
    let candidates: Vec<&Exercise> = catalog.exercises.iter().filter(|e| predicate(e)).collect();

    let picked = candidates.choose(rng).ok_or_else(|| {
        Error::EmptySelection(format!("{} catalog has no {}", catalog.kind, describe()))
    })?;

    tracing::debug!(
        "Drew '{}' from {} candidates in {} catalog",
        picked.name,
        candidates.len(),
        catalog.kind
    );
    Ok((*picked).clone())
}

/// Draw one exercise uniformly from the catalog rows in `area`
pub fn sample_area<R: Rng + ?Sized>(
    catalog: &Catalog,
    area: &str,
    rng: &mut R,
) -> Result<Exercise> {
    sample_where(
        catalog,
        rng,
        || format!("exercises in area '{}'", area),
        |e| e.area == area,
    )
}

/// Draw one exercise from the catalog restricted to `group`'s area
///
/// The draw goes back to the catalog rather than the group's own rows, since
/// a group may come from a different catalog than the one supplied.
pub fn sample_one<R: Rng + ?Sized>(
    catalog: &Catalog,
    group: &AreaGroup<'_>,
    rng: &mut R,
) -> Result<Exercise> {
    sample_area(catalog, group.area, rng)
}

/// Draw one exercise per group, independently, in group order
pub fn sample_all<R: Rng + ?Sized>(
    catalog: &Catalog,
    groups: &[AreaGroup<'_>],
    rng: &mut R,
) -> Result<Vec<Exercise>> {
    groups
        .iter()
        .map(|group| sample_one(catalog, group, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use crate::types::CatalogKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn arms_catalog() -> Catalog {
        let csv = "Name,Area,Weight,Rep_num,RIR\n\
                   Curl,Biceps,1,1,1\n\
                   Hammer Curl,Biceps,1,1,1\n\
                   Pushdown,Triceps,1,2,0\n\
                   Dip,Triceps,0,2,0\n\
                   Skull Crusher,Triceps,1,1,0\n";
        Catalog::from_reader(CatalogKind::Arms, csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_sample_one_stays_in_area() {
        let catalog = arms_catalog();
        let groups = partition(&catalog);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let pick = sample_one(&catalog, &groups[1], &mut rng).unwrap();
            assert_eq!(pick.area, "Triceps");
        }
    }

    #[test]
    fn test_sample_one_reaches_every_row() {
        let catalog = arms_catalog();
        let groups = partition(&catalog);
        let mut rng = StdRng::seed_from_u64(11);

        let seen: HashSet<String> = (0..200)
            .map(|_| sample_one(&catalog, &groups[1], &mut rng).unwrap().name)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_sample_all_preserves_group_order() {
        let catalog = arms_catalog();
        let groups = partition(&catalog);
        let mut rng = StdRng::seed_from_u64(3);

        let picks = sample_all(&catalog, &groups, &mut rng).unwrap();
        let areas: Vec<&str> = picks.iter().map(|e| e.area.as_str()).collect();
        assert_eq!(areas, vec!["Biceps", "Triceps"]);
    }

    #[test]
    fn test_group_from_other_catalog_is_empty_selection() {
        let catalog = arms_catalog();
        let legs = Catalog::builtin(CatalogKind::Legs).unwrap();
        let leg_groups = partition(&legs);
        let mut rng = StdRng::seed_from_u64(1);

        let err = sample_one(&catalog, &leg_groups[0], &mut rng).unwrap_err();
        match err {
            Error::EmptySelection(msg) => assert!(msg.contains("Quads")),
            other => panic!("Expected empty selection, got {:?}", other),
        }
    }
}
