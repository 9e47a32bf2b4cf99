//! Splitting a catalog into groups that share an area label.

use crate::catalog::Catalog;
use crate::types::Exercise;

/// The rows of one catalog that share a single area value
#[derive(Clone, Debug)]
pub struct AreaGroup<'a> {
    pub area: &'a str,
    pub exercises: Vec<&'a Exercise>,
}

/// Partition a catalog into one group per distinct area
///
/// Groups follow the order in which each area first appears in the catalog,
/// and every row lands in exactly one group. Rows keep their catalog order
/// within a group even when the source is not sorted by area.
pub fn partition(catalog: &Catalog) -> Vec<AreaGroup<'_>> {
    let mut groups: Vec<AreaGroup<'_>> = Vec::new();

    for exercise in &catalog.exercises {
        match groups.iter_mut().find(|g| g.area == exercise.area) {
            Some(group) => group.exercises.push(exercise),
            None => groups.push(AreaGroup {
                area: &exercise.area,
                exercises: vec![exercise],
            }),
        }
    }

    tracing::debug!(
        "Partitioned {} catalog into {} areas",
        catalog.kind,
        groups.len()
    );
    groups
}
