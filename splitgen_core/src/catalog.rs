//! Exercise catalogs: loading, the built-in reference tables, and validation.
//!
//! Each catalog is a CSV table with one exercise per row. A catalog directory
//! may override any of the five tables; anything it lacks falls back to the
//! tables compiled into the library.

use crate::types::{CatalogKind, Exercise, Intensity};
use crate::{Error, Result};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const BUILTIN_ARMS: &str = include_str!("../data/Arms.csv");
const BUILTIN_PUSH_PULL: &str = include_str!("../data/Push_Pull.csv");
const BUILTIN_LEGS: &str = include_str!("../data/Legs.csv");
const BUILTIN_COMPOUND: &str = include_str!("../data/Compound.csv");
const BUILTIN_CORE: &str = include_str!("../data/Core.csv");

/// An ordered, read-only table of exercises sharing one schema
#[derive(Clone, Debug)]
pub struct Catalog {
    pub kind: CatalogKind,
    pub exercises: Vec<Exercise>,
}

/// The five catalogs one invocation draws from
#[derive(Clone, Debug)]
pub struct CatalogSet {
    pub arms: Catalog,
    pub push_pull: Catalog,
    pub legs: Catalog,
    pub compound: Catalog,
    pub core: Catalog,
}

fn builtin_table(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Arms => BUILTIN_ARMS,
        CatalogKind::PushPull => BUILTIN_PUSH_PULL,
        CatalogKind::Legs => BUILTIN_LEGS,
        CatalogKind::Compound => BUILTIN_COMPOUND,
        CatalogKind::Core => BUILTIN_CORE,
    }
}

fn schema_error(kind: CatalogKind, detail: String) -> Error {
    Error::Schema {
        catalog: kind.to_string(),
        detail,
    }
}

impl Catalog {
    /// Build a catalog from rows already in memory
    pub fn new(kind: CatalogKind, exercises: Vec<Exercise>) -> Self {
        Self { kind, exercises }
    }

    /// Parse a catalog from CSV text
    ///
    /// The header row must contain every column `kind` requires; otherwise a
    /// schema error is returned before any row is read.
    pub fn from_reader<R: Read>(kind: CatalogKind, reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in kind.required_columns() {
            if !headers.iter().any(|h| h == *column) {
                return Err(schema_error(kind, format!("missing column '{}'", column)));
            }
        }

        let mut exercises = Vec::new();
        for (row, record) in reader.deserialize::<Exercise>().enumerate() {
            let exercise = record?;

            if kind == CatalogKind::Core {
                if exercise.intensity.is_none() {
                    return Err(schema_error(
                        kind,
                        format!("row {} ('{}') has no Intensity", row + 1, exercise.name),
                    ));
                }
                if exercise.unit.is_none() {
                    return Err(schema_error(
                        kind,
                        format!("row {} ('{}') has no Unit", row + 1, exercise.name),
                    ));
                }
            }

            exercises.push(exercise);
        }

        tracing::debug!("Parsed {} exercises for {} catalog", exercises.len(), kind);
        Ok(Self { kind, exercises })
    }

    /// Load a catalog from a CSV file
    pub fn load_from(kind: CatalogKind, path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(kind, file)?;
        tracing::info!("Loaded {} catalog from {:?}", kind, path);
        Ok(catalog)
    }

    /// The built-in reference table for `kind`
    pub fn builtin(kind: CatalogKind) -> Result<Self> {
        Self::from_reader(kind, builtin_table(kind).as_bytes())
    }

    /// Distinct area labels in first-seen order
    pub fn areas(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.exercises
            .iter()
            .map(|e| e.area.as_str())
            .filter(|area| seen.insert(*area))
            .collect()
    }

    /// Validate the catalog for the shape the assemblers rely on
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.exercises.is_empty() {
            errors.push(format!("{} catalog has no exercises", self.kind));
            return errors;
        }

        for exercise in &self.exercises {
            if exercise.name.is_empty() {
                errors.push(format!(
                    "{} catalog: exercise {} has empty name",
                    self.kind, exercise.index
                ));
            }
            if exercise.area.is_empty() {
                errors.push(format!(
                    "{} catalog: '{}' has empty area",
                    self.kind, exercise.name
                ));
            }
        }

        match self.kind {
            CatalogKind::Compound => {
                for area in ["Upper", "Lower"] {
                    if !self.exercises.iter().any(|e| e.area == area) {
                        errors.push(format!("Compound catalog has no '{}' exercises", area));
                    }
                }
            }
            CatalogKind::Core => errors.extend(self.validate_core_shape()),
            _ => {}
        }

        errors
    }

    fn validate_core_shape(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let areas = self.areas();

        if areas.len() < 3 {
            errors.push(format!(
                "Core catalog needs 3 areas, found {}: {:?}",
                areas.len(),
                areas
            ));
        }

        for area in areas.iter().take(3) {
            for intensity in [Intensity::Low, Intensity::High] {
                let names: HashSet<&str> = self
                    .exercises
                    .iter()
                    .filter(|e| e.area == *area && e.intensity == Some(intensity))
                    .map(|e| e.name.as_str())
                    .collect();

                if names.is_empty() {
                    errors.push(format!(
                        "Core area '{}' has no intensity {} exercises",
                        area,
                        intensity.code()
                    ));
                } else if Some(area) == areas.first() && names.len() < 2 {
                    // The first area is drawn twice at the same intensity under distinct names
                    errors.push(format!(
                        "Core area '{}' needs at least 2 distinct intensity {} exercises",
                        area,
                        intensity.code()
                    ));
                }
            }
        }

        errors
    }
}

impl CatalogSet {
    /// The built-in reference tables
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            arms: Catalog::builtin(CatalogKind::Arms)?,
            push_pull: Catalog::builtin(CatalogKind::PushPull)?,
            legs: Catalog::builtin(CatalogKind::Legs)?,
            compound: Catalog::builtin(CatalogKind::Compound)?,
            core: Catalog::builtin(CatalogKind::Core)?,
        })
    }

    /// Catalog of the given kind
    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Arms => &self.arms,
            CatalogKind::PushPull => &self.push_pull,
            CatalogKind::Legs => &self.legs,
            CatalogKind::Compound => &self.compound,
            CatalogKind::Core => &self.core,
        }
    }

    /// Validate every catalog in the set
    pub fn validate(&self) -> Vec<String> {
        CatalogKind::ALL
            .iter()
            .flat_map(|kind| self.get(*kind).validate())
            .collect()
    }
}

/// Load all five catalogs, preferring files in `dir` over the built-in tables
pub fn load_catalog_set(dir: Option<&Path>) -> Result<CatalogSet> {
    let load = |kind: CatalogKind| -> Result<Catalog> {
        match dir.map(|d| d.join(kind.file_name())) {
            Some(path) if path.exists() => Catalog::load_from(kind, &path),
            _ => {
                tracing::debug!("Using built-in {} catalog", kind);
                Catalog::builtin(kind)
            }
        }
    };

    Ok(CatalogSet {
        arms: load(CatalogKind::Arms)?,
        push_pull: load(CatalogKind::PushPull)?,
        legs: load(CatalogKind::Legs)?,
        compound: load(CatalogKind::Compound)?,
        core: load(CatalogKind::Core)?,
    })
}
