//! Core domain types for the workout generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their training levels
//! - Catalog identities
//! - Split types and workout options
//! - Assembled workouts

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Exercise Levels
// ============================================================================

/// Weight level of an exercise (`Weight` column: 0, 1, 2)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8")]
pub enum Weight {
    Low,
    Medium,
    Heavy,
}

impl TryFrom<u8> for Weight {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Weight::Low),
            1 => Ok(Weight::Medium),
            2 => Ok(Weight::Heavy),
            other => Err(format!("weight level must be 0, 1 or 2, got {}", other)),
        }
    }
}

/// Reps-in-reserve flag (`RIR` column: 0, 1)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8")]
pub enum Rir {
    NoneInReserve,
    InReserve,
}

impl TryFrom<u8> for Rir {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Rir::NoneInReserve),
            1 => Ok(Rir::InReserve),
            other => Err(format!("RIR flag must be 0 or 1, got {}", other)),
        }
    }
}

/// Core exercise intensity (`Intensity` column: 1, 2)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8")]
pub enum Intensity {
    Low,
    High,
}

impl Intensity {
    /// The other intensity level
    pub fn opposite(self) -> Self {
        match self {
            Intensity::Low => Intensity::High,
            Intensity::High => Intensity::Low,
        }
    }

    /// Numeric code as stored in the catalog
    pub fn code(self) -> u8 {
        match self {
            Intensity::Low => 1,
            Intensity::High => 2,
        }
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            1 => Ok(Intensity::Low),
            2 => Ok(Intensity::High),
            other => Err(format!("intensity must be 1 or 2, got {}", other)),
        }
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// A single catalog row
///
/// Field names follow the column headers of the exercise tables. The core
/// catalog additionally carries `Intensity` and `Unit`, and its `Rep_num`
/// is a repetition count rather than a 0/1/2 level.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Exercise {
    #[serde(rename = "Index", default)]
    pub index: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Weight")]
    pub weight: Weight,
    #[serde(rename = "Rep_num")]
    pub rep_num: u32,
    #[serde(rename = "RIR", default)]
    pub rir: Option<Rir>,
    #[serde(rename = "Instructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "Intensity", default)]
    pub intensity: Option<Intensity>,
    #[serde(rename = "Unit", default)]
    pub unit: Option<String>,
}

impl Exercise {
    /// Copy of this exercise rendered under a different area label
    pub fn relabeled(&self, area: &str) -> Exercise {
        Exercise {
            area: area.to_string(),
            ..self.clone()
        }
    }
}

// ============================================================================
// Catalog Kinds
// ============================================================================

/// The five reference tables an invocation draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Arms,
    PushPull,
    Legs,
    Compound,
    Core,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Arms,
        CatalogKind::PushPull,
        CatalogKind::Legs,
        CatalogKind::Compound,
        CatalogKind::Core,
    ];

    /// File name of this catalog inside a catalog directory
    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::Arms => "Arms.csv",
            CatalogKind::PushPull => "Push_Pull.csv",
            CatalogKind::Legs => "Legs.csv",
            CatalogKind::Compound => "Compound.csv",
            CatalogKind::Core => "Core.csv",
        }
    }

    /// Columns that must be present in the header row
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            CatalogKind::Core => &["Name", "Area", "Weight", "Rep_num", "Intensity", "Unit"],
            _ => &["Name", "Area", "Weight", "Rep_num", "RIR"],
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogKind::Arms => "Arms",
            CatalogKind::PushPull => "Push/Pull",
            CatalogKind::Legs => "Legs",
            CatalogKind::Compound => "Compound",
            CatalogKind::Core => "Core",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Workout Options
// ============================================================================

/// Body-region workout type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitType {
    Upper,
    Lower,
}

impl SplitType {
    /// Title used in rendered headers
    pub fn title(self) -> &'static str {
        match self {
            SplitType::Upper => "Upper",
            SplitType::Lower => "Lower",
        }
    }

    /// Area of the compound catalog drawn for this split
    pub fn compound_area(self) -> &'static str {
        self.title()
    }
}

impl FromStr for SplitType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "upper" => Ok(SplitType::Upper),
            "lower" => Ok(SplitType::Lower),
            _ => Err(Error::InvalidInput(format!(
                "Invalid split type '{}'. Please enter either \"upper\" or \"lower\".",
                s
            ))),
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Parse a `yes`/`no` command-line flag
pub fn parse_toggle(flag: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(Error::InvalidInput(format!(
            "Invalid value '{}' for {}. Please enter either \"yes\" or \"no\".",
            value, flag
        ))),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// What to do with push/pull or arm picks left without a partner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnpairedAreas {
    /// Strict pairwise interleave; the longer side's tail is dropped
    #[default]
    Drop,
    /// Leftover picks follow the interleaved pairs
    Append,
}

/// Choices made for a single invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutOptions {
    pub split: SplitType,
    pub shuffle: bool,
    pub main_instructions: bool,
    pub core_instructions: bool,
    pub unpaired: UnpairedAreas,
}

impl WorkoutOptions {
    /// Options with the out-of-the-box defaults (shuffle on, no instructions)
    pub fn new(split: SplitType) -> Self {
        Self {
            split,
            shuffle: true,
            main_instructions: false,
            core_instructions: false,
            unpaired: UnpairedAreas::Drop,
        }
    }

    /// One-line confirmation of the choices made
    pub fn summary(&self, destination: &str) -> String {
        format!(
            "{} workout sent to {} (shuffle: {}, main instructions: {}, core instructions: {})",
            self.split,
            destination,
            yes_no(self.shuffle),
            yes_no(self.main_instructions),
            yes_no(self.core_instructions),
        )
    }
}

// ============================================================================
// Workout
// ============================================================================

/// An assembled workout: the main split plus its core block
#[derive(Clone, Debug)]
pub struct Workout {
    pub split: SplitType,
    pub main: Vec<Exercise>,
    pub core: Vec<Exercise>,
}
