//! Vacuum Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        links::records::AffiliateLinkRecord,
        regions::Currency,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Vacuum UUID
pub type VacuumUuid = TypedUuid<VacuumRecord>;

/// How a vacuum maps the rooms it cleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingTechnology {
    Laser,
    Camera,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mapping technology")]
pub struct MappingTechnologyParseError;

impl MappingTechnology {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::Camera => "camera",
        }
    }
}

impl Display for MappingTechnology {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingTechnology {
    type Err = MappingTechnologyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "laser" => Ok(Self::Laser),
            "camera" => Ok(Self::Camera),
            _ => Err(MappingTechnologyParseError),
        }
    }
}

/// Measured specs and feature flags of a vacuum.
///
/// Every field is optional: the catalog records what is known about a model
/// and leaves the rest NULL rather than guessing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacuumSpecs {
    /// Battery runtime in minutes.
    pub battery_minutes: Option<i32>,

    /// Suction power in pascals.
    pub suction_pascals: Option<i32>,

    /// Noise level in decibels.
    pub noise_decibels: Option<i32>,

    /// Dustbin capacity in millilitres.
    pub dustbin_ml: Option<i32>,

    /// Water tank capacity in millilitres.
    pub water_tank_ml: Option<i32>,

    pub mopping: Option<bool>,
    pub self_emptying: Option<bool>,
    pub zone_cleaning: Option<bool>,
    pub multi_floor_mapping: Option<bool>,
    pub virtual_walls: Option<bool>,
    pub app_control: Option<bool>,
    pub voice_control: Option<bool>,
    pub manual_control: Option<bool>,
    pub child_lock: Option<bool>,

    pub mapping_technology: Option<MappingTechnology>,
}

/// Vacuum Record
#[derive(Debug, Clone)]
pub struct VacuumRecord {
    /// Unique vacuum identifier.
    pub uuid: VacuumUuid,

    /// Manufacturer brand name.
    pub brand: String,

    /// Model designation within the brand.
    pub model: String,

    /// Known specs and feature flags.
    pub specs: VacuumSpecs,

    /// Product image URL.
    pub image_url: Option<String>,

    /// User that owns this catalog entry.
    pub user_uuid: UserUuid,

    /// Entry creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// A vacuum together with its affiliate links.
#[derive(Debug, Clone)]
pub struct VacuumDetail {
    pub vacuum: VacuumRecord,
    pub links: Vec<AffiliateLinkRecord>,
}

/// A search result: a vacuum plus the price of its affiliate link in the
/// requested region, when one exists.
#[derive(Debug, Clone)]
pub struct VacuumMatch {
    pub vacuum: VacuumRecord,

    /// Price in minor units for the requested region.
    pub price: Option<u64>,

    /// Purchase URL for the requested region.
    pub url: Option<String>,

    /// Denomination of `price`.
    pub currency: Option<Currency>,
}
