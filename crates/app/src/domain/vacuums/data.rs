//! Vacuum Data

use crate::domain::{
    links::data::ReplacementLink,
    vacuums::records::{VacuumSpecs, VacuumUuid},
};

/// New Vacuum Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVacuum {
    pub uuid: VacuumUuid,
    pub brand: String,
    pub model: String,
    pub specs: VacuumSpecs,
    pub image_url: Option<String>,
}

/// Vacuum Update Data
///
/// All spec columns are overwritten. When `links` is present the vacuum's
/// affiliate links are replaced wholesale with the given set; when absent
/// the existing links are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct VacuumUpdate {
    pub brand: String,
    pub model: String,
    pub specs: VacuumSpecs,
    pub image_url: Option<String>,
    pub links: Option<Vec<ReplacementLink>>,
}
