//! Test fixtures.

use crate::domain::vacuums::{
    data::NewVacuum,
    records::{VacuumSpecs, VacuumUuid},
};

/// A minimal catalog entry: brand and model set, everything else unknown.
pub(crate) fn sample_vacuum(brand: &str, model: &str) -> NewVacuum {
    NewVacuum {
        uuid: VacuumUuid::new(),
        brand: brand.to_string(),
        model: model.to_string(),
        specs: VacuumSpecs::default(),
        image_url: None,
    }
}
