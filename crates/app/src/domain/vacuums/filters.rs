//! Search filters over the vacuum catalog.

use crate::domain::{
    regions::{Currency, Region},
    vacuums::records::MappingTechnology,
};

/// Default number of results when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: i64 = 50;

/// Hard ceiling on the number of results per page.
pub const MAX_LIMIT: i64 = 100;

/// Suction floor (pascals) applied for a single-pet household.
pub const ONE_PET_SUCTION_PASCALS: i32 = 2500;

/// Suction floor (pascals) applied for households with several pets.
pub const MULTI_PET_SUCTION_PASCALS: i32 = 3000;

/// The set of optional constraints a catalog search is parameterized by.
///
/// Filters are ephemeral: they parameterize one read query and are never
/// persisted. A feature flag set to `Some(true)` requires the column to be
/// true (NULL does not match); `None` and `Some(false)` constrain nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Maximum affiliate price in minor units. Only meaningful together
    /// with `region`.
    pub budget: Option<u64>,

    /// Number of pets in the household; translated into a suction floor.
    pub pets: Option<u8>,

    /// Region whose affiliate prices the search is scoped to.
    pub region: Option<Region>,

    /// Currency override; defaults to the region's canonical currency.
    pub currency: Option<Currency>,

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

    /// Inclusive battery runtime floor in minutes.
    pub min_battery_minutes: Option<i32>,

    /// Inclusive noise ceiling in decibels.
    pub max_noise_decibels: Option<i32>,

    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Filters {
    /// The suction floor implied by the pet count, if any.
    #[must_use]
    pub fn min_suction_pascals(&self) -> Option<i32> {
        match self.pets {
            None | Some(0) => None,
            Some(1) => Some(ONE_PET_SUCTION_PASCALS),
            Some(_) => Some(MULTI_PET_SUCTION_PASCALS),
        }
    }

    /// The currency prices are matched in: the explicit override, or the
    /// region's canonical currency.
    #[must_use]
    pub fn price_currency(&self) -> Option<Currency> {
        self.currency.or_else(|| self.region.map(Region::currency))
    }

    /// Page size after defaulting and clamping.
    #[must_use]
    pub fn page_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Page offset after defaulting.
    #[must_use]
    pub fn page_offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_count_maps_to_suction_floor() {
        let mut filters = Filters::default();

        assert_eq!(filters.min_suction_pascals(), None);

        filters.pets = Some(0);
        assert_eq!(filters.min_suction_pascals(), None);

        filters.pets = Some(1);
        assert_eq!(filters.min_suction_pascals(), Some(ONE_PET_SUCTION_PASCALS));

        filters.pets = Some(2);
        assert_eq!(
            filters.min_suction_pascals(),
            Some(MULTI_PET_SUCTION_PASCALS)
        );

        filters.pets = Some(7);
        assert_eq!(
            filters.min_suction_pascals(),
            Some(MULTI_PET_SUCTION_PASCALS)
        );
    }

    #[test]
    fn price_currency_defaults_to_region_currency() {
        let filters = Filters {
            region: Some(Region::Uk),
            ..Filters::default()
        };

        assert_eq!(filters.price_currency(), Some(Currency::Gbp));
    }

    #[test]
    fn price_currency_honours_explicit_override() {
        let filters = Filters {
            region: Some(Region::Eu),
            currency: Some(Currency::Usd),
            ..Filters::default()
        };

        assert_eq!(filters.price_currency(), Some(Currency::Usd));
    }

    #[test]
    fn page_limit_is_clamped() {
        let mut filters = Filters::default();

        assert_eq!(filters.page_limit(), DEFAULT_LIMIT);

        filters.limit = Some(0);
        assert_eq!(filters.page_limit(), 1);

        filters.limit = Some(10_000);
        assert_eq!(filters.page_limit(), MAX_LIMIT);
    }

    #[test]
    fn page_offset_never_negative() {
        let filters = Filters {
            offset: Some(-5),
            ..Filters::default()
        };

        assert_eq!(filters.page_offset(), 0);
    }
}
