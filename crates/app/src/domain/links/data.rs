//! Affiliate Link Data

use crate::domain::{
    links::records::AffiliateLinkUuid,
    regions::{Currency, Region},
    vacuums::records::VacuumUuid,
};

/// New Affiliate Link Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAffiliateLink {
    pub uuid: AffiliateLinkUuid,
    pub vacuum_uuid: VacuumUuid,
    pub region: Region,
    pub currency: Currency,
    pub price: u64,
    pub url: String,
}

/// Affiliate Link Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct AffiliateLinkUpdate {
    pub region: Region,
    pub currency: Currency,
    pub price: u64,
    pub url: String,
}

/// One entry of the replacement set applied during a vacuum update.
///
/// Replacement links get fresh UUIDs; the old set is discarded wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementLink {
    pub region: Region,
    pub currency: Currency,
    pub price: u64,
    pub url: String,
}
