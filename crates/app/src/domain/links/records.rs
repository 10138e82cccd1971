//! Affiliate Link Records

use jiff::Timestamp;

use crate::{
    domain::{
        regions::{Currency, Region},
        users::records::UserUuid,
        vacuums::records::VacuumUuid,
    },
    uuids::TypedUuid,
};

/// Affiliate Link UUID
pub type AffiliateLinkUuid = TypedUuid<AffiliateLinkRecord>;

/// A region- and currency-specific purchase URL and price for a vacuum.
#[derive(Debug, Clone)]
pub struct AffiliateLinkRecord {
    /// Unique link identifier.
    pub uuid: AffiliateLinkUuid,

    /// Vacuum this link belongs to.
    pub vacuum_uuid: VacuumUuid,

    /// User that owns this link.
    pub user_uuid: UserUuid,

    /// Geography this link is priced for.
    pub region: Region,

    /// Denomination of `price`.
    pub currency: Currency,

    /// Price in minor units (cents/pence).
    pub price: u64,

    /// Destination purchase URL.
    pub url: String,

    /// Link creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
