//! Affiliate Link Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vacfinder_app::domain::links::records::AffiliateLinkRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod update;

/// Affiliate Link Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LinkResponse {
    /// The unique identifier of the link
    pub uuid: Uuid,

    /// The vacuum the link belongs to
    pub vacuum_uuid: Uuid,

    /// Region the link is priced for
    pub region: String,

    /// Denomination of `price`
    pub currency: String,

    /// Price in minor units (cents/pence)
    pub price: u64,

    /// Destination purchase URL
    pub url: String,

    /// The date and time the link was created
    pub created_at: String,

    /// The date and time the link was last updated
    pub updated_at: String,
}

impl From<AffiliateLinkRecord> for LinkResponse {
    fn from(link: AffiliateLinkRecord) -> Self {
        LinkResponse {
            uuid: link.uuid.into(),
            vacuum_uuid: link.vacuum_uuid.into(),
            region: link.region.to_string(),
            currency: link.currency.to_string(),
            price: link.price,
            url: link.url,
            created_at: link.created_at.to_string(),
            updated_at: link.updated_at.to_string(),
        }
    }
}
