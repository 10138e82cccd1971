//! Regions and currencies used to scope affiliate pricing.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geography an affiliate link is priced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    Eu,
    Ca,
    Au,
}

/// The denomination an affiliate price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
    Cad,
    Aud,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionParseError {
    #[error("unknown region")]
    UnknownRegion,

    #[error("unknown currency")]
    UnknownCurrency,
}

/// ISO 3166-1 alpha-2 codes of EU member states, for country mapping.
const EU_COUNTRY_CODES: [&str; 27] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT", "LV",
    "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

impl Region {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Uk => "uk",
            Self::Eu => "eu",
            Self::Ca => "ca",
            Self::Au => "au",
        }
    }

    /// The canonical currency affiliate prices in this region are quoted in.
    #[must_use]
    pub const fn currency(self) -> Currency {
        match self {
            Self::Us => Currency::Usd,
            Self::Uk => Currency::Gbp,
            Self::Eu => Currency::Eur,
            Self::Ca => Currency::Cad,
            Self::Au => Currency::Aud,
        }
    }

    /// Map an ISO 3166-1 alpha-2 country code to the region serving it.
    ///
    /// Returns `None` for countries outside the supported set; callers fall
    /// back to their own default.
    #[must_use]
    pub fn from_country_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_uppercase();

        match code.as_str() {
            "US" => Some(Self::Us),
            // "UK" is not a valid ISO code but shows up in the wild.
            "GB" | "UK" => Some(Self::Uk),
            "CA" => Some(Self::Ca),
            "AU" => Some(Self::Au),
            _ if EU_COUNTRY_CODES.contains(&code.as_str()) => Some(Self::Eu),
            _ => None,
        }
    }
}

impl Currency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Gbp => "gbp",
            Self::Eur => "eur",
            Self::Cad => "cad",
            Self::Aud => "aud",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "us" => Ok(Self::Us),
            "uk" => Ok(Self::Uk),
            "eu" => Ok(Self::Eu),
            "ca" => Ok(Self::Ca),
            "au" => Ok(Self::Au),
            _ => Err(RegionParseError::UnknownRegion),
        }
    }
}

impl FromStr for Currency {
    type Err = RegionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "usd" => Ok(Self::Usd),
            "gbp" => Ok(Self::Gbp),
            "eur" => Ok(Self::Eur),
            "cad" => Ok(Self::Cad),
            "aud" => Ok(Self::Aud),
            _ => Err(RegionParseError::UnknownCurrency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_round_trips_through_str() {
        for region in [Region::Us, Region::Uk, Region::Eu, Region::Ca, Region::Au] {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn currency_round_trips_through_str() {
        for currency in [
            Currency::Usd,
            Currency::Gbp,
            Currency::Eur,
            Currency::Cad,
            Currency::Aud,
        ] {
            assert_eq!(currency.as_str().parse::<Currency>(), Ok(currency));
        }
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert_eq!(
            "atlantis".parse::<Region>(),
            Err(RegionParseError::UnknownRegion)
        );
    }

    #[test]
    fn country_codes_map_to_regions() {
        assert_eq!(Region::from_country_code("US"), Some(Region::Us));
        assert_eq!(Region::from_country_code("GB"), Some(Region::Uk));
        assert_eq!(Region::from_country_code("uk"), Some(Region::Uk));
        assert_eq!(Region::from_country_code("DE"), Some(Region::Eu));
        assert_eq!(Region::from_country_code("fr"), Some(Region::Eu));
        assert_eq!(Region::from_country_code("CA"), Some(Region::Ca));
        assert_eq!(Region::from_country_code("AU"), Some(Region::Au));
        assert_eq!(Region::from_country_code("JP"), None);
        assert_eq!(Region::from_country_code(""), None);
    }

    #[test]
    fn each_region_has_a_canonical_currency() {
        assert_eq!(Region::Us.currency(), Currency::Usd);
        assert_eq!(Region::Uk.currency(), Currency::Gbp);
        assert_eq!(Region::Eu.currency(), Currency::Eur);
        assert_eq!(Region::Ca.currency(), Currency::Cad);
        assert_eq!(Region::Au.currency(), Currency::Aud);
    }
}
