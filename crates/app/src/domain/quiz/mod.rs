//! Guided quiz: maps a shopper's answers onto catalog search filters.
//!
//! The quiz holds no state and touches no storage; it is a deterministic
//! projection from answers to [`Filters`], which the caller then runs
//! through the regular search.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{regions::Region, vacuums::filters::Filters};

/// Battery floor (minutes) required for a large home.
const LARGE_HOME_BATTERY_MINUTES: i32 = 150;

/// Battery floor (minutes) required for a medium home.
const MEDIUM_HOME_BATTERY_MINUTES: i32 = 90;

/// Noise ceiling (decibels) for noise-sensitive households.
const QUIET_NOISE_DECIBELS: i32 = 60;

/// Rough floor area the shopper needs cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    Medium,
    Large,
}

/// How the shopper prefers to drive the vacuum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPreference {
    App,
    Voice,
    Manual,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown quiz answer")]
pub struct QuizAnswerParseError;

impl FromStr for HomeSize {
    type Err = QuizAnswerParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(QuizAnswerParseError),
        }
    }
}

impl FromStr for ControlPreference {
    type Err = QuizAnswerParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "app" => Ok(Self::App),
            "voice" => Ok(Self::Voice),
            "manual" => Ok(Self::Manual),
            _ => Err(QuizAnswerParseError),
        }
    }
}

/// One completed pass through the guided quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnswers {
    pub home_size: HomeSize,

    /// Number of floors the vacuum should cover.
    pub floors: u8,

    /// Number of pets in the household.
    pub pets: u8,

    /// Maximum spend in minor units, if the shopper gave one.
    pub budget: Option<u64>,

    pub noise_sensitive: bool,
    pub wants_mopping: bool,
    pub wants_self_empty: bool,

    /// Rooms that need targeted cleaning (kitchen after dinner, etc).
    pub has_problem_areas: bool,

    /// Areas the vacuum must stay out of.
    pub has_no_go_zones: bool,

    pub control: ControlPreference,

    /// Region the shopper is buying in, when known.
    pub region: Option<Region>,
}

/// Translate quiz answers into catalog search filters.
#[must_use]
pub fn filters_for_answers(answers: &QuizAnswers) -> Filters {
    let mut filters = Filters {
        budget: answers.budget,
        pets: Some(answers.pets),
        region: answers.region,
        ..Filters::default()
    };

    filters.min_battery_minutes = match answers.home_size {
        HomeSize::Small => None,
        HomeSize::Medium => Some(MEDIUM_HOME_BATTERY_MINUTES),
        HomeSize::Large => Some(LARGE_HOME_BATTERY_MINUTES),
    };

    if answers.floors > 1 {
        filters.multi_floor_mapping = Some(true);
    }

    if answers.noise_sensitive {
        filters.max_noise_decibels = Some(QUIET_NOISE_DECIBELS);
    }

    if answers.wants_mopping {
        filters.mopping = Some(true);
    }

    if answers.wants_self_empty {
        filters.self_emptying = Some(true);
    }

    if answers.has_problem_areas {
        filters.zone_cleaning = Some(true);
    }

    if answers.has_no_go_zones {
        filters.virtual_walls = Some(true);
    }

    match answers.control {
        ControlPreference::App => filters.app_control = Some(true),
        ControlPreference::Voice => filters.voice_control = Some(true),
        ControlPreference::Manual => filters.manual_control = Some(true),
    }

    // A budget answered without a region cannot be applied to any price.
    if filters.region.is_none() {
        filters.budget = None;
    }

    filters
}
