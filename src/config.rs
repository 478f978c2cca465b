use crate::date::{STAMP_FMT, SproutDate};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::env;
use std::error::Error;

pub const NOW_VAR: &str = "SPROUT_NOW";
pub const REFERENCE_VAR: &str = "SPROUT_REFERENCE_DATE";
pub const LOG_VAR: &str = "SPROUT_LOG";

/// Settings resolved from the environment. Flags override these later.
#[derive(Debug, Clone)]
pub struct Settings {
    pub now: NaiveDateTime,
    pub reference_date: Option<NaiveDate>,
    pub use_color: bool,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let now = match env::var(NOW_VAR) {
            Ok(raw) => parse_now(&raw)?,
            Err(_) => Local::now().naive_local(),
        };
        let reference_date = match env::var(REFERENCE_VAR) {
            Ok(raw) => Some(parse_reference(&raw)?),
            Err(_) => None,
        };
        Ok(Self {
            now,
            reference_date,
            use_color: env::var("NO_COLOR").is_err(),
            log_filter: env::var(LOG_VAR).ok(),
        })
    }

    /// Date used by `annotate`: the configured literal or today.
    pub fn reference(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| self.now.date())
    }
}

pub fn parse_now(raw: &str) -> Result<NaiveDateTime, Box<dyn Error>> {
    NaiveDateTime::parse_from_str(raw.trim(), STAMP_FMT).map_err(|_| {
        format!("{NOW_VAR} must look like 2025-05-18 09:30:00, got {raw:?}")
            .into()
    })
}

pub fn parse_reference(raw: &str) -> Result<NaiveDate, Box<dyn Error>> {
    Ok(SproutDate::parse(raw.trim())?.naive())
}
