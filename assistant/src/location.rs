use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// A device-derived position. Read-only downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where a lookup or a share should be anchored, after precedence
/// resolution: a manually entered address wins over device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates(Coordinates),
    Address(String),
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("no position source available")]
    Unavailable,
    #[error("position source returned an unusable value: {0}")]
    Invalid(String),
}

/// Single-shot position fix, the device geolocation capability. Not a
/// continuous stream; callers re-request when they discover they have no
/// usable location.
pub trait LocationSource {
    fn locate(&self) -> Result<Coordinates, LocateError>;
}

pub const LATITUDE_VAR: &str = "HAVEN_LATITUDE";
pub const LONGITUDE_VAR: &str = "HAVEN_LONGITUDE";

/// Reads a fix from `HAVEN_LATITUDE` / `HAVEN_LONGITUDE`.
///
/// Headless stand-in for a platform positioning service.
pub struct EnvLocationSource;

impl LocationSource for EnvLocationSource {
    fn locate(&self) -> Result<Coordinates, LocateError> {
        let latitude = env::var(LATITUDE_VAR).map_err(|_| LocateError::Unavailable)?;
        let longitude = env::var(LONGITUDE_VAR).map_err(|_| LocateError::Unavailable)?;
        let latitude = latitude
            .trim()
            .parse::<f64>()
            .map_err(|error| LocateError::Invalid(error.to_string()))?;
        let longitude = longitude
            .trim()
            .parse::<f64>()
            .map_err(|error| LocateError::Invalid(error.to_string()))?;
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

/// The position known to the app plus the manual override.
#[derive(Debug, Default)]
pub struct LocationState {
    coordinates: Option<Coordinates>,
    manual_address: Option<String>,
}

impl LocationState {
    /// Attempt a fix quietly. Denial or unavailability is logged, never
    /// surfaced; the position simply stays unset.
    pub fn refresh(&mut self, source: &dyn LocationSource) {
        match source.locate() {
            Ok(coordinates) => self.coordinates = Some(coordinates),
            Err(error) => {
                tracing::warn!(%error, "location permission denied or unavailable");
            }
        }
    }

    /// Set the manual override. Empty or whitespace-only input is ignored.
    pub fn set_manual_address(&mut self, address: &str) {
        let address = address.trim();
        if !address.is_empty() {
            self.manual_address = Some(address.to_string());
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    #[must_use]
    pub fn manual_address(&self) -> Option<&str> {
        self.manual_address.as_deref()
    }

    /// Resolve the location for downstream use: the manual address, when
    /// present, wins over device coordinates for both sharing and
    /// safe-place lookup.
    #[must_use]
    pub fn query(&self) -> Option<LocationQuery> {
        if let Some(address) = &self.manual_address {
            return Some(LocationQuery::Address(address.clone()));
        }
        self.coordinates.map(LocationQuery::Coordinates)
    }
}
