//! Geographic location types.

use std::fmt;

/// Error returned when constructing a location from invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A validated point on the globe, optionally with a human-readable address.
///
/// Latitude is restricted to [-90, 90] and longitude to [-180, 180], and
/// both must be finite. This type guarantees that any `Location` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Location;
///
/// let seattle = Location::new(47.6062, -122.3321).unwrap();
/// assert_eq!(seattle.lat(), 47.6062);
///
/// // Out-of-range latitude is rejected
/// assert!(Location::new(91.0, 0.0).is_err());
///
/// // Non-finite coordinates are rejected
/// assert!(Location::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    lat: f64,
    long: f64,
    address: Option<String>,
}

impl Location {
    /// Construct a location from latitude and longitude in degrees.
    pub fn new(lat: f64, long: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !long.is_finite() {
            return Err(InvalidCoordinates {
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Self {
            lat,
            long,
            address: None,
        })
    }

    /// Attach a human-readable address to this location.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn long(&self) -> f64 {
        self.long
    }

    /// The address, if one was resolved.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The address if known, otherwise the coordinates as "lat,long".
    pub fn describe(&self) -> String {
        match &self.address {
            Some(addr) => addr.clone(),
            None => format!("{},{}", self.lat, self.long),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
