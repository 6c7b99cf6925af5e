//! Conversion from wire types to domain locations.

use crate::domain::Location;

use super::error::GeocodeError;
use super::types::{LocationResource, LocationsResponse};

/// Geocoder confidence in a candidate, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Parse the API's confidence string (case-insensitive).
    ///
    /// Unknown confidence values are a shape error, not a silent default.
    pub fn parse(s: &str) -> Result<Self, GeocodeError> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            other => Err(GeocodeError::BadShape(format!(
                "unknown confidence {other:?}"
            ))),
        }
    }
}

/// A geocoded candidate: the resolved location plus the geocoder's
/// confidence in the match.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: Location,
    pub confidence: Confidence,
}

/// Convert one location resource to a resolved location.
pub fn convert_resource(resource: &LocationResource) -> Result<ResolvedLocation, GeocodeError> {
    let coords = &resource.point.coordinates;
    let [lat, long] = coords.as_slice() else {
        return Err(GeocodeError::BadShape(format!(
            "expected [lat, long] coordinates, got {} values",
            coords.len()
        )));
    };

    let location = Location::new(*lat, *long)
        .map_err(|e| GeocodeError::BadShape(e.to_string()))?
        .with_address(resource.address.formatted_address.clone());

    Ok(ResolvedLocation {
        location,
        confidence: Confidence::parse(&resource.confidence)?,
    })
}

/// Convert a full response to candidates sorted best-confidence-first.
///
/// Resources with equal confidence keep the API's ordering.
pub fn convert_response(
    response: &LocationsResponse,
    query: &str,
) -> Result<Vec<ResolvedLocation>, GeocodeError> {
    let resources = response.resources();
    if resources.is_empty() {
        return Err(GeocodeError::NoMatches {
            query: query.to_string(),
        });
    }

    let mut candidates = resources
        .iter()
        .map(convert_resource)
        .collect::<Result<Vec<_>, _>>()?;

    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::types::{Address, Point};

    fn resource(lat: f64, long: f64, address: &str, confidence: &str) -> LocationResource {
        LocationResource {
            point: Point {
                coordinates: vec![lat, long],
            },
            address: Address {
                formatted_address: address.to_string(),
            },
            confidence: confidence.to_string(),
        }
    }

    fn response(resources: Vec<LocationResource>) -> LocationsResponse {
        use crate::geocode::types::ResourceSet;
        LocationsResponse {
            resource_sets: vec![ResourceSet { resources }],
        }
    }

    #[test]
    fn confidence_ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }

    #[test]
    fn confidence_parse() {
        assert_eq!(Confidence::parse("High").unwrap(), Confidence::High);
        assert_eq!(Confidence::parse("medium").unwrap(), Confidence::Medium);
        assert!(Confidence::parse("Unknown").is_err());
    }

    #[test]
    fn convert_single_resource() {
        let resolved =
            convert_resource(&resource(47.61, -122.33, "Seattle, WA", "High")).unwrap();

        assert_eq!(resolved.location.lat(), 47.61);
        assert_eq!(resolved.location.address(), Some("Seattle, WA"));
        assert_eq!(resolved.confidence, Confidence::High);
    }

    #[test]
    fn malformed_coordinates_rejected() {
        let mut bad = resource(47.61, -122.33, "Seattle, WA", "High");
        bad.point.coordinates = vec![47.61];

        assert!(matches!(
            convert_resource(&bad),
            Err(GeocodeError::BadShape(_))
        ));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let bad = resource(123.0, 0.0, "Nowhere", "High");
        assert!(matches!(
            convert_resource(&bad),
            Err(GeocodeError::BadShape(_))
        ));
    }

    #[test]
    fn candidates_sorted_by_confidence() {
        let resp = response(vec![
            resource(1.0, 1.0, "low match", "Low"),
            resource(2.0, 2.0, "high match", "High"),
            resource(3.0, 3.0, "medium match", "Medium"),
        ]);

        let candidates = convert_response(&resp, "somewhere").unwrap();
        let addresses: Vec<_> = candidates
            .iter()
            .map(|c| c.location.address().unwrap())
            .collect();

        assert_eq!(addresses, vec!["high match", "medium match", "low match"]);
    }

    #[test]
    fn empty_response_is_no_matches() {
        let resp = response(vec![]);
        let err = convert_response(&resp, "xyzzy").unwrap_err();

        assert!(matches!(err, GeocodeError::NoMatches { query } if query == "xyzzy"));
    }
}
