//! Candidate route construction and ranking.
//!
//! The recommendation service proper is an estimator: it builds candidate
//! multi-modal routes from a straight-line distance estimate, configured
//! speeds, and the operators' fare schedules, then ranks them by the
//! requested optimization preference and classifies them relative to each
//! other.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{
    Cost, Location, RecommendationRequest, RecommendationResponse, Route, RouteId, RouteSegment,
    TravelMode,
};

use super::classify::classify_totals;
use super::config::RecommendConfig;
use super::error::RecommendError;
use super::fares::{FareSchedule, LYFT, UBER};

/// Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile.
const KM_PER_MILE: f64 = 1.609344;

/// Great-circle distance between two locations in kilometers.
pub fn haversine_km(from: &Location, to: &Location) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_long = (to.long() - from.long()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_long / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Travel time for a distance at a speed, rounded up to whole minutes.
fn travel_duration(distance_km: f64, speed_kmh: f64) -> Duration {
    if distance_km <= 0.0 {
        return Duration::zero();
    }
    let minutes = (distance_km / speed_kmh * 60.0).ceil() as i64;
    Duration::minutes(minutes.max(1))
}

/// Builds, ranks, and classifies candidate routes.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommendConfig,
}

impl Recommender {
    /// Create a recommender with the given configuration.
    pub fn new(config: RecommendConfig) -> Self {
        Self { config }
    }

    /// Build recommendations for a trip departing at `departure`.
    ///
    /// Routes come back ranked per the request's preference (duration for
    /// `Time`, total cost for `Cost`, the other dimension as tie-break),
    /// with classification badges computed over the returned set.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        departure: NaiveDateTime,
    ) -> Result<RecommendationResponse, RecommendError> {
        let distance_km = haversine_km(&request.start, &request.dest);
        let destination = request
            .dest
            .address()
            .unwrap_or("your destination")
            .to_string();

        debug!(
            distance_km,
            optimise_for = %request.optimise_for,
            "building candidate routes"
        );

        let mut candidates: Vec<Vec<RouteSegment>> = Vec::new();

        if distance_km <= self.config.max_walk_only_km {
            candidates.push(self.walk_candidate(distance_km, &destination)?);
        }

        if distance_km > 2.0 * self.config.access_walk_km {
            candidates.push(self.transit_candidate(distance_km, &destination)?);
        }

        for schedule in [&LYFT, &UBER] {
            candidates.push(self.rideshare_candidate(distance_km, &destination, schedule)?);
        }

        if candidates.is_empty() {
            return Err(RecommendError::NoRoutes);
        }

        // Rank by the requested preference, the other dimension as tie-break
        let mut ranked: Vec<(Vec<RouteSegment>, Duration, Cost)> = candidates
            .into_iter()
            .map(|segments| {
                let duration = segments
                    .iter()
                    .fold(Duration::zero(), |acc, s| acc + s.duration());
                let cost = segments.iter().filter_map(|s| s.cost()).sum();
                (segments, duration, cost)
            })
            .collect();

        use crate::domain::OptimizationPreference;
        match request.optimise_for {
            OptimizationPreference::Time => ranked.sort_by_key(|(_, d, c)| (*d, *c)),
            OptimizationPreference::Cost => ranked.sort_by_key(|(_, d, c)| (*c, *d)),
        }
        ranked.truncate(self.config.max_results);

        let totals: Vec<(Duration, Cost)> = ranked.iter().map(|(_, d, c)| (*d, *c)).collect();
        let badges = classify_totals(&totals);

        let routes = ranked
            .into_iter()
            .zip(badges)
            .enumerate()
            .map(|(i, ((segments, _, _), badges))| {
                Route::new(
                    RouteId::new(format!("option-{}", i + 1)),
                    segments,
                    departure,
                    badges,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecommendationResponse::new(routes)?)
    }

    /// A single walking leg, for trips short enough to walk outright.
    fn walk_candidate(
        &self,
        distance_km: f64,
        destination: &str,
    ) -> Result<Vec<RouteSegment>, RecommendError> {
        let segment = RouteSegment::new(
            TravelMode::Walk,
            travel_duration(distance_km, self.config.walk_speed_kmh),
            None,
            format!("Walk to {destination}"),
        )?;
        Ok(vec![segment])
    }

    /// Walk to a stop, wait, ride, walk the last stretch.
    fn transit_candidate(
        &self,
        distance_km: f64,
        destination: &str,
    ) -> Result<Vec<RouteSegment>, RecommendError> {
        let access_km = self.config.access_walk_km;
        let ride_km = distance_km - 2.0 * access_km;
        let access_duration = travel_duration(access_km, self.config.walk_speed_kmh);

        Ok(vec![
            RouteSegment::new(
                TravelMode::Walk,
                access_duration,
                None,
                "Walk to the nearest bus stop".to_string(),
            )?,
            RouteSegment::new(
                TravelMode::Wait,
                self.config.transit_wait(),
                None,
                "Wait for the next bus".to_string(),
            )?,
            RouteSegment::new(
                TravelMode::Transit,
                travel_duration(ride_km, self.config.transit_speed_kmh),
                Some(self.config.transit_fare),
                format!("Take the bus toward {destination}"),
            )?,
            RouteSegment::new(
                TravelMode::Walk,
                access_duration,
                None,
                format!("Walk to {destination}"),
            )?,
        ])
    }

    /// Door-to-door ride with one operator's fare schedule.
    fn rideshare_candidate(
        &self,
        distance_km: f64,
        destination: &str,
        schedule: &FareSchedule,
    ) -> Result<Vec<RouteSegment>, RecommendError> {
        let ride_duration = travel_duration(distance_km, self.config.rideshare_speed_kmh);
        let fare = schedule.estimate(distance_km / KM_PER_MILE, ride_duration);

        Ok(vec![
            RouteSegment::new(
                TravelMode::Wait,
                self.config.pickup_wait(),
                None,
                format!("Wait for your {} pickup", schedule.operator),
            )?,
            RouteSegment::new(
                TravelMode::Rideshare,
                ride_duration,
                Some(fare),
                format!("Take a rideshare ({}) to {destination}", schedule.operator),
            )?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OptimizationPreference;
    use chrono::NaiveDate;

    fn depart() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 7, 23)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap()
    }

    fn loc(lat: f64, long: f64, address: &str) -> Location {
        Location::new(lat, long).unwrap().with_address(address)
    }

    fn request(
        start: Location,
        dest: Location,
        optimise_for: OptimizationPreference,
    ) -> RecommendationRequest {
        RecommendationRequest {
            start,
            dest,
            optimise_for,
        }
    }

    /// Space Needle to Pike Place Market, roughly a kilometer.
    fn short_trip(pref: OptimizationPreference) -> RecommendationRequest {
        request(
            loc(47.6205, -122.3493, "Space Needle, Seattle, WA"),
            loc(47.6097, -122.3422, "Pike Place Market, Seattle, WA"),
            pref,
        )
    }

    /// Seattle to Bellevue, roughly ten kilometers.
    fn cross_lake_trip(pref: OptimizationPreference) -> RecommendationRequest {
        request(
            loc(47.6062, -122.3321, "Seattle, WA"),
            loc(47.6101, -122.2015, "Bellevue, WA"),
            pref,
        )
    }

    #[test]
    fn haversine_known_distance() {
        // Seattle to Portland is about 233 km great-circle
        let seattle = loc(47.6062, -122.3321, "Seattle");
        let portland = loc(45.5152, -122.6784, "Portland");

        let d = haversine_km(&seattle, &portland);
        assert!((230.0..240.0).contains(&d), "got {d} km");
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let here = loc(47.6, -122.3, "here");
        assert!(haversine_km(&here, &here).abs() < 1e-9);
    }

    #[test]
    fn travel_duration_rounds_up() {
        // 1 km at 4.8 km/h is 12.5 minutes, rounded up to 13
        assert_eq!(travel_duration(1.0, 4.8), Duration::minutes(13));
        assert_eq!(travel_duration(0.0, 4.8), Duration::zero());
        // Tiny distances still take a minute
        assert_eq!(travel_duration(0.01, 40.0), Duration::minutes(1));
    }

    #[test]
    fn short_trip_includes_walk_only_route() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&short_trip(OptimizationPreference::Cost), depart())
            .unwrap();

        let walk_only = response.routes().iter().find(|r| {
            r.segments().len() == 1 && r.segments()[0].mode() == TravelMode::Walk
        });
        let walk_only = walk_only.expect("short trip should have a walk-only route");

        assert_eq!(walk_only.total_cost(), Cost::ZERO);
        // A free route is the cheapest of the set
        assert!(walk_only.badges().cheapest);
    }

    #[test]
    fn long_trip_has_no_walk_only_route() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&cross_lake_trip(OptimizationPreference::Time), depart())
            .unwrap();

        assert!(response.routes().iter().all(|r| r.segments().len() > 1));
    }

    #[test]
    fn transit_candidate_shape() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&cross_lake_trip(OptimizationPreference::Cost), depart())
            .unwrap();

        let transit = response
            .routes()
            .iter()
            .find(|r| r.segments().iter().any(|s| s.mode() == TravelMode::Transit))
            .expect("cross-lake trip should have a transit route");

        let modes: Vec<TravelMode> = transit.segments().iter().map(|s| s.mode()).collect();
        assert_eq!(
            modes,
            vec![
                TravelMode::Walk,
                TravelMode::Wait,
                TravelMode::Transit,
                TravelMode::Walk
            ]
        );
        assert_eq!(transit.total_cost(), Cost::from_dollars(2.75));
    }

    #[test]
    fn rideshare_fare_matches_schedule() {
        let recommender = Recommender::default();
        let req = cross_lake_trip(OptimizationPreference::Time);
        let response = recommender.recommend(&req, depart()).unwrap();

        let uber = response
            .routes()
            .iter()
            .find(|r| {
                r.segments()
                    .iter()
                    .any(|s| s.instruction().contains("Uber") && s.mode() == TravelMode::Rideshare)
            })
            .expect("should have an Uber route");

        let distance_km = haversine_km(&req.start, &req.dest);
        let ride_duration = travel_duration(distance_km, recommender.config.rideshare_speed_kmh);
        let expected = UBER.estimate(distance_km / KM_PER_MILE, ride_duration);

        assert_eq!(uber.total_cost(), expected);
    }

    #[test]
    fn time_preference_ranks_by_duration() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&cross_lake_trip(OptimizationPreference::Time), depart())
            .unwrap();

        let durations: Vec<Duration> = response
            .routes()
            .iter()
            .map(|r| r.total_duration())
            .collect();

        assert!(durations.windows(2).all(|w| w[0] <= w[1]));
        assert!(response.routes()[0].badges().quickest);
    }

    #[test]
    fn cost_preference_ranks_by_cost() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&cross_lake_trip(OptimizationPreference::Cost), depart())
            .unwrap();

        let costs: Vec<Cost> = response.routes().iter().map(|r| r.total_cost()).collect();

        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert!(response.routes()[0].badges().cheapest);
    }

    #[test]
    fn routes_start_at_departure_with_sequential_ids() {
        let recommender = Recommender::default();
        let response = recommender
            .recommend(&short_trip(OptimizationPreference::Time), depart())
            .unwrap();

        for (i, route) in response.routes().iter().enumerate() {
            assert_eq!(route.start_time(), depart());
            assert_eq!(route.end_time(), depart() + route.total_duration());
            assert_eq!(route.id().as_str(), format!("option-{}", i + 1));
        }
    }

    #[test]
    fn zero_distance_trip_still_recommends() {
        let recommender = Recommender::default();
        let here = loc(47.6, -122.3, "here");
        let response = recommender
            .recommend(
                &request(here.clone(), here, OptimizationPreference::Time),
                depart(),
            )
            .unwrap();

        assert!(!response.routes().is_empty());
    }
}
