//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::RouteId;
use crate::geocode::GeocodeError;
use crate::recommend::RecommendError;
use crate::trip::TripError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/place_autocomplete/:query", get(place_autocomplete))
        .route("/point_to_address/:point", get(point_to_address))
        .route("/recommendations", post(recommendations))
        .route("/plan", post(plan_trip))
        .route("/routes/:id/details", post(route_details))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the trip request form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse JSON manually so we can log the body on failure.
fn parse_json<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        error!(body = %String::from_utf8_lossy(body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Departure time from an optional wire timestamp, defaulting to now.
fn departure_or_now(depart_at: Option<&str>) -> Result<NaiveDateTime, AppError> {
    match depart_at {
        Some(raw) => parse_time(raw).map_err(|e| AppError::BadRequest {
            message: format!("Invalid depart_at {raw:?}: {e}"),
        }),
        None => Ok(Local::now().naive_local()),
    }
}

/// Autocomplete a free-text place query.
///
/// Responds with a bare JSON array of candidates, best confidence first.
async fn place_autocomplete(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<PlaceResult>>, AppError> {
    let candidates = state.geocode.candidates(&query).await?;

    Ok(Json(candidates.iter().map(PlaceResult::from_resolved).collect()))
}

/// Reverse-geocode a "lat,long" point to an address.
async fn point_to_address(
    State(state): State<AppState>,
    Path(point): Path<String>,
) -> Result<Json<PlaceResult>, AppError> {
    let (lat, long) = point
        .split_once(',')
        .and_then(|(a, b)| Some((a.trim().parse().ok()?, b.trim().parse().ok()?)))
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid point {point:?}, expected \"lat,long\""),
        })?;

    let resolved = state.geocode.reverse(lat, long).await?;

    Ok(Json(PlaceResult::from_resolved(&resolved)))
}

/// Recommend routes between two already-resolved points.
async fn recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let dto: RecommendationRequestDto = parse_json(&body)?;

    let request = dto.to_domain().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let departure = departure_or_now(dto.depart_at.as_deref())?;

    let response = state.recommender.recommend(&request, departure)?;

    // A recommendation set is a created resource, so respond 201
    if accepts_html(&headers) {
        let template = RouteListTemplate {
            routes: response.routes().iter().map(RouteCardView::from_route).collect(),
            detail: DetailViewState::Closed,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok((StatusCode::CREATED, Html(html)).into_response())
    } else {
        Ok((
            StatusCode::CREATED,
            Json(RecommendationResult::from_response(&response)),
        )
            .into_response())
    }
}

/// Plan a trip from free-text queries: geocode both ends, then recommend.
async fn plan_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let dto: PlanRequestDto = parse_json(&body)?;
    let departure = departure_or_now(dto.depart_at.as_deref())?;

    let trip = state
        .planner()
        .plan(&dto.start, &dto.dest, dto.optimise_for, departure)
        .await?;

    if accepts_html(&headers) {
        let template = RouteListTemplate {
            routes: trip
                .response
                .routes()
                .iter()
                .map(RouteCardView::from_route)
                .collect(),
            detail: DetailViewState::Closed,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanResult {
            start: PlaceResult::from_resolved(&trip.start),
            dest: PlaceResult::from_resolved(&trip.dest),
            routes: trip.response.routes().iter().map(RouteResult::from_route).collect(),
        })
        .into_response())
    }
}

/// Expanded details for one route of a plan.
///
/// Routes are not stored server-side, so the request body carries the same
/// queries and preference as the original plan request and the route set is
/// recomputed (the geocode cache makes this cheap). The id must come from
/// that plan's routes.
async fn route_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let dto: PlanRequestDto = parse_json(&body)?;
    let departure = departure_or_now(dto.depart_at.as_deref())?;

    let trip = state
        .planner()
        .plan(&dto.start, &dto.dest, dto.optimise_for, departure)
        .await?;

    let route_id = RouteId::new(id);
    let route = trip
        .response
        .route(&route_id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route {:?} in this plan", route_id.as_str()),
        })?;

    if accepts_html(&headers) {
        // Re-render the whole list with this route's panel open, so the
        // open/close state lives in one place
        let template = RouteListTemplate {
            routes: trip
                .response
                .routes()
                .iter()
                .map(RouteCardView::from_route)
                .collect(),
            detail: DetailViewState::Open(route_id),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteResult::from_route(route)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Timeout,
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::Timeout => AppError::Timeout,
            GeocodeError::NoMatches { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<RecommendError> for AppError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::NoRoutes => AppError::NotFound {
                message: e.to_string(),
            },
            RecommendError::Domain(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        match e {
            TripError::LocationNotResolved { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            TripError::Geocode { ref source, .. } => match source {
                GeocodeError::Timeout => AppError::Timeout,
                _ => AppError::Upstream {
                    message: e.to_string(),
                },
            },
            TripError::Recommend(inner) => inner.into(),
            TripError::Timeout => AppError::Timeout,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "The request did not complete in time".to_string(),
            ),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
