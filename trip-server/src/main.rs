use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trip_server::cache::{CacheConfig, CachedGeocodeClient};
use trip_server::geocode::{GeocodeClient, GeocodeConfig};
use trip_server::recommend::{RecommendConfig, Recommender};
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MAPS_API_KEY not set. Geocoding calls will fail.");
        String::new()
    });

    // Create geocoding client
    let geocode_config = GeocodeConfig::new(&api_key);
    let geocode_client =
        GeocodeClient::new(geocode_config).expect("Failed to create geocoding client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_geocode = CachedGeocodeClient::new(geocode_client, &cache_config);

    // Create recommendation engine
    let recommender = Recommender::new(RecommendConfig::default());

    // Build app state
    let state = AppState::new(cached_geocode, recommender);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip Planner listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                     - Health check");
    println!("  GET  /place_autocomplete/:query  - Autocomplete a place query");
    println!("  GET  /point_to_address/:point    - Reverse-geocode \"lat,long\"");
    println!("  POST /recommendations            - Recommend routes between points");
    println!("  POST /plan                       - Plan a trip from place queries");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
