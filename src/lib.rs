use poem::{middleware::Tracing, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;
use sqlx::mysql::MySqlPool;

pub mod health;
pub mod logging;
pub mod utils;
pub mod welcome;

/// Assemble the route table: the welcome endpoint at `/` and the health
/// check at `/health`, with the pool injected as request data.
pub fn app(pool: MySqlPool) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (welcome::welcome_api(), health::health_checks()),
        "MySQL App",
        "1.0",
    );

    Route::new().nest("/", api_service).with(Tracing).data(pool)
}
