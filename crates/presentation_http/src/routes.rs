//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Diet analysis API
        .route("/analysis/diet", post(handlers::analysis::analyze_diet))
        .route(
            "/analysis/meal-image",
            post(handlers::analysis::analyze_meal_image),
        )
        // Health risk prediction API
        .route("/predict/health", post(handlers::predict::predict_health))
        // Attach state
        .with_state(state)
}
