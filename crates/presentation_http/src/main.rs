//! BalanceLab HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{DietAnalysisService, HealthPredictionService, MealImageService};
use infrastructure::{
    AppConfig, Environment, FileNutritionCache, GeminiInferenceAdapter, HttpRiskScoringAdapter,
};
use presentation_http::{error::set_expose_internal_errors, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balancelab_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("BalanceLab v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // A missing generation API key fails every request; stop here instead
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    if config.environment == Environment::Production {
        set_expose_internal_errors(false);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.generation.default_model,
        scoring_url = %config.scoring.base_url,
        "Configuration loaded"
    );

    // Initialize adapters
    let inference_adapter = GeminiInferenceAdapter::new(config.generation.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize generation client: {e}"))?;
    let inference: Arc<dyn application::ports::InferencePort> = Arc::new(inference_adapter);

    let scoring_adapter = HttpRiskScoringAdapter::new(config.scoring.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize scoring client: {e}"))?;
    let scoring: Arc<dyn application::ports::RiskScoringPort> = Arc::new(scoring_adapter);

    let cache: Arc<dyn application::ports::NutritionCachePort> =
        Arc::new(FileNutritionCache::load(config.cache.path.clone()));

    // Initialize services
    let diet_service = DietAnalysisService::new(Arc::clone(&inference), Arc::clone(&cache));
    let prediction_service = HealthPredictionService::new(Arc::clone(&scoring));
    let meal_image_service = MealImageService::new(Arc::clone(&inference));

    let config = Arc::new(config);
    let state = AppState {
        diet_service: Arc::new(diet_service),
        prediction_service: Arc::new(prediction_service),
        meal_image_service: Arc::new(meal_image_service),
        inference,
        scoring,
        config: Arc::clone(&config),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
