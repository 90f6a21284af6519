//! HTTP server implementation

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::rag::RagService;
use crate::suggestions::SuggestionEngine;
use crate::Result;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

impl AppState {
    /// Load the knowledge base. A load failure is logged and the state is
    /// built in degraded mode instead of failing startup.
    pub fn from_config(config: &AppConfig) -> Self {
        let service = match RagService::from_config(config) {
            Ok(service) => Some(Arc::new(service)),
            Err(e) => {
                error!("❌ Error loading knowledge base: {}", e);
                None
            }
        };
        Self::with_service(service, config)
    }

    pub fn with_service(service: Option<Arc<RagService>>, config: &AppConfig) -> Self {
        Self {
            service,
            suggestions: Arc::new(SuggestionEngine::new(config.suggestions.clone())),
            response: Arc::new(config.response.clone()),
        }
    }
}

/// Assemble the application router with its middleware stack
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new().nest("/api", routes::api_routes(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
    );

    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting FactRAG API server...");

    let state = AppState::from_config(config);
    if let Some(service) = &state.service {
        info!(
            "📚 Knowledge base loaded: {} facts in {} sections",
            service.sentence_count(),
            service.section_count()
        );
    } else {
        info!("⚠️  Knowledge base not loaded - chat will answer with the unavailable message");
    }

    let app = build_app(state, enable_cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health          - Health check");
    info!("  POST /api/chat            - Ask a question");
    info!("  GET  /api/suggestions     - Conversation starters");
    info!("  POST /api/search          - Ranked facts for a query");
    info!("  GET  /api/sections        - List sections");
    info!("  GET  /api/sections/:name  - Facts of one section");

    axum::serve(listener, app).await?;

    Ok(())
}
