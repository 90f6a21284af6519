//! API request handlers

use std::sync::Arc;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::api::types::*;
use crate::config::ResponseConfig;
use crate::errors::FactRagError;
use crate::rag::RagService;
use crate::suggestions::SuggestionEngine;

/// Shared application state.
///
/// `service` is `None` when the knowledge base failed to load; the server
/// still answers, with the unavailable message.
#[derive(Clone)]
pub struct AppState {
    pub service: Option<Arc<RagService>>,
    pub suggestions: Arc<SuggestionEngine>,
    pub response: Arc<ResponseConfig>,
}

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let (knowledge_pieces, sections) = state
        .service
        .as_ref()
        .map_or((0, 0), |s| (s.sentence_count(), s.section_count()));

    Json(ApiResponse::success(HealthResponse {
        status: if state.service.is_some() {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        kb_loaded: state.service.is_some(),
        knowledge_pieces,
        sections,
    }))
}

/// Conversation starters
pub async fn suggestions(State(state): State<AppState>) -> Json<ApiResponse<SuggestionsResponse>> {
    Json(ApiResponse::success(SuggestionsResponse {
        suggestions: state.suggestions.starters(),
    }))
}

/// Answer a chat message
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<ChatResponse> {
    info!("POST /api/chat ({} chars)", request.message.chars().count());

    let Some(service) = state.service.as_ref() else {
        warn!("Chat request while knowledge base is unavailable");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error_with_data(
                state.response.unavailable_message.clone(),
                ChatResponse {
                    response: state.response.unavailable_message.clone(),
                    suggestions: Vec::new(),
                    confidence: 0.0,
                    answered: false,
                },
            )),
        );
    };

    match service.respond(&request.message) {
        Ok(reply) => (
            StatusCode::OK,
            Json(ApiResponse::success(ChatResponse {
                response: reply.response,
                suggestions: reply.suggestions,
                confidence: reply.confidence,
                answered: reply.answered,
            })),
        ),
        Err(FactRagError::InvalidInput(message)) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
        }
        Err(e) => {
            error!("Error in chat endpoint: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "An error occurred while processing your question. Please try again.",
                )),
            )
        }
    }
}

/// Ranked facts for a query
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<SearchResponse> {
    info!("POST /api/search: {}", request.query);

    let Some(service) = state.service.as_ref() else {
        return unavailable(&state);
    };

    match service.search(&request.query, request.limit) {
        Ok(results) => (
            StatusCode::OK,
            Json(ApiResponse::success(SearchResponse {
                query: request.query,
                results,
            })),
        ),
        Err(e) => {
            error!("Error searching facts: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        }
    }
}

/// Section names with fact counts
pub async fn list_sections(State(state): State<AppState>) -> ApiResult<Vec<SectionSummary>> {
    let Some(service) = state.service.as_ref() else {
        return unavailable(&state);
    };

    let sections = service
        .corpus()
        .sections()
        .iter()
        .map(|section| SectionSummary {
            name: section.name.clone(),
            facts: section.sentences.len(),
        })
        .collect();

    (StatusCode::OK, Json(ApiResponse::success(sections)))
}

/// All facts of one section
pub async fn get_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<SectionResponse> {
    info!("GET /api/sections/{}", name);

    let Some(service) = state.service.as_ref() else {
        return unavailable(&state);
    };

    match service.section(&name) {
        Ok(facts) => (
            StatusCode::OK,
            Json(ApiResponse::success(SectionResponse {
                name,
                facts: facts.to_vec(),
            })),
        ),
        Err(e) => (StatusCode::NOT_FOUND, Json(ApiResponse::error(e.to_string()))),
    }
}

fn unavailable<T>(state: &AppState) -> ApiResult<T> {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::error(state.response.unavailable_message.clone())),
    )
}
