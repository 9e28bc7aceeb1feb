//! # HTTP Server
//!
//! Builds the trivia store, catalog and quiz selector from a
//! [`ServerConfig`] and serves them with axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::{self, Next},
    response::Response,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::Catalog;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::quiz::QuizSelector;
use crate::storage::{MemoryStore, SeedData, StoreError, TriviaStore};

use super::config::{AllowedOrigins, ConfigError, ServerConfig};
use super::errors::ApiError;
use super::observability_routes::observability_routes;
use super::trivia_routes::{trivia_routes, TriviaState};

/// Failures while assembling the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// HTTP server for the trivia API
pub struct TriviaServer {
    config: ServerConfig,
    router: Router,
}

impl TriviaServer {
    /// Seed the store from config and build the server
    pub fn from_config(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let seed = match &config.seed_path {
            Some(path) => SeedData::load(path)?,
            None => SeedData::default_dataset()?,
        };
        log_event_with_fields(
            Event::StoreSeeded,
            &[
                ("categories", &seed.categories.len().to_string()),
                ("questions", &seed.questions.len().to_string()),
            ],
        );

        let store: Arc<dyn TriviaStore> = Arc::new(MemoryStore::with_seed(seed)?);
        Self::with_store(config, store)
    }

    /// Build the server over an existing store
    pub fn with_store(
        config: ServerConfig,
        store: Arc<dyn TriviaStore>,
    ) -> Result<Self, ServerError> {
        let origins = config.allowed_origins()?;
        let catalog = Catalog::new(store)
            .with_page_size(config.questions_per_page)
            .with_policy(config.validation);
        let quiz = match config.quiz_seed {
            Some(seed) => QuizSelector::seeded(seed),
            None => QuizSelector::from_entropy(),
        };

        let state = Arc::new(TriviaState::new(catalog, quiz));
        let router = Self::build_router(origins, state);
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(origins: AllowedOrigins, state: Arc<TriviaState>) -> Router {
        let cors = Self::cors_layer(origins);
        let metrics = Arc::clone(&state.metrics);

        Router::new()
            .merge(trivia_routes(state))
            .merge(observability_routes(Arc::clone(&metrics)))
            .fallback(unmatched_route_handler)
            .layer(middleware::from_fn_with_state(metrics, count_outcome))
            .layer(cors)
    }

    fn cors_layer(origins: AllowedOrigins) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::PUT,
                Method::POST,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        match origins {
            AllowedOrigins::Any => layer.allow_origin(Any),
            AllowedOrigins::List(list) => layer.allow_origin(AllowOrigin::list(list)),
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process stops
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(
            Event::ServerStart,
            &[
                ("addr", &listener.local_addr()?.to_string()),
                ("version", env!("CARGO_PKG_VERSION")),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn unmatched_route_handler(request: Request) -> ApiError {
    ApiError::NotFound(format!("no route for {} {}", request.method(), request.uri().path()))
}

async fn count_outcome(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.status().is_success() {
        metrics.increment_requests_served();
    } else {
        metrics.increment_requests_failed();
    }
    response
}
