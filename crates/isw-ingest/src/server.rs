//! HTTP endpoint

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::fetch::HttpReportSource;
use crate::pipeline::{IngestRequest, IngestResponse, Ingestor};
use crate::storage::LocalStore;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use isw_report::ReportParser;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Ingestion failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Ingestion rejected");
        }
        (status, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn ingest_handler(
    State(ingestor): State<Arc<Ingestor>>,
    Json(request): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, IngestError> {
    ingestor.ingest(&request).await.map(Json)
}

/// Router exposing `POST /` and `GET /health`
pub fn router(ingestor: Arc<Ingestor>) -> Router {
    Router::new()
        .route("/", post(ingest_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(ingestor)
}

/// Ingestor wired to the HTTP source and local store described by `config`
pub fn build_ingestor(config: &IngestConfig) -> crate::error::Result<Ingestor> {
    let source = HttpReportSource::new(config)?;
    let store = LocalStore::new(&config.storage_root);
    Ok(Ingestor::new(
        Arc::new(source),
        Arc::new(store),
        ReportParser::new(config.parser.clone()),
    ))
}

/// Bind and serve until the process is stopped
pub async fn serve(config: IngestConfig) -> anyhow::Result<()> {
    let app = router(Arc::new(build_ingestor(&config)?));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!(
        addr = %config.listen_addr(),
        storage_root = %config.storage_root.display(),
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
