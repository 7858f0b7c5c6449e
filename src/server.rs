use crate::completion::CompletionClient;
use crate::config::Config;
use crate::error::ProcessError;
use crate::ocr::{is_image_content_type, OcrRequest, OCR_PROMPT};
use crate::openai::OpenAiClient;
use axum::{
    body::Body,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    routing::post,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// Build the router serving `/process`
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/process",
            post(handle_process).fallback(handle_method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = OpenAiClient::from_config(&config)?;
    let addr = config.bind_addr();

    tracing::info!(
        "Using model {} via {}",
        client.model(),
        client.endpoint()
    );

    let app = create_app(AppState::new(Arc::new(client), config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Handle OCR requests
///
/// The completion call lives inside this future, so a client that goes away
/// mid-request drops it and aborts the outbound call with it.
async fn handle_process(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<String, ProcessError> {
    let start = Instant::now();

    // Header values may carry obs-text, so match on raw bytes
    let content_type = headers
        .get(CONTENT_TYPE)
        .map(|value| value.as_bytes())
        .unwrap_or_default();
    if !is_image_content_type(content_type) {
        return Err(ProcessError::InvalidContentType);
    }

    let data = axum::body::to_bytes(body, state.config.max_image_size)
        .await
        .map_err(ProcessError::ReadBody)?;
    let size = data.len();

    let request = OcrRequest::new(String::from_utf8_lossy(content_type), data);
    tracing::debug!("Received {} bytes of {}", size, request.content_type());

    let text = state
        .client
        .complete(OCR_PROMPT, &request.data_uri())
        .await?;

    tracing::info!(
        "Successfully processed image in {}ms, text length: {}",
        start.elapsed().as_millis(),
        text.len()
    );

    Ok(text)
}

async fn handle_method_not_allowed() -> ProcessError {
    ProcessError::MethodNotAllowed
}
