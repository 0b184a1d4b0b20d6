use crate::{
    dto::{WhoisRecordResponse, WhoisRequest},
    errors::into_response_parts,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument, warn};

/// Raw WHOIS text for `{"host": ..., "servers": [...]}`.
#[instrument(skip(state, body), name = "api_lookup_whois")]
pub async fn lookup_whois(
    State(state): State<AppState>,
    body: Result<Json<WhoisRequest>, JsonRejection>,
) -> Result<String, (StatusCode, String)> {
    let Json(request) = body.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    match state.lookup.execute(&request.host, &request.servers).await {
        Ok(resolution) => {
            debug!(host = %request.host, cache_hit = resolution.cache_hit, "WHOIS lookup served");
            Ok(resolution.raw.to_string())
        }
        Err(e) => {
            warn!(host = %request.host, error = %e, "WHOIS lookup failed");
            Err(into_response_parts(e))
        }
    }
}

#[instrument(skip(state), name = "api_get_whois_record")]
pub async fn get_whois_record(
    State(state): State<AppState>,
    Path(host): Path<String>,
) -> Result<Json<WhoisRecordResponse>, (StatusCode, String)> {
    match state.lookup.execute_record(&host, &[]).await {
        Ok(lookup) => Ok(Json(lookup.into())),
        Err(e) => {
            warn!(host = %host, error = %e, "WHOIS record lookup failed");
            Err(into_response_parts(e))
        }
    }
}
