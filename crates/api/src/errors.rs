use axum::http::StatusCode;
use whoisd_domain::DomainError;

/// HTTP status for a failed lookup.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidDomainName(_) => StatusCode::BAD_REQUEST,
        DomainError::CannotMatchTld(_) => StatusCode::UNPROCESSABLE_ENTITY,
        e if e.is_unsupported_registry() => StatusCode::NOT_IMPLEMENTED,
        DomainError::Transport { .. } | DomainError::NoServerResponded(_) => StatusCode::BAD_GATEWAY,
        DomainError::QueryTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handler error body: the error message, which for web-only registries
/// carries the lookup URL.
pub fn into_response_parts(error: DomainError) -> (StatusCode, String) {
    (status_for(&error), error.to_string())
}
