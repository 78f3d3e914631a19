//! Axum response conversions
//!
//! Lets handlers return a [`PageResult`] or an [`Error`] directly:
//!
//! ```rust,ignore
//! use axum::extract::{Query, State};
//! use query_pager::{PageQuery, PageResult, QueryPager, Result};
//!
//! async fn list_products(
//!     State(state): State<AppState>,
//!     Query(query): Query<PageQuery>,
//! ) -> Result<PageResult<Product>> {
//!     let request = query.into_request(state.pager.config());
//!     state.pager.paginate(state.products.iter().cloned(), &request)
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::query::PageResult;

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error code
    pub code: String,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            status: status.as_u16(),
        }
    }
}

impl Error {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            // Don't expose configuration internals to clients
            tracing::error!("Pager configuration error: {}", self);
            "Pagination is misconfigured".to_string()
        };

        let body = ErrorResponse::new(status, self.code(), message);
        (status, Json(body)).into_response()
    }
}

impl<R: Serialize> IntoResponse for PageResult<R> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
