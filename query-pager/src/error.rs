//! Error types for pagination requests

use thiserror::Error;

use crate::record::FieldType;

/// Result type alias using the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while paginating
///
/// All variants are returned synchronously to the caller of
/// [`QueryPager::paginate`](crate::QueryPager::paginate); a failed request
/// produces no page.
#[derive(Debug, Error)]
pub enum Error {
    /// Page number or page size out of range
    #[error("Invalid page parameters (page {current_page}, size {page_size}): {reason}")]
    InvalidPageParameters {
        /// Requested page number
        current_page: u32,
        /// Requested page size
        page_size: u32,
        /// What was wrong with the request
        reason: String,
    },

    /// The record type declares no field with the requested name
    #[error("Field not found: {field}")]
    FieldNotFound {
        /// The name that failed to resolve
        field: String,
    },

    /// The field exists but its type has no natural ordering
    #[error("Field '{field}' of type {field_type} cannot be sorted")]
    UnsortableField {
        /// Name of the field
        field: String,
        /// Declared type of the field
        field_type: FieldType,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl Error {
    pub(crate) fn invalid_page(current_page: u32, page_size: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPageParameters {
            current_page,
            page_size,
            reason: reason.into(),
        }
    }

    pub(crate) fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    pub(crate) fn unsortable(field: impl Into<String>, field_type: FieldType) -> Self {
        Self::UnsortableField {
            field: field.into(),
            field_type,
        }
    }

    /// Stable machine-readable code for this error
    ///
    /// # Example
    ///
    /// ```rust
    /// use query_pager::Error;
    ///
    /// let error = Error::FieldNotFound { field: "nmae".to_string() };
    /// assert_eq!(error.code(), "FIELD_NOT_FOUND");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPageParameters { .. } => "INVALID_PAGE_PARAMETERS",
            Self::FieldNotFound { .. } => "FIELD_NOT_FOUND",
            Self::UnsortableField { .. } => "UNSORTABLE_FIELD",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the error was caused by the request rather than the host
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_display() {
        let error = Error::invalid_page(0, 10, "page must be at least 1");
        let display = error.to_string();
        assert!(display.contains("page 0"));
        assert!(display.contains("size 10"));
        assert!(display.contains("page must be at least 1"));
    }

    #[test]
    fn test_field_not_found_names_field() {
        let error = Error::field_not_found("colour");
        assert_eq!(error.to_string(), "Field not found: colour");
    }

    #[test]
    fn test_unsortable_display() {
        let error = Error::unsortable("tags", FieldType::List);
        assert_eq!(error.to_string(), "Field 'tags' of type list cannot be sorted");
    }

    #[test]
    fn test_codes() {
        assert_eq!(Error::invalid_page(1, 0, "x").code(), "INVALID_PAGE_PARAMETERS");
        assert_eq!(Error::field_not_found("x").code(), "FIELD_NOT_FOUND");
        assert_eq!(Error::unsortable("x", FieldType::Json).code(), "UNSORTABLE_FIELD");
    }

    #[test]
    fn test_client_errors() {
        assert!(Error::field_not_found("x").is_client_error());
        let config = Error::from(figment::Error::from("bad value".to_string()));
        assert!(!config.is_client_error());
        assert_eq!(config.code(), "CONFIG_ERROR");
    }
}
