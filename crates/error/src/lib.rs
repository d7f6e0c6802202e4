//! # UP-NEXUS Error Infrastructure
//!
//! Error types and API error responses for the UP-NEXUS platform.

pub mod response;

pub use response::ErrorBody;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
///
/// Every request handler returns `Result<T>`; the variants map onto the
/// HTTP statuses of the public API: 401 for authentication and wrong-principal
/// failures, 400 for validation, conflicts and invalid review actions, 404 for
/// missing resources, 500 for everything unexpected.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    #[error("InvalidAction: {message}")]
    InvalidAction {
        message: String,
    },

    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },
}

impl AppError {
    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create an invalid-action error (review action outside the allowed set).
    #[inline]
    pub fn invalid_action(message: impl ToString) -> Self {
        Self::InvalidAction {
            message: message.to_string(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::Unauthorized {
                ..
            } => http::StatusCode::UNAUTHORIZED,
            AppError::Validation {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::Conflict {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::InvalidAction {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::Database {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized {
                ..
            } => "UNAUTHORIZED",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Conflict {
                ..
            } => "CONFLICT",
            AppError::InvalidAction {
                ..
            } => "INVALID_ACTION",
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized {
                message,
            }
            | AppError::Validation {
                message,
            }
            | AppError::Conflict {
                message,
            }
            | AppError::InvalidAction {
                message,
            }
            | AppError::NotFound {
                message,
            }
            | AppError::Database {
                message,
            }
            | AppError::Internal {
                message,
            }
            | AppError::Config {
                message,
            }
            | AppError::Io {
                message,
            } => message.clone(),
        }
    }

    /// The message sent over the wire. Storage and internal failures are
    /// masked so raw error text never reaches the client.
    pub fn public_message(&self) -> String {
        match self.status() {
            http::StatusCode::INTERNAL_SERVER_ERROR => "Server error".to_string(),
            _ => self.message(),
        }
    }

    /// Add context to the error message.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let message = format!("{}: {}", context.to_string(), self.message());
        match self {
            AppError::Unauthorized {
                ..
            } => {
                Self::Unauthorized {
                    message,
                }
            },
            AppError::Validation {
                ..
            } => {
                Self::Validation {
                    message,
                }
            },
            AppError::Conflict {
                ..
            } => {
                Self::Conflict {
                    message,
                }
            },
            AppError::InvalidAction {
                ..
            } => {
                Self::InvalidAction {
                    message,
                }
            },
            AppError::NotFound {
                ..
            } => {
                Self::NotFound {
                    message,
                }
            },
            AppError::Database {
                ..
            } => {
                Self::Database {
                    message,
                }
            },
            AppError::Internal {
                ..
            } => {
                Self::Internal {
                    message,
                }
            },
            AppError::Config {
                ..
            } => {
                Self::Config {
                    message,
                }
            },
            AppError::Io {
                ..
            } => {
                Self::Io {
                    message,
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            messages.join(", ")
        };

        Self::Validation {
            message,
        }
    }
}
