// ABOUTME: Unified error handling system with standard error codes and HTTP status mapping
// ABOUTME: Provides AppError, AppResult, and an optional axum IntoResponse implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftplan Project

//! Unified error handling for Liftplan.
//!
//! The normalizer itself never fails (coercion is total and dangling foreign
//! keys are silently orphaned); errors exist for the stateful edges of the
//! system: transport, durable storage, configuration, and serialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or out-of-contract input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A referenced resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// An upstream service (plan fetch, sheet backend) failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Invalid or missing configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Durable storage read or write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Payload could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError => 502,
            Self::ConfigError
            | Self::StorageError
            | Self::SerializationError
            | Self::InternalError => 500,
        }
    }

    /// Stable string form of the code, as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Application error carrying a code and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error classification used for HTTP mapping and logging
    pub code: ErrorCode,
    /// Human-readable description, safe to surface to the user
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Malformed or out-of-contract input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A referenced resource does not exist
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// An upstream service failed
    pub fn external(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Invalid or missing configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Durable storage read or write failed
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Payload could not be serialized or deserialized
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use serde_json::json;

    use super::AppError;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.code.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = Json(json!({
                "error": {
                    "code": self.code.as_str(),
                    "message": self.message,
                }
            }));
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_transport_and_internal() {
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
        assert_eq!(ErrorCode::StorageError.http_status(), 500);
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::external("plan fetch failed");
        assert_eq!(err.to_string(), "plan fetch failed");
    }
}
