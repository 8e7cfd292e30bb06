//! Error types for storage, request handling and configuration.

use aws_sdk_dynamodb::{error::SdkError, operation};
use lambda_http::{
    Body, Response,
    http::{self, StatusCode},
};
use thiserror::Error;

/// Errors raised by a [`BookStore`](crate::store::BookStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// GetItem call failed
    #[error("failed to get item: {0}")]
    GetItem(#[from] SdkError<operation::get_item::GetItemError>),

    /// PutItem call failed
    #[error("failed to put item: {0}")]
    PutItem(#[from] SdkError<operation::put_item::PutItemError>),

    /// UpdateItem call failed
    #[error("failed to update item: {0}")]
    UpdateItem(#[from] SdkError<operation::update_item::UpdateItemError>),

    /// A stored item could not be read back as a book
    #[error("failed to convert item: {0}")]
    Conversion(#[from] serde_dynamo::Error),

    /// The store cannot serve requests
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons a request ends without its success response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP method has no handler
    #[error("method {0} is not allowed")]
    MethodNotAllowed(http::Method),

    /// A create request did not declare a JSON body
    #[error("content type must be application/json")]
    NotAcceptable,

    /// The body is not a JSON book
    #[error("request body is not a book: {0}")]
    UnprocessableBody(#[source] serde_json::Error),

    /// The book fields failed validation
    #[error("request fields failed validation")]
    InvalidFields,

    /// No book is stored under the requested key
    #[error("book not found")]
    NotFound,

    /// The store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The response body could not be encoded
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response could not be built
    #[error("failed to build response: {0}")]
    Http(#[from] http::Error),
}

impl ApiError {
    /// Status code reported to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Encode(_) | Self::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status-text response for this error.
    ///
    /// Server errors are logged with their detail; the caller only sees the status text.
    pub fn into_response(self) -> Response<Body> {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        crate::payload::status_response(status)
    }
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable that must not be empty is empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A variable is not a boolean
    #[error("{name} must be `true` or `false`, got `{value}`")]
    InvalidBool {
        /// Variable name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}
