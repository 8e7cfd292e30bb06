#![deny(missing_docs)]

//! # Books API
//!
//! A serverless HTTP API for books stored in an Amazon DynamoDB table.
//!
//! ## Overview
//!
//! Each request is routed by its method to exactly one storage call:
//! - `GET` fetches a book by its ISBN (`pk`) and author (`sk`)
//! - `POST` creates a book with its counter seeded to one
//! - `PATCH` atomically adds one to a book's counter
//!
//! Any other method is answered with `405 Method Not Allowed`.
//!
//! ## Quick Example
//!
//! The router is independent of the Lambda runtime and of the storage backend:
//!
//! ```rust
//! use books_api::{router::Router, store::memory::MemoryBookStore};
//! use lambda_http::{Body, Request, http::{Method, StatusCode, header}};
//!
//! # async fn example() {
//! let router = Router::new(MemoryBookStore::new());
//! let mut request = Request::new(Body::from(
//!     r#"{"pk":"123-4567890123","sk":"Orwell","title":"1984"}"#,
//! ));
//! *request.method_mut() = Method::POST;
//! request
//!     .headers_mut()
//!     .insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
//! let response = router.handle(request).await;
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(
//!     response.headers()[header::LOCATION],
//!     "/books?pk=123-4567890123&sk=Orwell"
//! );
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@router`], [`mod@payload`], [`mod@validation`] - request handling
//! - [`mod@store`] - storage adapters (DynamoDB, in-memory)
//! - [`mod@common`], [`mod@read`], [`mod@write`] - typed DynamoDB requests
//! - [`mod@config`], [`mod@error`] - configuration and error types

/// The book entity and its attribute names.
pub mod book;

/// Keys, projections and conditions shared by DynamoDB requests.
pub mod common;

/// Runtime configuration.
pub mod config;

/// Error types.
pub mod error;

/// Request and response translation.
pub mod payload;

/// Read operations for retrieving items from DynamoDB tables.
pub mod read;

/// Method dispatch.
pub mod router;

/// Storage adapters.
pub mod store;

/// Field validation.
pub mod validation;

/// Write operations for modifying items in DynamoDB tables.
pub mod write;
