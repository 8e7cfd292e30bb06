//! Method dispatch: one handler, one validation and one storage call per request.

use crate::{
    book::Book,
    error::ApiError,
    payload,
    store::BookStore,
    validation,
};

use lambda_http::{
    Body, Request, Response,
    http::Method,
};

/// Routes book requests to a [`BookStore`].
///
/// | Method | Storage call       | Success |
/// |--------|--------------------|---------|
/// | GET    | `fetch`            | 200     |
/// | POST   | `create`           | 201     |
/// | PATCH  | `increment_count`  | 200     |
///
/// Any other method is answered with 405.
#[derive(Clone, Debug)]
pub struct Router<S> {
    store: S,
}

impl<S: BookStore> Router<S> {
    /// Router over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The store requests are served from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Answer one request. Failures become status-text responses.
    #[tracing::instrument(name = "books_api.request", skip_all, fields(method = %request.method()))]
    pub async fn handle(&self, request: Request) -> Response<Body> {
        let response = match request.method().clone() {
            Method::GET => self.show(&request).await,
            Method::POST => self.create(request).await,
            Method::PATCH => self.increment(&request).await,
            method => Err(ApiError::MethodNotAllowed(method)),
        };
        response.unwrap_or_else(ApiError::into_response)
    }

    async fn show(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let key = match payload::query_key(request) {
            Some(key) => key,
            None => payload::parse_book(request.body())?,
        };
        validate_key(&key)?;
        let book = self
            .store
            .fetch(&key.isbn, &key.author)
            .await?
            .ok_or(ApiError::NotFound)?;
        payload::book_response(&book)
    }

    async fn create(&self, request: Request) -> Result<Response<Body>, ApiError> {
        if !payload::accepts_json(request.headers()) {
            return Err(ApiError::NotAcceptable);
        }
        let book = payload::parse_book(request.body())?;
        if !validation::validate_write_request(&book.isbn, &book.author, &book.title) {
            return Err(ApiError::InvalidFields);
        }
        self.store.create(&book).await?;
        tracing::info!(isbn = %book.isbn, author = %book.author, "book created");
        payload::created_response(&book, request.into_body())
    }

    async fn increment(&self, request: &Request) -> Result<Response<Body>, ApiError> {
        let key = payload::parse_book(request.body())?;
        validate_key(&key)?;
        let book = self
            .store
            .increment_count(&key.isbn, &key.author)
            .await?
            .ok_or(ApiError::NotFound)?;
        payload::book_response(&book)
    }
}

fn validate_key(key: &Book) -> Result<(), ApiError> {
    if validation::validate_read_request(&key.isbn, &key.author) {
        Ok(())
    } else {
        Err(ApiError::InvalidFields)
    }
}
