//! Translation between HTTP requests/responses and [`Book`] values.

use crate::{book::Book, error::ApiError};

use lambda_http::{
    Body, Request, RequestExt, Response,
    http::{HeaderMap, StatusCode, header},
};

/// The only content type a create accepts.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Parse a request body into a book.
pub fn parse_book(body: &Body) -> Result<Book, ApiError> {
    serde_json::from_slice(body.as_ref()).map_err(ApiError::UnprocessableBody)
}

/// Whether the request declares a JSON body.
///
/// Header names are case-insensitive, so `content-type` and `Content-Type` both match.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value == JSON_CONTENT_TYPE)
}

/// Book key carried by the `pk` and `sk` query parameters, when both are present.
pub fn query_key(request: &Request) -> Option<Book> {
    let parameters = request.query_string_parameters_ref()?;
    let isbn = parameters.first(crate::book::PARTITION_KEY)?;
    let author = parameters.first(crate::book::SORT_KEY)?;
    Some(Book {
        isbn: isbn.to_string(),
        author: author.to_string(),
        ..Default::default()
    })
}

/// Response with the canonical reason phrase of `status` as body.
pub fn status_response(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::from(status.canonical_reason().unwrap_or_default()));
    *response.status_mut() = status;
    response
}

/// `200 OK` with the serialized book.
pub fn book_response(book: &Book) -> Result<Response<Body>, ApiError> {
    let body = serde_json::to_string(book).map_err(ApiError::Encode)?;
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Body::from(body))?;
    Ok(response)
}

/// `201 Created` pointing at the new book and echoing the request body.
pub fn created_response(book: &Book, body: Body) -> Result<Response<Body>, ApiError> {
    let response = Response::builder()
        .status(StatusCode::CREATED)
        .header(header::LOCATION, book.location())
        .body(body)?;
    Ok(response)
}
