//! HTTP handlers and the glue that turns service errors into JSON envelopes.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod client;

pub const NOT_FOUND_ERROR: &str = "Resource not found";
pub const VALIDATION_ERROR: &str = "Validation error";
pub const BAD_REQUEST_ERROR: &str = "Bad request";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Builds the JSON error envelope for a failed service call on `path`.
pub fn error_response(err: ServiceError, path: &str) -> HttpResponse {
    let description = err.to_string();
    let (status, body) = match err {
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(404, NOT_FOUND_ERROR, description, path),
        ),
        ServiceError::Validation(messages) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(400, VALIDATION_ERROR, description, path)
                .with_errors(messages),
        ),
        ServiceError::TypeConstraint(message) | ServiceError::BadRequest(message) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(400, BAD_REQUEST_ERROR, message, path),
        ),
        ServiceError::Internal(message) => {
            log::error!("Request to {path} failed: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(500, INTERNAL_ERROR, "Unexpected error", path),
            )
        }
    };

    HttpResponse::build(status).json(body)
}

fn bad_request(err: impl std::fmt::Display, req: &HttpRequest) -> HttpResponse {
    error_response(ServiceError::BadRequest(err.to_string()), req.path())
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err, req);
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err, req);
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err, req);
    InternalError::from_response(err, response).into()
}

/// Registers the client routes and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(client::list_clients)
        .service(client::find_by_income)
        .service(client::find_by_income_greater_than)
        .service(client::find_by_cpf)
        .service(client::show_client)
        .service(client::create_client)
        .service(client::update_client)
        .service(client::delete_client);
}
