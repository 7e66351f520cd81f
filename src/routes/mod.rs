//! HTTP boundary: route registration and error rendering.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::PageRequest;
use crate::services::ServiceError;

pub mod client;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct StandardError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

fn render_error(status: StatusCode, error: &str, message: String, path: &str) -> HttpResponse {
    HttpResponse::build(status).json(StandardError {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: error.to_string(),
        message,
        path: path.to_string(),
    })
}

/// Maps a service failure onto its HTTP status and error body.
pub fn error_response(err: &ServiceError, req: &HttpRequest) -> HttpResponse {
    let path = req.path();
    match err {
        ServiceError::NotFound => render_error(
            StatusCode::NOT_FOUND,
            "Resource not found",
            err.to_string(),
            path,
        ),
        ServiceError::Conflict(_) => {
            log::warn!("Rejected {path}: {err}");
            render_error(
                StatusCode::CONFLICT,
                "Database exception",
                err.to_string(),
                path,
            )
        }
        ServiceError::InvalidInput(_) => render_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            err.to_string(),
            path,
        ),
        ServiceError::Database(_) => {
            log::error!("Request to {path} failed: {err}");
            render_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "Unexpected database failure".to_string(),
                path,
            )
        }
    }
}

/// Query parameters shared by the paged listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl PageParams {
    pub fn into_request(self, default_size: usize) -> Result<PageRequest, ServiceError> {
        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(default_size),
        )?)
    }
}

/// JSON extractor settings rendering malformed payloads as [`StandardError`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let response = render_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            err.to_string(),
            req.path(),
        );
        InternalError::from_response(err, response).into()
    })
}

/// Query string settings: missing or unparseable parameters are a 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let response = render_error(
            StatusCode::BAD_REQUEST,
            "Validation error",
            err.to_string(),
            req.path(),
        );
        InternalError::from_response(err, response).into()
    })
}

/// Path settings: an id that does not fit the key type names no client.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let response = render_error(
            StatusCode::NOT_FOUND,
            "Resource not found",
            err.to_string(),
            req.path(),
        );
        InternalError::from_response(err, response).into()
    })
}

/// Registers the client routes. Fixed paths come before `/clients/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(client::list_clients_paged)
        .service(client::list_all_clients)
        .service(client::list_clients_by_income)
        .service(client::list_clients_with_children)
        .service(client::search_clients_by_name)
        .service(client::show_client)
        .service(client::create_client)
        .service(client::update_client)
        .service(client::delete_client);
}
