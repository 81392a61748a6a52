//! REST message types, constants and default handlers

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

pub const API_HEALTH_PATH: &str = "/health";
pub const CONTENT_TYPE_HEADER_KEY: &str = "Content-Type";
pub const ACCEPT_HEADER_KEY: &str = "Accept";
pub const AUTHORIZATION_HEADER_KEY: &str = "Authorization";
pub const APPLICATION_JSON_MIME_TYPE: &str = "application/json";
pub const TEXT_PLAIN_MIME_TYPE: &str = "text/plain";
pub const FORM_URLENCODED_MIME_TYPE: &str = "application/x-www-form-urlencoded";

const PATH_NOT_FOUND_MSG: &str = "Path Not Found";

/// Plain message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestMsg {
    pub message: String,
}

impl RestMsg {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Plain error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestErrMsg {
    pub error: String,
}

impl RestErrMsg {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health endpoint handler
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(RestMsg::new(
        StatusCode::OK.canonical_reason().unwrap_or_default(),
    ))
}

/// Handler for requests on paths that are not configured
pub async fn no_route() -> HttpResponse {
    HttpResponse::NotFound().json(RestMsg::new(PATH_NOT_FOUND_MSG))
}

/// Handler for known paths hit with a method that is not configured.
/// Mount it as the default service of a resource.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(RestMsg::new(
        StatusCode::METHOD_NOT_ALLOWED
            .canonical_reason()
            .unwrap_or_default(),
    ))
}

/// Register the health route and the no-route fallback on an app
pub fn configure_defaults(cfg: &mut web::ServiceConfig) {
    cfg.route(API_HEALTH_PATH, web::get().to(health))
        .default_service(web::route().to(no_route));
}
