//! Basic authentication middleware
//!
//! Parses the `Authorization: Basic ...` header, optionally matches the
//! credentials against an account map, and stores the parsed
//! [`BasicCredentials`] in the request extensions for handlers to read.

use crate::rest::{RestErrMsg, AUTHORIZATION_HEADER_KEY};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::task::{Context, Poll};
use svckit_core::Logger;

pub const BASIC_AUTH_REQUIRED_ERR_MSG: &str = "401 unauthorized: Basic authentication is required";
pub const BASIC_AUTH_FAILED_ERR_MSG: &str = "401 unauthorized: username or password is incorrect";

const AUTHENTICATION_SUCCESS_MSG: &str = "Authenticated successfully";
const BASIC_AUTH_SCHEME: &str = "Basic";

/// Credentials parsed from the Authorization header, available to
/// handlers through the request extensions
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Basic authentication middleware
#[derive(Clone, Default)]
pub struct BasicAuth {
    accounts: Option<Arc<HashMap<String, String>>>,
}

impl BasicAuth {
    /// Only require that well-formed basic credentials are present
    pub fn required() -> Self {
        Self { accounts: None }
    }

    /// Require credentials that match an entry in the account map
    pub fn with_accounts(accounts: HashMap<String, String>) -> Self {
        Self {
            accounts: Some(Arc::new(accounts)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = BasicAuthService<S, B>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthService {
            service: Arc::new(service),
            accounts: self.accounts.clone(),
            _phantom: PhantomData,
        }))
    }
}

pub struct BasicAuthService<S, B> {
    service: Arc<S>,
    accounts: Option<Arc<HashMap<String, String>>>,
    _phantom: PhantomData<B>,
}

impl<S, B> Service<ServiceRequest> for BasicAuthService<S, B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Arc::clone(&self.service);
        let accounts = self.accounts.clone();

        Box::pin(async move {
            let credentials = match credentials_from_header(&req) {
                Some(credentials) => credentials,
                None => return Ok(unauthorized(req, BASIC_AUTH_REQUIRED_ERR_MSG)),
            };

            if let Some(accounts) = accounts {
                match accounts.get(&credentials.username) {
                    Some(stored) if *stored == credentials.password => {
                        Logger::info(AUTHENTICATION_SUCCESS_MSG);
                    }
                    _ => return Ok(unauthorized(req, BASIC_AUTH_FAILED_ERR_MSG)),
                }
            }

            req.extensions_mut().insert(credentials);

            let res = service.call(req).await?;
            Ok(res.map_into_boxed_body())
        })
    }
}

/// Parse basic credentials from the Authorization header. Any malformed
/// part (missing header, wrong scheme, bad base64, missing separator)
/// yields None.
fn credentials_from_header(req: &ServiceRequest) -> Option<BasicCredentials> {
    let header = req.headers().get(AUTHORIZATION_HEADER_KEY)?.to_str().ok()?;

    let (scheme, payload) = header.split_once(' ')?;
    if scheme != BASIC_AUTH_SCHEME {
        return None;
    }

    let decoded = STANDARD.decode(payload).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn unauthorized(req: ServiceRequest, message: &str) -> ServiceResponse<BoxBody> {
    Logger::info(message);
    req.into_response(HttpResponse::Unauthorized().json(RestErrMsg::new(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpRequest, HttpResponse};

    async fn whoami(req: HttpRequest) -> HttpResponse {
        let username = req
            .extensions()
            .get::<BasicCredentials>()
            .map(|credentials| credentials.username.clone())
            .unwrap_or_default();
        HttpResponse::Ok().json(crate::rest::RestMsg::new(username))
    }

    fn basic_header(username: &str, password: &str) -> (&'static str, String) {
        let payload = STANDARD.encode(format!("{username}:{password}"));
        (AUTHORIZATION_HEADER_KEY, format!("Basic {payload}"))
    }

    fn accounts() -> HashMap<String, String> {
        HashMap::from([("admin".to_string(), "secret123".to_string())])
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::required())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: RestErrMsg = test::read_body_json(res).await;
        assert_eq!(body.error, BASIC_AUTH_REQUIRED_ERR_MSG);
    }

    #[actix_web::test]
    async fn test_wrong_scheme_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::required())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION_HEADER_KEY, "Bearer some-token"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_base64_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::required())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION_HEADER_KEY, "Basic ====ddwf="))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_credentials_are_stored() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::required())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(basic_header("admin", "secret123"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: crate::rest::RestMsg = test::read_body_json(res).await;
        assert_eq!(body.message, "admin");
    }

    #[actix_web::test]
    async fn test_matching_account_is_accepted() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::with_accounts(accounts()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(basic_header("admin", "secret123"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_wrong_password_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::with_accounts(accounts()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(basic_header("admin", "wrong"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let body: RestErrMsg = test::read_body_json(res).await;
        assert_eq!(body.error, BASIC_AUTH_FAILED_ERR_MSG);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(BasicAuth::with_accounts(accounts()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(basic_header("intruder", "secret123"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
