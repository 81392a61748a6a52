//! Request logging middleware
//!
//! Emits one structured log line per request after the inner service
//! completes: status, method, path, query, peer address, user agent and
//! latency.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::USER_AGENT;
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::marker::PhantomData;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tracing::info;

/// Request logging middleware
#[derive(Clone, Default)]
pub struct RequestLogging;

impl RequestLogging {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLogging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = RequestLoggingService<S, B>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggingService {
            service: Arc::new(service),
            _phantom: PhantomData,
        }))
    }
}

pub struct RequestLoggingService<S, B> {
    service: Arc<S>,
    _phantom: PhantomData<B>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggingService<S, B>
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

        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let query = req.query_string().to_string();
        let peer = req
            .connection_info()
            .peer_addr()
            .unwrap_or("unknown")
            .to_string();
        let user_agent = req
            .headers()
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Box::pin(async move {
            let res = service.call(req).await?;
            let latency = start.elapsed();

            info!(
                status = res.status().as_u16(),
                method = %method,
                query = %query,
                ip = %peer,
                user_agent = %user_agent,
                latency_ms = latency.as_millis() as u64,
                "{}",
                path,
            );

            Ok(res.map_into_boxed_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{configure_defaults, RestMsg, API_HEALTH_PATH};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_requests_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(RequestLogging::new())
                .configure(configure_defaults),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(API_HEALTH_PATH)
            .insert_header((USER_AGENT, "svckit-test"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: RestMsg = test::read_body_json(res).await;
        assert_eq!(body.message, "OK");
    }

    #[actix_web::test]
    async fn test_error_responses_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(RequestLogging::new())
                .configure(configure_defaults),
        )
        .await;

        let req = test::TestRequest::get().uri("/missing").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
