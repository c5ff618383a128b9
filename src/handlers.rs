// HTTP entry points of the certificate service. main.rs wires them into the
// hyper server; the integration tests call them the same way.

use crate::application::CertificateResolver;
use crate::domain::{CertificateRoute, DisplayRecord};
use crate::infrastructure::page::CertificatePage;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Method, Request, Response, StatusCode};
use log::{error, info};
use std::convert::Infallible;
use std::sync::Arc;

const API_PREFIX: &str = "/api";

fn respond(status: StatusCode, content_type: &'static str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Route a request to the certificate page, the JSON API, or a 404.
pub async fn handle_request(
    resolver: Arc<CertificateResolver>,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let path = req.uri().path().to_string();
    info!("{} {}", req.method(), path);

    if req.method() != Method::GET {
        return Ok(respond(
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain; charset=utf-8",
            "Method Not Allowed".to_string(),
        ));
    }

    if let Some(route) = path
        .strip_prefix(API_PREFIX)
        .and_then(CertificateRoute::parse)
    {
        return Ok(handle_api(&resolver, &route).await);
    }

    match CertificateRoute::parse(&path) {
        Some(route) => Ok(handle_page(&resolver, &route).await),
        None => Ok(respond(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            "Not Found".to_string(),
        )),
    }
}

/// Render the certificate page.
///
/// A failed resolution still renders the page, with placeholder values and
/// a dialog carrying the error message.
pub async fn handle_page(resolver: &CertificateResolver, route: &CertificateRoute) -> Response<Body> {
    let sample = route.is_sample();

    match resolver.resolve(route).await {
        Ok(record) => {
            let page = CertificatePage {
                record: &record,
                sample,
                alert: None,
            };
            respond(StatusCode::OK, "text/html; charset=utf-8", page.render())
        }
        Err(e) => {
            error!("Certificate resolution failed: {}", e);
            let record = DisplayRecord::placeholder();
            let message = e.to_string();
            let page = CertificatePage {
                record: &record,
                sample,
                alert: Some(&message),
            };
            respond(e.status_code(), "text/html; charset=utf-8", page.render())
        }
    }
}

/// Same resolution as [`handle_page`], answered as JSON.
pub async fn handle_api(resolver: &CertificateResolver, route: &CertificateRoute) -> Response<Body> {
    let (status, body) = match resolver.resolve(route).await {
        Ok(record) => (StatusCode::OK, serde_json::to_string(&record)),
        Err(e) => {
            error!("Certificate resolution failed: {}", e);
            (
                e.status_code(),
                serde_json::to_string(&serde_json::json!({ "error": e.to_string() })),
            )
        }
    };

    match body {
        Ok(body) => respond(status, "application/json", body),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "application/json",
                r#"{"error":"serialization failed"}"#.to_string(),
            )
        }
    }
}
