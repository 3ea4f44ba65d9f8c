//! HTTP routes served by the Actix application.

use actix_web::middleware::DefaultHeaders;

pub mod graphql;

/// Baseline security headers attached to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
}
