//! Cross-origin policy built from [`CorsConfig`].

use log::debug;
use notes_rs_config::CorsConfig;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions};

/// Seconds a browser may cache a preflight answer.
const PREFLIGHT_MAX_AGE: usize = 600;

const ALLOWED_METHODS: [Method; 7] = [
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Patch,
    Method::Delete,
    Method::Options,
];

/// Options for the CORS fairing.
///
/// A wildcard entry allows every origin; credentials are always allowed, so
/// the requesting origin is echoed back instead of `*`.
pub(crate) fn cors_options(config: &CorsConfig) -> CorsOptions {
    let allowed_origins = if config.allows_any_origin() {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(config.allowed_origins.as_slice())
    };
    debug!(
        "building cors policy (any_origin={}, origins={})",
        config.allows_any_origin(),
        config.allowed_origins.len()
    );
    CorsOptions {
        allowed_origins,
        allowed_methods: ALLOWED_METHODS.into_iter().map(From::from).collect(),
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: true,
        max_age: Some(PREFLIGHT_MAX_AGE),
        ..Default::default()
    }
}

/// Validated CORS fairing for `config`.
pub(crate) fn cors_fairing(config: &CorsConfig) -> Result<Cors, rocket_cors::Error> {
    cors_options(config).to_cors()
}
