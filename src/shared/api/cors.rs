// src/shared/api/cors.rs
use actix_cors::Cors;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Builds the CORS middleware from `CORS_ORIGIN`.
///
/// `*` allows any origin; the request origin is echoed back so credentials
/// keep working. Anything else is a comma separated list of exact origins.
pub fn build_cors(origins: &str) -> Cors {
    let base = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    let listed: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if listed.is_empty() || listed.contains(&"*") {
        return base.allow_any_origin();
    }

    listed
        .into_iter()
        .fold(base, |cors, origin| cors.allowed_origin(origin))
}
