use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: any origin)
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(allowed_origins) => cors.allow_origins(parse_origins(&allowed_origins)),
        Err(_) => cors,
    }
}

fn parse_origins(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}
