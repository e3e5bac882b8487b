use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:4173,http://localhost:8080";

/// Initialize CORS middleware for the storefront and admin front-ends
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:4173,http://localhost:8080")
pub fn init_cors() -> Cors {
    let origins = allowed_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref());

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn allowed_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or(DEFAULT_ORIGINS)
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return allowed_origins(None);
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_configured_origins() {
        let origins = allowed_origins(Some("https://shop.example.com, https://admin.example.com"));

        assert_eq!(
            origins,
            vec!["https://shop.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn should_use_local_origins_when_unset_or_blank() {
        assert_eq!(allowed_origins(None).len(), 3);
        assert_eq!(allowed_origins(Some(" , ")).len(), 3);
    }
}
