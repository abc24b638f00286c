//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the client config when set. Otherwise the URL
/// is built from the current window location with the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = config().api.base_url.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path, starting with "/" (e.g. "/products")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Value of the `Authorization` header for a bearer credential
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
