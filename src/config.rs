/// Hosted backend used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://backend-hostelhub.onrender.com";

/// Base URL of the complaint backend. Overridable per deployment via
/// `HOSTELHUB_API_BASE`.
pub fn api_base() -> String {
    std::env::var("HOSTELHUB_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}
