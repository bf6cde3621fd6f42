//! HTTP routes shared by the server and the client

/// GET returns the content row, PATCH applies a partial update
pub const SITE_CONTENT_PATH: &str = "/api/site-content";

/// Health/info endpoint
pub const HEALTH_PATH: &str = "/health";

/// Substitute `:name` segments in `path` with the matching parameter values.
/// Parameters with no matching segment are ignored.
pub fn build_url(path: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(path.to_string(), |url, (key, value)| {
        url.replacen(&format!(":{}", key), value, 1)
    })
}
