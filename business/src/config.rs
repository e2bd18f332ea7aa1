/// Configuration for talking to the SustainGo backend.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api_base_url: String,
    /// Whether analytics requests should carry the bearer token when a
    /// credential is present. The backend guards analytics with the admin
    /// permission, so this defaults to true; set false to call them
    /// anonymously.
    pub analytics_auth: bool,
}

impl AdminConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            analytics_auth: true,
        }
    }

    /// The API root, always `<base>/api` with no trailing slash.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new("https://sustaingobackend.onrender.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_backend() {
        let config = AdminConfig::default();
        assert_eq!(config.api_base_url, "https://sustaingobackend.onrender.com");
        assert_eq!(config.api_url(), "https://sustaingobackend.onrender.com/api");
        assert!(config.analytics_auth);
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = AdminConfig::new("http://127.0.0.1:8000/");
        assert_eq!(config.api_url(), "http://127.0.0.1:8000/api");
    }
}
