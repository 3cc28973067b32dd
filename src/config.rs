//! Scoring-service endpoint configuration.
//!
//! DESIGN
//! ======
//! The backend address is resolved exactly once, when the app is composed, and
//! handed to widgets through Leptos context. Call sites take an [`ApiConfig`]
//! instead of reading the environment themselves, so the default is visible in
//! one place and tests can construct arbitrary configs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Scoring service address used when no build-time override is present.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Location of the external scoring service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    pub backend_url: String,
}

impl ApiConfig {
    /// Config pointing at `backend_url`, normalizing away any trailing `/`.
    #[must_use]
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Config from the compile-time environment.
    ///
    /// Reads `MINDGAUGE_BACKEND_URL` as baked in at build time (the page is
    /// static once compiled, so the override has to be a build-time value),
    /// falling back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MINDGAUGE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
