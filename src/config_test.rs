use super::*;

// =============================================================
// ApiConfig construction
// =============================================================

#[test]
fn new_keeps_clean_url() {
    let cfg = ApiConfig::new("http://localhost:8000");
    assert_eq!(cfg.backend_url, "http://localhost:8000");
}

#[test]
fn new_strips_trailing_slash() {
    let cfg = ApiConfig::new("https://assess.example.com/");
    assert_eq!(cfg.backend_url, "https://assess.example.com");
}

#[test]
fn new_strips_repeated_trailing_slashes() {
    let cfg = ApiConfig::new("https://assess.example.com///");
    assert_eq!(cfg.backend_url, "https://assess.example.com");
}

#[test]
fn default_uses_documented_backend() {
    assert_eq!(ApiConfig::default().backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn build_env_falls_back_to_default() {
    // MINDGAUGE_BACKEND_URL is not set for test builds, so the compile-time
    // lookup resolves to the documented default.
    assert_eq!(ApiConfig::from_build_env(), ApiConfig::default());
}
