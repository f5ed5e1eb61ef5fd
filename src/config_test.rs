use super::*;

#[test]
fn base_url_defaults_when_unset_or_blank() {
    assert_eq!(ApiConfig::with_base_url(None).base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::with_base_url(Some("   ")).base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_trims_trailing_slashes() {
    let config = ApiConfig::with_base_url(Some("https://shop.example.com//"));
    assert_eq!(config.base_url(), "https://shop.example.com");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::with_base_url(Some("http://api.local/"));
    assert_eq!(config.endpoint("/api/auth/login"), "http://api.local/api/auth/login");
    assert_eq!(config.endpoint("api/brands"), "http://api.local/api/brands");
}

#[test]
fn log_level_parses_names_case_insensitively() {
    assert_eq!(log_level(Some("debug")), log::Level::Debug);
    assert_eq!(log_level(Some("WARN")), log::Level::Warn);
}

#[test]
fn log_level_falls_back_on_garbage() {
    assert_eq!(log_level(None), DEFAULT_LOG_LEVEL);
    assert_eq!(log_level(Some("loud")), DEFAULT_LOG_LEVEL);
}
