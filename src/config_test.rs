use super::*;

#[test]
fn default_uses_builtin_values() {
    let config = ConsoleConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
}

#[test]
fn resolve_prefers_provided_values() {
    let config = ConsoleConfig::resolve(Some("https://library.example/api"), Some("staff_token"));
    assert_eq!(config.api_base_url, "https://library.example/api");
    assert_eq!(config.token_storage_key, "staff_token");
}

#[test]
fn resolve_treats_empty_values_as_missing() {
    assert_eq!(ConsoleConfig::resolve(Some(""), Some("")), ConsoleConfig::default());
}

#[test]
fn endpoint_joins_without_doubled_slashes() {
    let config = ConsoleConfig::resolve(Some("http://host/api/"), None);
    assert_eq!(config.endpoint("/auth/login"), "http://host/api/auth/login");
    assert_eq!(config.endpoint("book"), "http://host/api/book");
}
