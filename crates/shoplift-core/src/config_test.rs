use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SHOPLIFT_APP_URL", "https://shoplift.example.com");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SHOPLIFT_ENV"));
}

#[test]
fn build_app_config_fails_without_app_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPLIFT_APP_URL"),
        "expected MissingEnvVar(SHOPLIFT_APP_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_app_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("SHOPLIFT_APP_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPLIFT_APP_URL"),
        "expected MissingEnvVar(SHOPLIFT_APP_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_app_url() {
    let mut map = full_env();
    map.insert("SHOPLIFT_APP_URL", "ftp://shoplift.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPLIFT_APP_URL"),
        "expected InvalidEnvVar(SHOPLIFT_APP_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.app_url, "https://shoplift.example.com");
    assert!(cfg.session_token.is_none());
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 0);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn build_app_config_requires_session_token_outside_development() {
    let mut map = full_env();
    map.insert("SHOPLIFT_ENV", "production");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPLIFT_SESSION_TOKEN"),
        "expected MissingEnvVar(SHOPLIFT_SESSION_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_session_token_in_production() {
    let mut map = full_env();
    map.insert("SHOPLIFT_ENV", "production");
    map.insert("SHOPLIFT_SESSION_TOKEN", "  sess-abc  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.session_token.as_deref(), Some("sess-abc"));
}

#[test]
fn build_app_config_blank_session_token_is_unset() {
    let mut map = full_env();
    map.insert("SHOPLIFT_SESSION_TOKEN", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.session_token.is_none());
}

#[test]
fn request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("SHOPLIFT_REQUEST_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 45);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("SHOPLIFT_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPLIFT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPLIFT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = full_env();
    map.insert("SHOPLIFT_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn log_level_override() {
    let mut map = full_env();
    map.insert("SHOPLIFT_LOG_LEVEL", "shoplift_clone=debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "shoplift_clone=debug");
}

#[test]
fn debug_output_redacts_session_token() {
    let mut map = full_env();
    map.insert("SHOPLIFT_SESSION_TOKEN", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn overrides_take_precedence_over_lookup() {
    let map = full_env();
    let mut overrides = ConfigOverrides::new();
    overrides.insert("SHOPLIFT_APP_URL", "https://override.example.com".to_string());
    overrides.insert("SHOPLIFT_SESSION_TOKEN", "sess-flag".to_string());

    let cfg = build_app_config(with_overrides(&overrides, lookup_from_map(&map))).unwrap();

    assert_eq!(cfg.app_url, "https://override.example.com");
    assert_eq!(cfg.session_token.as_deref(), Some("sess-flag"));
}

#[test]
fn overrides_fall_back_to_lookup_for_other_keys() {
    let mut map = full_env();
    map.insert("SHOPLIFT_USER_AGENT", "from-env/1.0");
    let overrides = ConfigOverrides::new();

    let cfg = build_app_config(with_overrides(&overrides, lookup_from_map(&map))).unwrap();

    assert_eq!(cfg.app_url, "https://shoplift.example.com");
    assert_eq!(cfg.user_agent, "from-env/1.0");
}

#[test]
fn environment_display_matches_env_var_values() {
    for value in ["development", "test", "production"] {
        assert_eq!(parse_environment(value).unwrap().to_string(), value);
    }
}
