use paymentsvc::config::AppConfig;

#[test]
fn gateway_credentials_are_required_at_boot() {
    std::env::remove_var("OMISE_PUBLIC_KEY");
    std::env::remove_var("OMISE_SECRET_KEY");
    assert!(AppConfig::from_env().is_err());

    std::env::set_var("OMISE_PUBLIC_KEY", "pkey_test_stub");
    std::env::set_var("OMISE_SECRET_KEY", "skey_test_stub");
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.omise_base_url, "https://api.omise.co");
    assert_eq!(cfg.gateway_timeout_ms, 2500);
}

#[test]
fn payment_endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("POST /payments"));
    assert!(readme.contains("GET /payments/:id"));
}

#[test]
fn gateway_credentials_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("OMISE_PUBLIC_KEY"));
    assert!(readme.contains("OMISE_SECRET_KEY"));
}
