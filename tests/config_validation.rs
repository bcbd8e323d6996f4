use scan_smooth::{Config, ConfigError, FilterNode, KernelWeights, ScanFrame, ScanSmoother};

#[test]
fn test_zero_sigma() {
    let result = ScanSmoother::new(Config { radius: 5, sigma: 0.0 });
    assert!(matches!(result, Err(ConfigError::InvalidSpread)));
}

#[test]
fn test_negative_sigma() {
    let result = ScanSmoother::new(Config { radius: 5, sigma: -0.01 });
    assert!(matches!(result, Err(ConfigError::InvalidSpread)));
}

#[test]
fn test_nan_sigma() {
    let result = ScanSmoother::new(Config { radius: 5, sigma: f32::NAN });
    assert!(matches!(result, Err(ConfigError::InvalidSpread)));
}

#[test]
fn test_negative_radius_param() {
    let result = Config::from_params(-3, 1.0);
    assert!(matches!(result, Err(ConfigError::NegativeRadius)));
}

#[test]
fn test_radius_too_large() {
    let result = ScanSmoother::new(Config { radius: Config::MAX_RADIUS + 1, sigma: 1.0 });
    assert!(matches!(result, Err(ConfigError::RadiusTooLarge)));

    let result = Config::from_params(i64::MAX, 1.0);
    assert!(matches!(result, Err(ConfigError::RadiusTooLarge)));
}

#[test]
fn test_kernel_table_validates() {
    assert!(matches!(KernelWeights::new(3, 0.0), Err(ConfigError::InvalidSpread)));
    assert!(KernelWeights::new(3, 0.5).is_ok());
}

#[test]
fn test_node_rejects_invalid_config() {
    let source: std::collections::VecDeque<ScanFrame<f32, 8>> = Default::default();
    let sink: Vec<ScanFrame<f32, 8>> = Vec::new();

    let result = FilterNode::<f32, 8, _, _>::new(Config { radius: 2, sigma: 0.0 }, source, sink);
    assert!(matches!(result, Err(ConfigError::InvalidSpread)));
}

#[test]
fn test_default_config_matches_stock_node() {
    let config = Config::default();
    assert_eq!(config.radius, 5);
    assert_eq!(config.sigma, 0.01);
    assert!(ScanSmoother::new(config).is_ok());
}

#[test]
fn test_valid_configs() {
    assert!(ScanSmoother::new(Config { radius: 0, sigma: 1.0 }).is_ok());
    assert!(ScanSmoother::new(Config { radius: Config::MAX_RADIUS, sigma: 100.0 }).is_ok());
    assert!(Config::from_params(0, 0.5).is_ok());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::NegativeRadius.to_string(),
        "radius must not be negative"
    );
    assert_eq!(ConfigError::RadiusTooLarge.to_string(), "radius must be <= 32");
}
