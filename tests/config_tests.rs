//! Tests for configuration defaults, validation and loading.

use std::io::Write;
use vrpd_gen::config::Config;
use vrpd_gen::error::{ConfigError, GeneratorError};
use vrpd_gen::sampler::sample_instance;

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    assert_eq!(config.num_customers, 20);
    assert_eq!(config.map_size, 35000.0);
    assert_eq!(config.half_size(), 17500.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_setters() {
    let config = Config::new()
        .with_num_customers(50)
        .with_num_trucks(3)
        .with_num_drones(4)
        .with_map_size(17000.0)
        .with_drone_endurance(600.0)
        .with_drone_speed(20.0)
        .with_truck_speed(10.0)
        .with_p_near(0.3)
        .with_light_probabilities(0.9, 0.4)
        .with_demand_bounds(0.5, 2.0, 30.0)
        .with_max_rejection_attempts(None);

    assert_eq!(config.num_customers, 50);
    assert_eq!(config.num_trucks, 3);
    assert_eq!(config.num_drones, 4);
    assert_eq!(config.drone_radius(), 6000.0);
    assert_eq!(config.p_light_near, 0.9);
    assert_eq!(config.p_light_far, 0.4);
    assert_eq!(config.light_max_demand, 2.0);
    assert_eq!(config.max_rejection_attempts, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_positive_parameters() {
    let cases = [
        (Config::new().with_map_size(0.0), "map_size"),
        (Config::new().with_drone_endurance(-1.0), "drone_endurance"),
        (Config::new().with_drone_speed(f64::NAN), "drone_speed"),
        (Config::new().with_truck_speed(f64::INFINITY), "truck_speed"),
    ];

    for (config, expected) in cases {
        match config.validate() {
            Err(ConfigError::NonPositive { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected NonPositive for {}, got {:?}", expected, other),
        }
    }
}

#[test]
fn test_probabilities_out_of_range() {
    let config = Config::new().with_p_near(-0.1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ProbabilityOutOfRange { name: "p_near", .. })
    ));

    let config = Config::new().with_light_probabilities(0.5, 1.01);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ProbabilityOutOfRange { name: "p_light_far", .. })
    ));

    // Bounds are inclusive.
    let config = Config::new().with_p_near(1.0).with_light_probabilities(0.0, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_demand_bounds_order() {
    for (min, light, heavy) in [(1.25, 1.25, 49.0), (0.1, 49.0, 49.0), (2.0, 1.0, 49.0)] {
        let config = Config::new().with_demand_bounds(min, light, heavy);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DemandBoundsOrder { .. })
        ));
    }
}

#[test]
fn test_zero_rejection_cap_is_invalid() {
    let config = Config::new().with_max_rejection_attempts(Some(0));
    assert_eq!(config.validate(), Err(ConfigError::ZeroRejectionAttempts));
}

#[test]
fn test_load_partial_json_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "num_customers": 35, "num_drones": 2, "map_size": 17000.0, "max_rejection_attempts": null }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.num_customers, 35);
    assert_eq!(config.num_drones, 2);
    assert_eq!(config.map_size, 17000.0);
    assert_eq!(config.max_rejection_attempts, None);
    // Fields absent from the file keep their defaults.
    assert_eq!(config.p_near, 0.5);
    assert_eq!(config.heavy_max_demand, 49.0);
}

#[test]
fn test_load_config_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(
        Config::from_json_file(file.path()),
        Err(GeneratorError::Json(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_json_file(dir.path().join("missing.json")),
        Err(GeneratorError::Io { .. })
    ));
}

#[test]
fn test_demand_bounds_with_overflowing_width() {
    // Ordered and finite, but the light range is wider than f64 can hold.
    let config = Config::new().with_demand_bounds(-1e308, 1e308, 1.5e308);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DemandBoundsOrder { .. })
    ));

    assert!(matches!(
        sample_instance(Config::new().with_demand_bounds(-1e308, 1e308, 1.5e308), Some(1)),
        Err(GeneratorError::Configuration(ConfigError::DemandBoundsOrder { .. }))
    ));

    // Widths of exactly f64::MAX are still representable and sample fine.
    let config = Config::new().with_demand_bounds(-f64::MAX, 0.0, f64::MAX);
    assert!(config.validate().is_ok());
    let instance = sample_instance(config, Some(1)).unwrap();
    assert!(instance.customers.iter().all(|c| c.demand.is_finite()));
}

#[test]
fn test_drone_radius_must_be_finite() {
    let config = Config::new()
        .with_drone_endurance(1e200)
        .with_drone_speed(1e200)
        .with_max_rejection_attempts(None);

    match config.validate() {
        Err(ConfigError::NonPositive { name, value }) => {
            assert_eq!(name, "drone_radius");
            assert!(value.is_infinite());
        }
        other => panic!("expected NonPositive for drone_radius, got {:?}", other),
    }
    assert!(matches!(
        sample_instance(config, Some(1)),
        Err(GeneratorError::Configuration(_))
    ));
}
