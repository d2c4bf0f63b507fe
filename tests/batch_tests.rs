//! Tests for batch generation.

use vrpd_gen::batch::{BatchConfig, BatchGenerator};
use vrpd_gen::config::Config;
use vrpd_gen::error::GeneratorError;
use vrpd_gen::instance::Instance;
use vrpd_gen::sampler::InstanceSampler;

fn create_test_sampler(seed: u64) -> InstanceSampler {
    let config = Config::new()
        .with_num_customers(20)
        .with_num_trucks(2)
        .with_num_drones(2)
        .with_map_size(17000.0);
    InstanceSampler::new(config, Some(seed)).unwrap()
}

#[test]
fn test_file_names_and_indices() {
    let batch = BatchConfig::new("data", "20.17", 3001, 3);
    assert_eq!(batch.file_name(3001), "20.17.3001.txt");
    assert_eq!(
        batch.indices().unwrap().collect::<Vec<_>>(),
        vec![3001, 3002, 3003]
    );
}

#[test]
fn test_batch_writes_numbered_files() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("nested").join("data");
    let batch = BatchConfig::new(&output_dir, "20.17", 5, 4);

    let written = BatchGenerator::new(create_test_sampler(1), batch)
        .run()
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["20.17.5.txt", "20.17.6.txt", "20.17.7.txt", "20.17.8.txt"]
    );

    for path in &written {
        assert!(path.starts_with(&output_dir));
        let instance = Instance::from_file(path).unwrap();
        assert_eq!(instance.num_trucks, 2);
        assert_eq!(instance.num_drones, 2);
        assert_eq!(instance.customers.len(), 20);
    }
}

#[test]
fn test_seeded_batch_is_reproducible() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let a = BatchGenerator::new(create_test_sampler(77), BatchConfig::new(first.path(), "b", 1, 3))
        .run()
        .unwrap();
    let b = BatchGenerator::new(create_test_sampler(77), BatchConfig::new(second.path(), "b", 1, 3))
        .run()
        .unwrap();

    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(
            Instance::from_file(pa).unwrap(),
            Instance::from_file(pb).unwrap()
        );
    }

    // Instances within one batch come from successive draws.
    assert_ne!(
        Instance::from_file(&a[0]).unwrap(),
        Instance::from_file(&a[1]).unwrap()
    );
}

#[test]
fn test_empty_batch() {
    let dir = tempfile::tempdir().unwrap();
    let written = BatchGenerator::new(create_test_sampler(2), BatchConfig::new(dir.path(), "x", 1, 0))
        .run()
        .unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_index_overflow_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("data");

    let batch = BatchConfig::new(&output_dir, "x", u64::MAX, 1);
    assert!(batch.indices().is_err());

    let result = BatchGenerator::new(create_test_sampler(3), batch).run();
    assert!(matches!(
        result,
        Err(GeneratorError::IndexOverflow { start: u64::MAX, count: 1 })
    ));
    assert!(!output_dir.exists());

    // The last representable index still fits when the end stays in range.
    let batch = BatchConfig::new(&output_dir, "x", u64::MAX - 2, 2);
    assert_eq!(batch.indices().unwrap().count(), 2);
}
