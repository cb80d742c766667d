use ipranges_bench::config::{BenchConfig, GenerateConfig, StrategyList};
use ipranges_bench::generate::generate;
use ipranges_bench::harness::{Dataset, bench};
use ipranges_bench::input::{LoadError, load_values};
use ipranges_index::StrategyKind;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Writes a file in the temporary directory, removed together with the directory.
fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn bench_unsorted_known_values() {
    let dir = tempdir().unwrap();
    let known = write(&dir, "unsorted-known", "10 8\n1\n2\n3\n7\n3\n");
    let requested = write(&dir, "unsorted-requested", "2 5 8 9 10 11\n");
    let config = BenchConfig {
        iterations: 5,
        ..BenchConfig::new(&known, &requested)
    };

    let dataset = Dataset::load(&config).unwrap();
    assert_eq!(dataset.known, vec![1, 2, 3, 7, 8, 10]);

    let mut out = Vec::new();
    let reports = bench(&config, &mut out).unwrap();
    assert_eq!(reports.len(), StrategyKind::ALL.len());
    for report in &reports {
        assert_eq!(report.found, 15, "{}", report.signature);
    }
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("## preparing strategies"));
    assert!(out.contains("## running strategies"));
    assert!(out.contains("SPARSE_HASH_SET"));
}

#[test]
fn bench_selected_strategies_with_debug() {
    let dir = tempdir().unwrap();
    let known = write(&dir, "debug-known", "5\n");
    let requested = write(&dir, "debug-requested", "4\n5\n6\n");
    let config = BenchConfig {
        iterations: 1,
        debug: true,
        strategies: StrategyList(vec![StrategyKind::Branchless, StrategyKind::Echo]),
        ..BenchConfig::new(&known, &requested)
    };
    let reports = bench(&config, &mut std::io::sink()).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].found, 1);
    assert_eq!(reports[1].found, 0);
}

#[test]
fn empty_known_values_abort() {
    let dir = tempdir().unwrap();
    let known = write(&dir, "empty-known", "\n");
    let requested = write(&dir, "empty-requested", "1 2 3\n");
    let mut out = Vec::new();
    assert!(bench(&BenchConfig::new(&known, &requested), &mut out).is_err());
    let out = String::from_utf8(out).unwrap();
    assert!(!out.contains("## running strategies"));
}

#[test]
fn invalid_and_missing_sources() {
    let dir = tempdir().unwrap();
    let invalid = write(&dir, "invalid", "1\n2\n1.5\n");
    assert!(matches!(load_values(&invalid), Err(LoadError::InvalidInput { line: 3, .. })));

    let missing = dir.path().join("missing");
    assert!(matches!(load_values(&missing), Err(LoadError::MissingSource { .. })));
    assert!(bench(&BenchConfig::new(&missing, &invalid), &mut std::io::sink()).is_err());
}

#[test]
fn generate_then_bench() {
    let dir = tempdir().unwrap();
    let config = GenerateConfig {
        ips_file: dir.path().join("gen-ips"),
        csv_file: Some(dir.path().join("gen-ranges")),
        requested_file: Some(dir.path().join("gen-requested")),
        num_ranges: 20,
        max_value: 1 << 32,
        total_addresses: 2000,
        requested: 500,
        seed: Some(79837224973),
    };
    generate(&config).unwrap();

    let known = load_values(&config.ips_file).unwrap();
    assert!(!known.is_empty());
    assert!(known.windows(2).all(|w| w[0] < w[1]));
    let csv = std::fs::read_to_string(config.csv_file.as_ref().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 20);

    let requested_file = config.requested_file.clone().unwrap();
    assert_eq!(load_values(&requested_file).unwrap().len(), 500);

    let bench_config = BenchConfig {
        iterations: 3,
        assume_sorted: true,
        ..BenchConfig::new(&config.ips_file, &requested_file)
    };
    let reports = bench(&bench_config, &mut std::io::sink()).unwrap();
    assert!(reports.iter().all(|r| r.found == reports[0].found));
    assert!(reports[0].found > 0);
}
