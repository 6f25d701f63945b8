//! End-to-end integration test for option resolution
//!
//! Exercises the complete flow a test run goes through: resolver config
//! loading -> command-line parsing -> option files -> property overrides.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use qualify_options::{DiagnosticKind, OptionResolver, ResolverConfig, Severity};
use qualify_test_utils::OptionFiles;

/// A project with shared defaults, a team file and a broken local file
fn setup_option_files(files: &OptionFiles) -> (String, Vec<std::path::PathBuf>) {
    let defaults = files.write(
        "defaults.xml",
        &[
            ("browser", "firefox"),
            ("timeout", "30"),
            ("suites", "smoke"),
            ("report_dir", "target/reports"),
        ],
    );
    let team = files.write(
        "team.xml",
        &[("timeout", "60"), ("suites", "smoke, regression"), ("retries", "2")],
    );
    let broken = files.write_raw("local.xml", "<options><option name=\"retries\">5</option>");
    let missing = files.missing("ci.xml");

    let paths = vec![defaults, team, broken, missing];
    (OptionFiles::option_file_arg(&paths), paths)
}

#[test]
fn test_full_precedence_chain() {
    let files = OptionFiles::new();
    let (option_file_arg, paths) = setup_option_files(&files);

    let mut properties = HashMap::new();
    properties.insert("Qbrowser".to_string(), "chrome".to_string());

    let resolution = OptionResolver::builder()
        .overrides(properties)
        .resolve([
            "run".to_string(),
            "timeout=10".to_string(),
            option_file_arg,
            "timeout=15".to_string(),
        ]);
    let (resolver, diagnostics) = resolution.into_parts();

    // Property layer beats the option file
    assert_eq!(resolver.value("browser").as_deref(), Some("chrome"));
    // Last command-line token beats both option files
    assert_eq!(resolver.value("timeout").as_deref(), Some("15"));
    // First option file beats the second one
    assert_eq!(resolver.values("suites"), vec!["smoke"]);
    // Names only the second file sets are still loaded
    assert_eq!(resolver.value("retries").as_deref(), Some("2"));
    assert_eq!(resolver.value("report_dir").as_deref(), Some("target/reports"));

    let summary: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.kind, d.severity(), d.option.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                DiagnosticKind::OptionOverrideConflict,
                Severity::Warning,
                Some("timeout".to_string())
            ),
            (
                DiagnosticKind::OptionOverrideConflict,
                Severity::Warning,
                Some("timeout".to_string())
            ),
            (
                DiagnosticKind::OptionOverrideConflict,
                Severity::Warning,
                Some("suites".to_string())
            ),
            (DiagnosticKind::OptionFileParseFailure, Severity::Error, None),
            (DiagnosticKind::MissingOptionFile, Severity::Error, None),
        ]
    );

    let error_paths: Vec<_> = diagnostics
        .errors()
        .map(|d| d.path.clone().unwrap())
        .collect();
    assert_eq!(error_paths, vec![paths[2].clone(), paths[3].clone()]);
}

#[test]
fn test_configured_resolver_end_to_end() {
    let files = OptionFiles::new();
    let config_path = files.write_raw(
        "resolver.toml",
        "option_file_key = \"profiles\"\nproperty_prefix = \"qualify.\"\nvalue_separator = \"|\"\n",
    );
    let profile = files.write("profile.xml", &[("targets", "linux | macos | windows")]);

    let config = ResolverConfig::load(&config_path).unwrap();
    let mut properties = HashMap::new();
    properties.insert("qualify.headless".to_string(), "true".to_string());

    let resolution = OptionResolver::builder()
        .config(config)
        .overrides(properties)
        .resolve([format!("profiles={}", profile.display())]);

    assert!(resolution.diagnostics.is_empty());
    let resolver = resolution.resolver;
    assert_eq!(resolver.values("targets"), vec!["linux", "macos", "windows"]);
    assert!(resolver.has_option("headless"));
    assert_eq!(resolver.require_value("headless").unwrap(), "true");
    assert!(!resolver.has_option("option_file"));
}

#[test]
fn test_resolver_shared_read_only_across_threads() {
    let files = OptionFiles::new();
    let file = files.write("opts.xml", &[("workers", "4")]);
    let resolver = OptionResolver::from_args([OptionFiles::option_file_arg(&[&file])]).resolver;

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(resolver.value("workers").as_deref(), Some("4"));
            });
        }
    });
}
