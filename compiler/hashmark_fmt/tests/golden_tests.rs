//! Golden tests for the comment passes.
//!
//! Each `tests/fixtures/<name>.txt` is run through every mode that has a
//! matching `<name>.<mode>.expected` file, and the output is compared against
//! it. Reflow fixtures use a width of 40.
//!
//! Fixture files end with a newline for the sake of editors. That final line
//! ending is stripped from both input and expected output before comparing,
//! otherwise every fixture would carry an extra trailing line through the pass.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};

use hashmark_fmt::{transform_with_config, FormatConfig, Mode};

const GOLDEN_WIDTH: usize = 40;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Find all fixture inputs, sorted for stable output.
fn find_fixtures(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("fixtures directory is readable")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "txt"))
        .collect();
    files.sort();
    files
}

fn strip_final_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Run one fixture through every mode it has an expectation for.
///
/// Returns the number of comparisons made, or a description of the first
/// mismatch.
fn run_fixture(path: &Path) -> Result<usize, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let input = strip_final_line_ending(&source);
    let config = FormatConfig::new(GOLDEN_WIDTH).map_err(|e| e.to_string())?;

    let mut checked = 0;
    for mode in Mode::ALL {
        let expected_path = path.with_extension(format!("{mode}.expected"));
        if !expected_path.exists() {
            continue;
        }
        let expected = fs::read_to_string(&expected_path)
            .map_err(|e| format!("Failed to read {}: {}", expected_path.display(), e))?;
        let expected = strip_final_line_ending(&expected);

        let actual = transform_with_config(mode, input, &config);
        if actual != expected {
            return Err(format!(
                "Mismatch for {} ({mode}):\n\n--- Expected ---\n{}\n--- Got ---\n{}\n",
                path.display(),
                expected,
                actual
            ));
        }
        checked += 1;
    }
    Ok(checked)
}

#[test]
fn golden_fixtures() {
    let fixtures = find_fixtures(&fixtures_dir());
    assert!(!fixtures.is_empty(), "no fixtures found");

    let mut failures = Vec::new();
    let mut total = 0;
    for path in &fixtures {
        match run_fixture(path) {
            Ok(checked) => total += checked,
            Err(e) => failures.push(e),
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
    assert!(total >= fixtures.len(), "every fixture should have an expectation");
}

#[test]
fn add_output_is_a_fixed_point() {
    let config = FormatConfig::default();
    for path in find_fixtures(&fixtures_dir()) {
        let source = fs::read_to_string(&path).unwrap();
        let once = transform_with_config(Mode::Add, strip_final_line_ending(&source), &config);
        let twice = transform_with_config(Mode::Add, &once, &config);
        assert_eq!(twice, once, "add is not idempotent on {}", path.display());
    }
}
