use std::io::Write;
use std::{fs, path::Path};
use tempfile::NamedTempFile;
use word_analyzer::{analyze_text, AnalysisReport, Frequency, DEFAULT_NGRAM_SIZES};
pub mod constants;
use constants::{
    DIRECTIVES, EXPECTED_BIGRAM_DIRECTIVE, EXPECTED_FAILURE_DIRECTIVE, EXPECTED_TRIGRAM_DIRECTIVE,
    EXPECTED_WORD_DIRECTIVE, LANGUAGE_DIRECTIVE, TEST_FILES_DIRECTORY,
};

/// Writes `contents` to a temporary file which is removed when dropped.
pub fn write_temp_text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Lists the fixture text files, sorted by name.
pub fn list_test_files() -> Vec<String> {
    let mut paths: Vec<String> = fs::read_dir(TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .map(|path| path.to_string_lossy().into_owned())
        .collect();

    paths.sort();
    paths
}

// Helper function to get every value following `directive` in the file
pub fn get_directive_values(file_path: &Path, directive: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(directive)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

// Helper function to check if the file has an EXPECTED_FAILURE line
pub fn get_expected_failure(file_path: &Path) -> Option<String> {
    get_directive_values(file_path, EXPECTED_FAILURE_DIRECTIVE)
        .into_iter()
        .next()
}

/// Parses an expectation of the form `"<ngram>: <count>"`.
pub fn parse_expectation(value: &str) -> (String, Frequency) {
    let (ngram, count) = value
        .rsplit_once(':')
        .unwrap_or_else(|| panic!("Malformed expectation: {:?}", value));

    let count = count
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("Malformed count in expectation: {:?}", value));

    (ngram.trim().to_string(), count)
}

/// The fixture text with every directive line removed.
pub fn read_fixture_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !DIRECTIVES.iter().any(|directive| line.starts_with(directive))
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

fn ranked(report: &AnalysisReport, size: usize, k: usize) -> Vec<(String, Frequency)> {
    report
        .most_common(size, k)
        .into_iter()
        .map(|(ngram, count)| (ngram.joined(), count))
        .collect()
}

/// Runs a fixture file and returns a list of mismatch descriptions.
///
/// Expected entries must appear, in order, at the top of the ranking for their
/// window size. A fixture with an `EXPECTED_FAILURE:` line must fail with an
/// error whose message starts with the given text.
pub fn run_test_for_file(test_file_path: &str) -> Vec<String> {
    let path = Path::new(test_file_path);
    let language = get_directive_values(path, LANGUAGE_DIRECTIVE)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("{} - Missing LANGUAGE directive", test_file_path));
    let text = read_fixture_text(path);

    eprintln!("Testing file: {}", test_file_path);

    let result = analyze_text(&text, &language, DEFAULT_NGRAM_SIZES);

    if let Some(expected_failure) = get_expected_failure(path) {
        return match result {
            Err(err) if err.to_string().starts_with(&expected_failure) => Vec::new(),
            Err(err) => vec![format!(
                "Failure reason mismatch. Expected: '{}', but got: '{}'.",
                expected_failure, err
            )],
            Ok(_) => vec![format!(
                "Expected failure '{}', but analysis succeeded.",
                expected_failure
            )],
        };
    }

    let report = match result {
        Ok(report) => report,
        Err(err) => return vec![format!("Unexpected error: {}", err)],
    };

    let mut errors = Vec::new();

    for (size, directive) in [
        (1, EXPECTED_WORD_DIRECTIVE),
        (2, EXPECTED_BIGRAM_DIRECTIVE),
        (3, EXPECTED_TRIGRAM_DIRECTIVE),
    ] {
        let expected: Vec<(String, Frequency)> = get_directive_values(path, directive)
            .iter()
            .map(|value| parse_expectation(value))
            .collect();

        if expected.is_empty() {
            continue;
        }

        let actual = ranked(&report, size, expected.len());
        if actual != expected {
            errors.push(format!(
                "{}-gram ranking mismatch. Expected: {:?}, but got: {:?}",
                size, expected, actual
            ));
        }
    }

    errors
}
