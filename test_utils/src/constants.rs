pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const LANGUAGE_DIRECTIVE: &str = "LANGUAGE:";
pub const EXPECTED_WORD_DIRECTIVE: &str = "EXPECTED_WORD:";
pub const EXPECTED_BIGRAM_DIRECTIVE: &str = "EXPECTED_BIGRAM:";
pub const EXPECTED_TRIGRAM_DIRECTIVE: &str = "EXPECTED_TRIGRAM:";
pub const EXPECTED_FAILURE_DIRECTIVE: &str = "EXPECTED_FAILURE:";
pub const COMMENT_DIRECTIVE: &str = "COMMENT:";

pub const DIRECTIVES: &[&str] = &[
    LANGUAGE_DIRECTIVE,
    EXPECTED_WORD_DIRECTIVE,
    EXPECTED_BIGRAM_DIRECTIVE,
    EXPECTED_TRIGRAM_DIRECTIVE,
    EXPECTED_FAILURE_DIRECTIVE,
    COMMENT_DIRECTIVE,
];
