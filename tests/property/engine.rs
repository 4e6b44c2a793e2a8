//! Property tests for the repeat engine.
//!
//! Invariants tested:
//! - Outcome lengths match the repeated output
//! - Plain output written to a file is the repeated text byte for byte

use proptest::prelude::*;
use str_repeat::{LocalStorage, OutputFormat, RepeatEngine, RepeatJob, RepeatLimits};
use tempfile::TempDir;
use tokio::runtime::Runtime;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: execute reports byte and char lengths as products
    #[test]
    fn engine_outcome_lengths(text in any::<String>(), count in 0usize..32) {
        let dir = TempDir::new().unwrap();
        let engine = RepeatEngine::new(
            LocalStorage::new(dir.path().join("out.txt")),
            RepeatLimits::default(),
            OutputFormat::Plain,
        );

        let outcome = engine.execute(&RepeatJob::new(text.clone(), count)).unwrap();
        prop_assert_eq!(outcome.byte_len, text.len() * count);
        prop_assert_eq!(outcome.char_len, text.chars().count() * count);
        prop_assert_eq!(outcome.output.len(), outcome.byte_len);
    }

    /// Property: plain file output round-trips the repeated text
    #[test]
    fn engine_writes_repeated_text(text in "[ -~]{0,12}", count in 0usize..16) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let engine = RepeatEngine::new(
            LocalStorage::new(&path),
            RepeatLimits::default(),
            OutputFormat::Plain,
        )
        .with_trailing_newline(false);

        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            engine.run(&RepeatJob::new(text.clone(), count)).await.unwrap();
        });

        let written = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(written.len(), text.len() * count);
        prop_assert_eq!(written, text.repeat(count));
    }
}
