//! Property-based tests for rnlog using proptest

use proptest::prelude::*;
use rnlog::core::format_prefix;
use rnlog::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Log),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn emit(logger: &Logger, level: LogLevel, message: &str) {
    match level {
        LogLevel::Log => logger.log(message),
        LogLevel::Debug => logger.debug(message),
        LogLevel::Info => logger.info(message),
        LogLevel::Warn => logger.warn(message),
        LogLevel::Error => logger.error(message),
        LogLevel::Fatal => logger.fatal(message),
    }
}

// ============================================================================
// Threshold
// ============================================================================

proptest! {
    /// A record at level L is emitted iff threshold <= L
    #[test]
    fn test_emitted_iff_threshold_at_most_level(level in any_level(), threshold in -2i32..8) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let logger = Logger::builder().stdout(out.clone()).stderr(err.clone()).build();
        logger.set_level(threshold);

        emit(&logger, level, "probe");

        let written = out.len() + err.len();
        prop_assert_eq!(written > 0, threshold <= level.as_i32());
    }

    /// Levels 0-3 use the output stream, 4-5 the error stream
    #[test]
    fn test_stream_routing(level in any_level()) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let logger = Logger::builder().stdout(out.clone()).stderr(err.clone()).build();

        emit(&logger, level, "probe");

        prop_assert_eq!(err.is_empty(), !level.is_error_stream());
        prop_assert_eq!(out.is_empty(), level.is_error_stream());
    }

    /// Level 0 is never prefixed; every other level always is
    #[test]
    fn test_prefix_presence(level in any_level(), message in "[a-z ]{0,40}") {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder().stdout(buffer.clone()).stderr(buffer.clone()).build();

        emit(&logger, level, &message);

        let record = buffer.contents();
        if level == LogLevel::Log {
            prop_assert_eq!(record, message);
        } else {
            let head = format!("[{:>5}][", level.to_str());
            prop_assert!(record.starts_with(&head));
            let tail = format!("[UnknownFunction] {}", message);
            prop_assert!(record.ends_with(&tail));
        }
    }
}

// ============================================================================
// Prefix formatting
// ============================================================================

proptest! {
    /// Out-of-range levels always produce an empty prefix
    #[test]
    fn test_out_of_range_prefix_is_empty(level in prop_oneof![i32::MIN..0, 6..i32::MAX]) {
        prop_assert_eq!(format_prefix(level, "2025-01-08 10:30:45", None), "");
    }

    /// Prefix ends with exactly one space and no newline
    #[test]
    fn test_prefix_shape(level in 1i32..=5, line in 1u32..100_000) {
        let site = CallSite::new("app::module::handler", line);
        let prefix = format_prefix(level, "2025-01-08 10:30:45", Some(&site));
        let expected_tail = format!("[handler:{}] ", line);
        prop_assert!(prefix.ends_with(&expected_tail));
        prop_assert!(!prefix.contains('\n'));
        prop_assert_eq!(&prefix[6..8], "][");
    }
}

// ============================================================================
// LogLevel
// ============================================================================

proptest! {
    #[test]
    fn test_level_parse_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_string().parse().unwrap();
        prop_assert_eq!(level, parsed);
        let numeric: LogLevel = level.as_i32().to_string().parse().unwrap();
        prop_assert_eq!(level, numeric);
    }

    #[test]
    fn test_level_ordering_matches_numeric(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.as_i32() <= b.as_i32());
    }
}
