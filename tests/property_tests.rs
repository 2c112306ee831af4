//! Property-based tests for logger_config using proptest

use logger_config::prelude::*;
use proptest::prelude::*;

const CANONICAL: [&str; 4] = ["name", "asctime", "levelname", "message"];

fn placeholders(template: &str) -> Vec<String> {
    if template.is_empty() {
        return Vec::new();
    }
    template
        .split(' ')
        .map(|token| {
            token
                .strip_prefix("%(")
                .and_then(|t| t.strip_suffix(")s"))
                .unwrap_or_else(|| panic!("unexpected token {:?}", token))
                .to_string()
        })
        .collect()
}

// ============================================================================
// Format Builder Tests
// ============================================================================

proptest! {
    /// Included fields appear exactly once, canonical first, then extras in call order
    #[test]
    fn test_format_order(
        flags in prop::array::uniform4(any::<bool>()),
        extra_flags in prop::collection::vec(any::<bool>(), 0..6),
    ) {
        let extra_names: Vec<String> = (0..extra_flags.len()).map(|i| format!("extra{}", i)).collect();
        let extras: Vec<(&str, bool)> = extra_names
            .iter()
            .map(String::as_str)
            .zip(extra_flags.iter().copied())
            .collect();

        let template = LoggerConfig::format(flags[0], flags[1], flags[2], flags[3], &extras);

        let mut expected: Vec<String> = CANONICAL
            .iter()
            .zip(flags.iter())
            .filter(|(_, on)| **on)
            .map(|(field, _)| field.to_string())
            .collect();
        expected.extend(extras.iter().filter(|(_, on)| *on).map(|(field, _)| field.to_string()));

        prop_assert_eq!(placeholders(&template), expected);
    }

    /// The fluent builder and the flag function agree
    #[test]
    fn test_builder_matches_function(
        flags in prop::array::uniform4(any::<bool>()),
        extras in prop::collection::vec(("[a-z][a-zA-Z_]{0,7}", any::<bool>()), 0..5),
    ) {
        let pairs: Vec<(&str, bool)> = extras.iter().map(|(f, on)| (f.as_str(), *on)).collect();
        let from_fn = build_format(flags[0], flags[1], flags[2], flags[3], &pairs);
        let from_builder = FormatSpec::new()
            .name(flags[0])
            .asctime(flags[1])
            .levelname(flags[2])
            .message(flags[3])
            .fields(pairs.iter().copied())
            .build();
        prop_assert_eq!(from_fn, from_builder);
    }

    /// A built template never repeats a field, whatever the extras collide with
    #[test]
    fn test_format_fields_unique(
        extras in prop::collection::vec(
            (prop_oneof![Just("name"), Just("message"), Just("lineno"), Just("module")], any::<bool>()),
            0..8,
        ),
    ) {
        let template = build_format(true, true, true, true, &extras);
        let fields = placeholders(&template);
        let mut deduped = fields.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(fields.len(), deduped.len());
    }

    /// Every built template is accepted by the formatter with the same fields
    #[test]
    fn test_built_template_parses(
        flags in prop::array::uniform4(any::<bool>()),
        extras in prop::collection::vec(("[a-z][a-zA-Z_]{0,7}", any::<bool>()), 0..5),
    ) {
        let pairs: Vec<(&str, bool)> = extras.iter().map(|(f, on)| (f.as_str(), *on)).collect();
        let template = build_format(flags[0], flags[1], flags[2], flags[3], &pairs);
        let formatter = Formatter::new(&template).unwrap();

        if template.is_empty() {
            prop_assert_eq!(formatter.fields().collect::<Vec<_>>(), vec!["message"]);
        } else {
            let fields: Vec<String> = formatter.fields().map(String::from).collect();
            prop_assert_eq!(fields, placeholders(&template));
        }
    }
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in prop::sample::select(LogLevel::ALL.to_vec())) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(LogLevel::from_code(level.code()), Some(level));
    }

    /// Any integer has a display name; unnamed codes use the `Level N` form
    #[test]
    fn test_level_name_for_any_code(code in any::<i32>()) {
        let name = LogLevel::name_for(code);
        match LogLevel::from_code(code) {
            Some(level) => prop_assert_eq!(name, level.to_str()),
            None => prop_assert_eq!(name, format!("Level {}", code)),
        }
    }

    /// Threshold comparison matches integer comparison
    #[test]
    fn test_threshold_is_integer_comparison(threshold in -100i32..100, level in -100i32..100) {
        let logger = Logger::new("prop");
        logger.set_level(threshold);
        prop_assert_eq!(logger.is_enabled_for(level), level >= threshold);
    }
}

// ============================================================================
// LogRecord Message Sanitization Tests
// ============================================================================

proptest! {
    /// Control characters never survive into a record, so one record is one line
    #[test]
    fn test_message_sanitization(message in ".*") {
        let record = LogRecord::new("prop", 20, &message);

        prop_assert!(!record.message.contains('\n'));
        prop_assert!(!record.message.contains('\r'));
        prop_assert!(!record.message.contains('\t'));
        if message.contains('\n') {
            prop_assert!(record.message.contains("\\n"));
        }
    }

    /// Test that log injection attacks are prevented
    #[test]
    fn test_log_injection_prevention(
        legitimate_msg in "[a-zA-Z0-9 ]+",
        injected_level in prop_oneof![Just("ERROR"), Just("WARN"), Just("FATAL")],
    ) {
        let malicious_input = format!("{}\n{}: Fake admin login", legitimate_msg, injected_level);
        let record = LogRecord::new("prop", 20, malicious_input);

        let formatted = Formatter::new("%(levelname)s %(message)s")
            .unwrap()
            .format(&record)
            .unwrap();
        prop_assert_eq!(formatted.lines().count(), 1);
    }
}

// ============================================================================
// FileMode Tests
// ============================================================================

proptest! {
    /// Only the four documented spellings (any case) are accepted
    #[test]
    fn test_file_mode_parsing(input in "[a-zA-Z]{0,10}") {
        let accepted = matches!(
            input.to_lowercase().as_str(),
            "a" | "w" | "append" | "overwrite"
        );
        prop_assert_eq!(input.parse::<FileMode>().is_ok(), accepted);
    }
}
