//! Custom assertion macros and utilities

use todoflow::shared::TodoItem;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a listing never goes forward in time
pub fn assert_newest_first(items: &[TodoItem]) {
    for pair in items.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "{} ({}) listed before newer {} ({})",
            pair[0].text,
            pair[0].created_at,
            pair[1].text,
            pair[1].created_at
        );
    }
}
