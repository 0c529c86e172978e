//! Helper utilities for tests.

/// Collect a list of string literals (or anything that can become a `String`)
/// into a `Vec<String>`.
///
/// Document fixtures in this crate are line vectors, so unit tests lean on
/// this heavily.
#[macro_export]
macro_rules! string_vec {
    ( $($elem:expr),* $(,)? ) => {
        vec![ $( ::std::string::ToString::to_string(&$elem) ),* ]
    };
}
