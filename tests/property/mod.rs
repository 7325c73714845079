//! Property-based tests

#[cfg(feature = "ssr")]
mod token_proptest;
