//! Environment-driven knobs for test runs.

pub mod property_test_profile;
