pub mod assistant;
pub mod generator;
pub mod models;
pub mod store;

// Test utilities, compiled for the test_utils feature or our own tests
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
