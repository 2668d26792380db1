pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod loading;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
