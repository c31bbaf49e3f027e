//! Shared synthetic-series generators for tests and benchmarks

pub mod generators;
