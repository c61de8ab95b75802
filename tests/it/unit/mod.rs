//! Single-component tests against the public API.

mod export_tests;
