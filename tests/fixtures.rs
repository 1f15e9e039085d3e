#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used, clippy::print_stderr)]

/// Fixture-driven synchronizer tests
///
/// Cases live in `tests/fixtures/*.json` so new address-bar scenarios can be
/// added without touching Rust code.
#[path = "fixtures/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixtures/fixture_runner.rs"]
mod fixture_runner;
