//! Integration tests for recurrence expansion.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p almanac-test --test repeat_integration
//! ```
//!
//! Set `RUST_LOG=almanac_repeat=trace` to see the expansion spans.

mod collapse;
mod config;
mod rrule_oracle;
