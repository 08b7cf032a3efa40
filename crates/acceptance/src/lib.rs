//! Acceptance test harness crate.
//!
//! Holds no runtime code; cross-crate scenarios live in `tests/`.
