//! Shared fixtures and helpers for integration tests.

#![allow(dead_code)]

pub mod source_fixtures;
pub mod synth_helpers;
