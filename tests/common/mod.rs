//! Consolidated test utilities for listing-presenter
//!
//! This module provides unified testing utilities for integration tests,
//! focused on realistic listing-file scenarios.

pub mod assertions;
pub mod fixtures;
