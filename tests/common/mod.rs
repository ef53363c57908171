//! Common test utilities for symbology.
//!
//! This module provides shared utilities for testing the classification engine.

// Re-export all common test utilities
pub mod assertions;
pub mod test_data;
