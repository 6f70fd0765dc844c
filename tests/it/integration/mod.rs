//! Integration tests for multi-component workflows.

mod lifecycle_tests;
mod resize_tests;
