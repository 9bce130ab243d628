//! Unit tests for the validator service
