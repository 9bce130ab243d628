//! Unit tests for validator request entities

mod request_tests;
