//! Integration tests

mod persistence_tests;
