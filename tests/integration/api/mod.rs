//! API integration tests

mod todos_test;
