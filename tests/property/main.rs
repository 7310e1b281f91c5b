//! Property-based tests for the to-do store

mod todo_proptest;
