//! Real-time integration tests

mod broadcast_test;
mod stream_test;
