//! Desktop client layers against a live server

mod api_client_test;
mod sync_test;
