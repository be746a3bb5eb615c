// Test modules

mod anomaly_session_test;
pub mod common;
mod defaults_test;
