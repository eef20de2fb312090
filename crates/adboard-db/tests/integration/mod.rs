mod ad_tests;
mod admin_tests;
pub mod common;
