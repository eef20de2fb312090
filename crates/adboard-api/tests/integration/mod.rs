mod ads_tests;
pub mod common;
