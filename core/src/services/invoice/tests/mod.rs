//! Tests for the invoice service

mod service_tests;
