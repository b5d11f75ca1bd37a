//! Unit tests for the to-do module.

mod domain_tests;
