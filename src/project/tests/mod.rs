//! Unit tests for the project bounded context.

mod stored_repository_tests;
