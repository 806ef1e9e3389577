//! Unit tests for the user directory bounded context.
