//! Control unit tests.
