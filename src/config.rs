//! Configuration and defaults for the cortexweb server.
//!
//! The listen address is fixed. The only runtime knob is the
//! `GREETING_MESSAGE` environment variable, resolved by
//! [`greeting_message`] on every request so the server never serves a
//! stale value cached at startup.
//!
use std::env;

/// Interface the HTTP listener binds to
pub const BIND_HOST: &str = "0.0.0.0";
/// Port the HTTP listener binds to
pub const BIND_PORT: u16 = 5000;

/// Environment variable that overrides the greeting
pub const GREETING_ENV: &str = "GREETING_MESSAGE";
/// Greeting used when the environment variable is unset
pub const DEFAULT_GREETING: &str = "Hello from Cortex Cloud Lab!";

/// Resolve the current greeting message from the process environment,
/// falling back to [`DEFAULT_GREETING`] when the variable is unset.
pub fn greeting_message() -> String {
    env::var(GREETING_ENV).unwrap_or_else(|_| DEFAULT_GREETING.into())
}
