//! HTML content helpers for the cortexweb server.
//!
/// Render the greeting fragment served at `/`.
///
/// The message is substituted verbatim. No HTML escaping is applied, so a
/// message containing markup reaches the client unmodified. Known
/// limitation kept for compatibility with existing deployments.
pub fn greeting_page(message: &str) -> String {
    format!("<h1>{}</h1>", message)
}
