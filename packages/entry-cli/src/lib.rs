#![deny(clippy::all)]

/**
 * Mini-app Entry CLI
 *
 * Command line front-end that emits the resolved entry plan for the host
 * build tool
 */
pub mod main_entry;
pub mod plan;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
