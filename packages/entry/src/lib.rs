#![deny(clippy::all)]

/**
 * Mini-app Entry Resolver
 *
 * Computes the set of build entries for a page-based mini-app project:
 * one entry for the root application file, one per discovered page, and
 * one per component reachable through `usingComponents` sidecar configs.
 */
pub mod component;
pub mod diagnostics;
pub mod entry;
pub mod paths;
pub mod resolver;

pub use entry::EntryDescriptor;
pub use resolver::{EntryResolver, Resolution, ResolverOptions};

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
