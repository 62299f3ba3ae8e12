//! Source rewriting utilities for the guide site.
//!
//! The only tool here is the hero image patcher: it walks a source tree and
//! adds a missing attribute to every `<Image ... priority ... />` style
//! invocation, leaving tags that already carry it alone.

pub mod error;
pub mod patcher;
pub mod run;
pub mod walk;

pub use error::PatchError;
pub use patcher::{find_occurrences, patch_content, PatchRule, Patched, TagMatch};
pub use run::{run, Options, Summary};
pub use walk::{collect_sources, Walk, WalkError};
