#![doc(html_root_url = "https://docs.rs/resync-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Keeps a live node tree in sync with a freshly rendered one by patching it in place.
//!
//! [`synchronize`] walks both trees node by node. Type-compatible nodes are reconciled
//! (attributes, [implicit state](`state`), children, payloads), anything else is replaced wholesale.
//! Child sequences are matched by [`diff::diff_children`] and patched by [`patch::apply_patch`].

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod diff;
pub mod error;
pub mod matcher;
pub mod mount;
pub mod node;
pub mod patch;
pub mod state;
pub mod sync;

pub use diff::{diff_children, Edit, EditScript};
pub use error::{Error, Result};
pub use mount::Mount;
pub use node::{Element, Node, NodeKind};
pub use patch::apply_patch;
pub use sync::{synchronize, SyncOptions, SyncReport, Synchronizer};
