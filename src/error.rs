use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while diffing, patching or synchronizing.
///
/// None of these are transient. They point at a malformed edit script or at a misused API,
/// so they are propagated to the caller instead of being retried or swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
	/// An edit addressed a position outside the live sequence as it stood when the edit was due.
	#[error("edit position {position} is out of range for a live sequence of length {len}")]
	PositionOutOfRange { position: usize, len: usize },

	/// An edit referred to a source node that doesn't exist or was already moved into the live tree.
	#[error("source node {index} is unavailable (out of range or already moved)")]
	SourceUnavailable { index: usize },

	#[error("invalid operation: {0}")]
	InvalidOperation(&'static str),

	#[error("depth limit of {0} reached")]
	DepthLimit(usize),
}
