//! Applying edit scripts to a live child sequence.

use crate::{
	diff::{Edit, EditScript},
	error::{Error, Result},
	node::Node,
};
use core::mem;
use tracing::{instrument, trace};

/// The desired child sequence, from which a resolved script moves nodes into the live tree.
///
/// After patching, an empty slot at `k` means that exact node now lives at live position `k`.
#[derive(Debug, Default)]
pub struct SourceNodes(Vec<Option<Node>>);

impl SourceNodes {
	#[must_use]
	pub fn new(nodes: Vec<Node>) -> Self {
		Self(nodes.into_iter().map(Some).collect())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Moves the node at `index` out.
	///
	/// # Errors
	///
	/// [`Error::SourceUnavailable`] if there's no such node or it was already moved.
	pub fn take(&mut self, index: usize) -> Result<Node> {
		self.0.get_mut(index).and_then(Option::take).ok_or(Error::SourceUnavailable { index })
	}

	#[must_use]
	pub fn is_moved(&self, index: usize) -> bool {
		matches!(self.0.get(index), Some(None))
	}
}

impl IntoIterator for SourceNodes {
	type Item = Option<Node>;
	type IntoIter = std::vec::IntoIter<Option<Node>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl EditScript<usize> {
	/// Swaps source indices for the source nodes themselves.
	///
	/// # Errors
	///
	/// [`Error::SourceUnavailable`] if an index is out of range or referenced twice.
	/// `sources` may be partially consumed in that case.
	pub fn resolve(self, sources: &mut SourceNodes) -> Result<EditScript<Node>> {
		self.into_iter().map(|edit| edit.try_map(|index| sources.take(index))).collect()
	}
}

/// Checks every edit against the live length it will see, without touching anything.
fn validate<T>(script: &EditScript<T>, mut len: usize) -> Result<()> {
	for edit in script {
		match *edit {
			Edit::Replace { position, .. } if position < len => (),
			Edit::Insert { position, .. } if position <= len => len += 1,
			Edit::Remove { position } if position < len => len -= 1,
			_ => return Err(Error::PositionOutOfRange { position: edit.position(), len }),
		}
	}
	Ok(())
}

/// Applies `script` to `live` in order.
///
/// Replaced and removed nodes are dropped. Nodes in the script are moved into `live`.
///
/// # Errors
///
/// [`Error::PositionOutOfRange`] if any edit doesn't fit the live sequence as it would stand at that point.
/// The whole script is checked first, so `live` is left unchanged in that case.
#[instrument(skip_all, fields(live = live.len(), edits = script.len()))]
pub fn apply_patch(live: &mut Vec<Node>, script: EditScript<Node>) -> Result<()> {
	validate(&script, live.len())?;

	for edit in script {
		match edit {
			Edit::Replace { position, node } => {
				let discarded = mem::replace(&mut live[position], node);
				trace!(position, discarded = ?discarded.kind(), "Replaced.");
			}
			Edit::Insert { position, node } => {
				trace!(position, kind = ?node.kind(), "Inserting.");
				live.insert(position, node);
			}
			Edit::Remove { position } => {
				let discarded = live.remove(position);
				trace!(position, discarded = ?discarded.kind(), "Removed.");
			}
		}
	}
	Ok(())
}
