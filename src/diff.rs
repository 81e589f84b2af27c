//! Edit scripts and the selector that picks the shortest one among the [matchers](`crate::matcher`).

use crate::{
	matcher::{self, Bias},
	node::Node,
};
use core::slice;
use tracing::{instrument, trace};

/// A single structural edit of a live child sequence.
///
/// `T` is what gets placed into the live sequence: an index into the desired sequence while
/// diffing, the node itself once [resolved](`EditScript::resolve`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T = usize> {
	/// The live node at `position` is swapped for `node`.
	Replace { position: usize, node: T },
	/// `node` is placed so that it ends up at `position`,
	/// i.e. right after the live node at `position - 1`. `position` may equal the live length.
	///
	/// Addressing the slot the node lands in (rather than the node it follows) is what lets
	/// `Insert { position: 0, .. }` express an insertion at the front. With it, every position a
	/// [matcher](`crate::matcher`) emits equals its cursor into the desired sequence.
	Insert { position: usize, node: T },
	/// The live node at `position` is discarded.
	Remove { position: usize },
}

impl<T> Edit<T> {
	#[must_use]
	pub fn position(&self) -> usize {
		match *self {
			Edit::Replace { position, .. } | Edit::Insert { position, .. } | Edit::Remove { position } => position,
		}
	}

	#[must_use]
	pub fn node(&self) -> Option<&T> {
		match self {
			Edit::Replace { node, .. } | Edit::Insert { node, .. } => Some(node),
			Edit::Remove { .. } => None,
		}
	}

	pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Edit<U>, E> {
		Ok(match self {
			Edit::Replace { position, node } => Edit::Replace { position, node: f(node)? },
			Edit::Insert { position, node } => Edit::Insert { position, node: f(node)? },
			Edit::Remove { position } => Edit::Remove { position },
		})
	}
}

/// Edits that have to be applied strictly in order, as each position assumes the ones before it were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T = usize>(Vec<Edit<T>>);

impl<T> Default for EditScript<T> {
	fn default() -> Self {
		Self(Vec::new())
	}
}

impl<T> EditScript<T> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn push(&mut self, edit: Edit<T>) {
		self.0.push(edit);
	}

	pub fn iter(&self) -> slice::Iter<'_, Edit<T>> {
		self.0.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Edit<T>] {
		&self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<Edit<T>> {
		self.0
	}
}

impl<T> From<Vec<Edit<T>>> for EditScript<T> {
	fn from(edits: Vec<Edit<T>>) -> Self {
		Self(edits)
	}
}

impl<T> FromIterator<Edit<T>> for EditScript<T> {
	fn from_iter<I: IntoIterator<Item = Edit<T>>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<T> IntoIterator for EditScript<T> {
	type Item = Edit<T>;
	type IntoIter = std::vec::IntoIter<Edit<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
	type Item = &'a Edit<T>;
	type IntoIter = slice::Iter<'a, Edit<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// The script chosen by [`select`], along with the matcher that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	pub bias: Bias,
	pub script: EditScript,
}

/// Runs the matchers cheapest-first and returns the shortest script.
///
/// The insert-biased matcher runs first. Its result is returned right away if it has at most one edit
/// or if either sequence is empty. Otherwise the remove-biased matcher runs and is returned if it has at most one edit.
/// Otherwise the paired matcher runs too, and the shortest of the three wins, ties going to whichever ran first.
#[instrument(skip_all, fields(new = new.len(), old = old.len()))]
#[must_use]
pub fn select(new: &[Node], old: &[Node]) -> Selection {
	let insert_biased = matcher::insert_biased(new, old);
	if insert_biased.len() <= 1 || new.is_empty() || old.is_empty() {
		trace!(edits = insert_biased.len(), "Insert-biased script accepted early.");
		return Selection { bias: Bias::Insert, script: insert_biased };
	}

	let remove_biased = matcher::remove_biased(new, old);
	if remove_biased.len() <= 1 {
		trace!(edits = remove_biased.len(), "Remove-biased script accepted early.");
		return Selection { bias: Bias::Remove, script: remove_biased };
	}

	let paired = matcher::paired(new, old);
	trace!(insert_biased = insert_biased.len(), remove_biased = remove_biased.len(), paired = paired.len(), "Comparing all matchers.");
	let mut best = Selection { bias: Bias::Insert, script: insert_biased };
	for candidate in [Selection { bias: Bias::Remove, script: remove_biased }, Selection { bias: Bias::Paired, script: paired }] {
		if candidate.script.len() < best.script.len() {
			best = candidate;
		}
	}
	best
}

/// Computes the edit script turning `old` into a sequence that's pairwise type-compatible with `new`.
#[must_use]
pub fn diff_children(new: &[Node], old: &[Node]) -> EditScript {
	select(new, old).script
}

