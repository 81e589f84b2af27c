//! Recursive, in-place synchronization of a live tree with a freshly rendered one.

use crate::{
	diff::{self, Edit},
	error::{Error, Result},
	node::{Element, Node},
	patch::{self, SourceNodes},
	state,
};
use core::{mem, ops::Sub};
use tracing::{info, instrument, level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
	/// How many tree levels a single pass may descend, counting the root as one.
	pub depth_limit: usize,
}

impl SyncOptions {
	pub const DEFAULT_DEPTH_LIMIT: usize = 512;

	#[must_use]
	pub fn new() -> Self {
		Self { depth_limit: Self::DEFAULT_DEPTH_LIMIT }
	}

	#[must_use]
	pub fn with_depth_limit(self, depth_limit: usize) -> Self {
		Self { depth_limit }
	}
}

impl Default for SyncOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// What a synchronization changed in the live tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
	pub replaced_nodes: usize,
	pub inserted_nodes: usize,
	pub removed_nodes: usize,
	pub removed_attributes: usize,
	pub set_attributes: usize,
	pub state_corrections: usize,
	pub content_updates: usize,
}

impl Sub for SyncReport {
	type Output = Self;

	fn sub(self, before: Self) -> Self {
		Self {
			replaced_nodes: self.replaced_nodes - before.replaced_nodes,
			inserted_nodes: self.inserted_nodes - before.inserted_nodes,
			removed_nodes: self.removed_nodes - before.removed_nodes,
			removed_attributes: self.removed_attributes - before.removed_attributes,
			set_attributes: self.set_attributes - before.set_attributes,
			state_corrections: self.state_corrections - before.state_corrections,
			content_updates: self.content_updates - before.content_updates,
		}
	}
}

impl SyncReport {
	/// No node was replaced, inserted or removed.
	#[must_use]
	pub fn is_structurally_unchanged(&self) -> bool {
		self.replaced_nodes == 0 && self.inserted_nodes == 0 && self.removed_nodes == 0
	}
}

/// Synchronizes `live` with `new` using default options.
///
/// If the two aren't [type-compatible](`Node::is_type_compatible`), `live` is replaced by `new` wholesale.
/// Otherwise attributes, implicit state, children and payloads are reconciled in place.
///
/// `new` is consumed: some of its nodes end up in the live tree.
///
/// # Errors
///
/// See [`Synchronizer::synchronize`].
pub fn synchronize(new: Node, live: &mut Node) -> Result<SyncReport> {
	let mut synchronizer = Synchronizer::default();
	synchronizer.synchronize(new, live)?;
	Ok(synchronizer.take_report())
}

/// Runs synchronization passes and accumulates a [`SyncReport`] across them.
///
/// # Correct Use
///
/// Event listeners attached to replaced or removed nodes aren't known here.
/// Detach them before a pass and reattach afterwards.
#[derive(Debug, Default)]
pub struct Synchronizer {
	options: SyncOptions,
	report: SyncReport,
}

impl Synchronizer {
	#[must_use]
	pub fn new(options: SyncOptions) -> Self {
		Self { options, report: SyncReport::default() }
	}

	#[must_use]
	pub fn options(&self) -> SyncOptions {
		self.options
	}

	#[must_use]
	pub fn report(&self) -> SyncReport {
		self.report
	}

	pub fn take_report(&mut self) -> SyncReport {
		mem::take(&mut self.report)
	}

	/// # Errors
	///
	/// - [`Error::DepthLimit`] if the trees are deeper than [`SyncOptions::depth_limit`].
	/// - [`Error::PositionOutOfRange`] or [`Error::SourceUnavailable`] if a child edit script is malformed,
	///   which points at a bug in the matchers.
	///
	/// On error, the live tree is left partially synchronized but structurally sound.
	#[instrument(skip_all, fields(new = ?new.kind(), live = ?live.kind()))]
	pub fn synchronize(&mut self, new: Node, live: &mut Node) -> Result<()> {
		let before = self.report;
		let result = self.sync_node(new, live, self.options.depth_limit);

		let pass = self.report - before;
		info!(?pass, "Synchronization pass finished.");
		result
	}

	fn sync_node(&mut self, new: Node, live: &mut Node, depth_limit: usize) -> Result<()> {
		if depth_limit == 0 {
			return Err(Error::DepthLimit(self.options.depth_limit));
		}

		match (new, live) {
			(Node::Element(new), Node::Element(live)) if new.name.eq_ignore_ascii_case(&live.name) => {
				let span = trace_span!("Synchronizing element", tag = live.name());
				let _enter = span.enter();
				self.sync_element(new, live, depth_limit)
			}
			(Node::Text(new), Node::Text(live)) | (Node::Comment(new), Node::Comment(live)) => {
				let span = trace_span!("Synchronizing payload", len = new.len());
				let _enter = span.enter();
				if *live != new {
					if cfg!(feature = "dangerous-logging") {
						trace!(from = %live, to = %new, "Updating payload.");
					}
					self.report.content_updates += 1;
				}
				*live = new;
				Ok(())
			}

			// Mismatching nodes: Replace wholesale.
			(new, live) => {
				let span = trace_span!("Replace mismatching", new = ?new.kind(), live = ?live.kind());
				let _enter = span.enter();
				if STATIC_MAX_LEVEL >= Level::WARN && depth_limit == self.options.depth_limit {
					warn!(new = ?new.tag_name(), live = ?live.tag_name(), "Replacing the whole root.");
				}
				*live = new;
				self.report.replaced_nodes += 1;
				Ok(())
			}
		}
	}

	fn sync_element(&mut self, new: Element, live: &mut Element, depth_limit: usize) -> Result<()> {
		let Element { attributes, children, .. } = new;

		let stale: Vec<String> = live.attributes().keys().filter(|name| !attributes.contains_key(name.as_str())).cloned().collect();
		for name in stale.iter().rev() {
			live.remove_attribute(name);
			self.report.removed_attributes += 1;
			if state::link(name).is_some() {
				trace!(attribute = %name, "Reset implicit state.");
				self.report.state_corrections += 1;
			}
		}

		for (name, value) in attributes {
			if cfg!(feature = "dangerous-logging") {
				trace!(attribute = %name, %value, "Setting attribute.");
			}
			if state::link(&name).is_some() {
				self.report.state_corrections += 1;
			}
			live.set_attribute(name, value);
			self.report.set_attributes += 1;
		}

		self.sync_children(children, live, depth_limit)
	}

	#[instrument(skip_all, fields(tag = live.name(), new = children.len(), old = live.children().len()))]
	fn sync_children(&mut self, children: Vec<Node>, live: &mut Element, depth_limit: usize) -> Result<()> {
		let script = diff::diff_children(&children, live.children());
		let mut edits = SyncReport::default();
		for edit in &script {
			match edit {
				Edit::Replace { .. } => edits.replaced_nodes += 1,
				Edit::Insert { .. } => edits.inserted_nodes += 1,
				Edit::Remove { .. } => edits.removed_nodes += 1,
			}
		}

		let mut sources = SourceNodes::new(children);
		let script = script.resolve(&mut sources)?;
		patch::apply_patch(live.children_mut(), script)?;
		self.report.replaced_nodes += edits.replaced_nodes;
		self.report.inserted_nodes += edits.inserted_nodes;
		self.report.removed_nodes += edits.removed_nodes;
		debug_assert_eq!(live.children().len(), sources.len());

		for (k, source) in sources.into_iter().enumerate() {
			// Moved in by the patch, so already exactly what was rendered.
			let Some(source) = source else { continue };

			let len = live.children().len();
			let live_child = live.children_mut().get_mut(k).ok_or(Error::PositionOutOfRange { position: k, len })?;
			self.sync_node(source, live_child, depth_limit - 1)?;
		}
		Ok(())
	}
}
