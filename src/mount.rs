//! A view root mounted into a live container element.
//!
//! The container is the parent that whole-root replacement needs: updates address the view root
//! by its index among the container's children, so a root that is replaced wholesale is picked up
//! again from the same slot.

use crate::{
	error::{Error, Result},
	node::{Element, Node},
	sync::{SyncOptions, SyncReport, Synchronizer},
};
use tracing::{debug, instrument, trace};

#[derive(Debug)]
pub struct Mount {
	container: Element,
	index: Option<usize>,
	focus: Option<String>,
	synchronizer: Synchronizer,
}

impl Mount {
	#[must_use]
	pub fn new(container: Element, options: SyncOptions) -> Self {
		Self {
			container,
			index: None,
			focus: None,
			synchronizer: Synchronizer::new(options),
		}
	}

	#[must_use]
	pub fn container(&self) -> &Element {
		&self.container
	}

	#[must_use]
	pub fn into_container(self) -> Element {
		self.container
	}

	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.index.is_some()
	}

	/// The mounted view root.
	#[must_use]
	pub fn root(&self) -> Option<&Node> {
		self.index.and_then(|index| self.container.children().get(index))
	}

	/// Appends `root` to the container and mounts it.
	///
	/// # Errors
	///
	/// [`Error::InvalidOperation`] if a root is already mounted.
	pub fn attach(&mut self, root: Node) -> Result<()> {
		if self.is_mounted() {
			return Err(Error::InvalidOperation("a view root is already mounted"));
		}
		let children = self.container.children_mut();
		children.push(root);
		self.index = Some(children.len() - 1);
		trace!(index = self.index, "Attached view root.");
		Ok(())
	}

	/// Mounts the container's existing child at `index`, e.g. server-rendered markup.
	///
	/// # Errors
	///
	/// [`Error::InvalidOperation`] if a root is already mounted or there's no child at `index`.
	pub fn hydrate(&mut self, index: usize) -> Result<()> {
		if self.is_mounted() {
			return Err(Error::InvalidOperation("a view root is already mounted"));
		}
		if index >= self.container.children().len() {
			return Err(Error::InvalidOperation("no container child to hydrate at that index"));
		}
		self.index = Some(index);
		trace!(index, "Hydrated view root.");
		Ok(())
	}

	/// Synchronizes the mounted root with `new_root`, then restores focus if the focused element survived.
	///
	/// # Errors
	///
	/// [`Error::InvalidOperation`] if nothing is mounted, and whatever [`Synchronizer::synchronize`] returns.
	#[instrument(skip_all)]
	pub fn update(&mut self, new_root: Node) -> Result<SyncReport> {
		let index = self.index.ok_or(Error::InvalidOperation("no view root is mounted"))?;
		let live = self
			.container
			.children_mut()
			.get_mut(index)
			.ok_or(Error::InvalidOperation("the mounted view root is missing from its container"))?;

		let result = self.synchronizer.synchronize(new_root, live);
		// Taken even on failure, so a failed pass doesn't leak into the next report.
		let report = self.synchronizer.take_report();
		self.restore_focus();
		result.map(|()| report)
	}

	/// Detaches and returns the view root.
	pub fn unmount(&mut self) -> Option<Node> {
		let index = self.index.take()?;
		self.focus = None;
		let children = self.container.children_mut();
		(index < children.len()).then(|| children.remove(index))
	}

	/// Moves focus to the element with this `id`, if the mounted root contains one.
	pub fn focus(&mut self, id: &str) -> bool {
		let found = self.root().and_then(|root| root.find_by_id(id)).is_some();
		if found {
			self.focus = Some(id.to_owned());
		}
		found
	}

	pub fn blur(&mut self) {
		self.focus = None;
	}

	#[must_use]
	pub fn focused(&self) -> Option<&Element> {
		let id = self.focus.as_deref()?;
		self.root()?.find_by_id(id)
	}

	fn restore_focus(&mut self) {
		if self.focus.is_some() && self.focused().is_none() {
			debug!(id = ?self.focus, "Focused element is gone after the update. Dropping focus.");
			self.focus = None;
		}
	}
}
