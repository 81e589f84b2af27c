//! Implicit element state that mirrors, but isn't identical to, attributes.
//!
//! Changing `checked`, `disabled` or `value` attributes on a live form control doesn't reliably
//! change what the control *shows*, since user interaction detaches the two. Every attribute
//! mutation therefore runs through [`STATE_LINKS`], which says how the live state follows.

/// The live interactive properties of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	pub disabled: bool,
	pub value: String,
	pub checked: bool,
}

/// A single correction applied to a [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateUpdate {
	Disabled(bool),
	Checked(bool),
	/// Resets the value to the empty string.
	ClearValue,
	/// Copies the attribute's new value into the value state.
	CopyValue,
}

impl StateUpdate {
	pub fn apply(self, state: &mut FormState, attribute_value: &str) {
		match self {
			StateUpdate::Disabled(disabled) => state.disabled = disabled,
			StateUpdate::Checked(checked) => state.checked = checked,
			StateUpdate::ClearValue => state.value.clear(),
			StateUpdate::CopyValue => {
				state.value.clear();
				state.value.push_str(attribute_value);
			}
		}
	}
}

/// How an attribute drives implicit state when it is removed or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateLink {
	pub attribute: &'static str,
	pub on_remove: StateUpdate,
	pub on_set: StateUpdate,
}

pub static STATE_LINKS: &[StateLink] = &[
	StateLink {
		attribute: "disabled",
		on_remove: StateUpdate::Disabled(false),
		on_set: StateUpdate::Disabled(true),
	},
	StateLink {
		attribute: "value",
		on_remove: StateUpdate::ClearValue,
		on_set: StateUpdate::CopyValue,
	},
	StateLink {
		attribute: "checked",
		on_remove: StateUpdate::Checked(false),
		on_set: StateUpdate::Checked(true),
	},
];

/// Looks up the state link for an attribute name, if it has one.
#[must_use]
pub fn link(attribute: &str) -> Option<&'static StateLink> {
	STATE_LINKS.iter().find(|link| link.attribute == attribute)
}

impl FormState {
	/// Derives state from a complete attribute mapping, as for a freshly created element.
	pub fn derive<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		let mut state = Self::default();
		for (name, value) in attributes {
			state.attribute_set(name, value);
		}
		state
	}

	/// Returns whether `name` is state-linked, i.e. whether anything was corrected.
	pub fn attribute_removed(&mut self, name: &str) -> bool {
		link(name).map(|link| link.on_remove.apply(self, "")).is_some()
	}

	/// Returns whether `name` is state-linked, i.e. whether anything was corrected.
	pub fn attribute_set(&mut self, name: &str, value: &str) -> bool {
		link(name).map(|link| link.on_set.apply(self, value)).is_some()
	}
}
