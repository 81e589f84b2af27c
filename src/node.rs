//! The typed tree shared by the differ, the patcher and the synchronizer.

use crate::state::FormState;
use hashbrown::hash_map::DefaultHashBuilder;
use indexmap::IndexMap;

/// Attribute name → value, in insertion order.
pub type Attributes = IndexMap<String, String, DefaultHashBuilder>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Element,
	Text,
	Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
	Comment(String),
}

/// An element with its attributes, children and the implicit state derived from them.
///
/// The tag name is ASCII-lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub(crate) name: String,
	pub(crate) attributes: Attributes,
	pub(crate) children: Vec<Node>,
	pub(crate) state: FormState,
}

impl Element {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		let mut name = name.into();
		name.make_ascii_lowercase();
		Self {
			name,
			attributes: Attributes::default(),
			children: Vec::new(),
			state: FormState::default(),
		}
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	#[must_use]
	pub fn with_child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	#[must_use]
	pub fn with_children<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	#[must_use]
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// The live child sequence, as handed to [`apply_patch`](`crate::patch::apply_patch`).
	pub fn children_mut(&mut self) -> &mut Vec<Node> {
		&mut self.children
	}

	#[must_use]
	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Changes implicit state without touching attributes, like a user ticking a checkbox does.
	pub fn state_mut(&mut self) -> &mut FormState {
		&mut self.state
	}

	/// Sets an attribute and then corrects implicit state, returning the previous value.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		let name = name.into();
		let value = value.into();
		self.state.attribute_set(&name, &value);
		self.attributes.insert(name, value)
	}

	/// Removes an attribute and then corrects implicit state, returning the removed value.
	///
	/// Implicit state is only reset if the attribute was actually present.
	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		let removed = self.attributes.shift_remove(name);
		if removed.is_some() {
			self.state.attribute_removed(name);
		}
		removed
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

impl Node {
	#[must_use]
	pub fn element(name: impl Into<String>) -> Self {
		Node::Element(Element::new(name))
	}

	#[must_use]
	pub fn text(text: impl Into<String>) -> Self {
		Node::Text(text.into())
	}

	#[must_use]
	pub fn comment(comment: impl Into<String>) -> Self {
		Node::Comment(comment.into())
	}

	#[must_use]
	pub fn kind(&self) -> NodeKind {
		match self {
			Node::Element(_) => NodeKind::Element,
			Node::Text(_) => NodeKind::Text,
			Node::Comment(_) => NodeKind::Comment,
		}
	}

	#[must_use]
	pub fn tag_name(&self) -> Option<&str> {
		self.as_element().map(Element::name)
	}

	#[must_use]
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			Node::Text(_) | Node::Comment(_) => None,
		}
	}

	pub fn as_element_mut(&mut self) -> Option<&mut Element> {
		match self {
			Node::Element(element) => Some(element),
			Node::Text(_) | Node::Comment(_) => None,
		}
	}

	/// The payload of a text or comment node.
	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Node::Text(text) | Node::Comment(text) => Some(text),
			Node::Element(_) => None,
		}
	}

	/// Children of an element. Text and comment nodes have none.
	#[must_use]
	pub fn children(&self) -> &[Node] {
		match self {
			Node::Element(element) => &element.children,
			Node::Text(_) | Node::Comment(_) => &[],
		}
	}

	/// Whether two nodes can occupy the same slot without replacing the subtree.
	///
	/// Only the variant and (for elements) the tag name count. Attributes, children and payloads don't.
	#[must_use]
	pub fn is_type_compatible(&self, other: &Node) -> bool {
		match (self, other) {
			(Node::Element(a), Node::Element(b)) => a.name.eq_ignore_ascii_case(&b.name),
			(Node::Text(_), Node::Text(_)) | (Node::Comment(_), Node::Comment(_)) => true,
			_ => false,
		}
	}

	/// Pre-order traversal of this node and everything below it.
	#[must_use]
	pub fn descendants(&self) -> Descendants<'_> {
		Descendants { stack: vec![self] }
	}

	/// Finds the first element (in document order) whose `id` attribute is `id`.
	#[must_use]
	pub fn find_by_id(&self, id: &str) -> Option<&Element> {
		self.descendants().filter_map(Node::as_element).find(|element| element.attribute("id") == Some(id))
	}
}

pub struct Descendants<'a> {
	stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
	type Item = &'a Node;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.children().iter().rev());
		Some(node)
	}
}
