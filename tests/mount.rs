use resync_dom::{Element, Error, Mount, Node, SyncOptions, SyncReport};


fn form(fields: &[&str]) -> Node {
	Element::new("form").with_children(fields.iter().map(|id| Element::new("input").with_attribute("id", *id))).into()
}

fn body() -> Element {
	Element::new("body")
}

#[test]
fn update_needs_a_mounted_root() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	assert!(matches!(mount.update(form(&[])), Err(Error::InvalidOperation(_))));
	assert!(mount.container().children().is_empty());
}

#[test]
fn mounting_twice_is_rejected() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	mount.attach(form(&[])).unwrap();
	assert!(matches!(mount.attach(form(&[])), Err(Error::InvalidOperation(_))));
	assert!(matches!(mount.hydrate(0), Err(Error::InvalidOperation(_))));
	assert_eq!(mount.container().children().len(), 1);
}

#[test]
fn hydrate_needs_an_existing_child() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	assert!(matches!(mount.hydrate(0), Err(Error::InvalidOperation(_))));
	assert!(!mount.is_mounted());
}

#[test]
fn hydrated_root_is_updated_in_place() {
	tracing_::init();
	let container = body().with_child(Node::text("header")).with_child(form(&["a"]));
	let mut mount = Mount::new(container, SyncOptions::default());
	mount.hydrate(1).unwrap();

	let report = mount.update(form(&["a", "b"])).unwrap();

	assert_eq!(report.inserted_nodes, 1);
	assert_eq!(mount.root(), Some(&form(&["a", "b"])));
	assert_eq!(mount.container().children()[0], Node::text("header"));
}

#[test]
fn replaced_root_is_picked_up_from_its_slot() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	mount.attach(form(&[])).unwrap();

	let report = mount.update(Node::element("section")).unwrap();

	assert_eq!(report.replaced_nodes, 1);
	assert_eq!(mount.root().and_then(Node::tag_name), Some("section"));
}

#[test]
fn focus_survives_updates_that_keep_the_element() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	mount.attach(form(&["name", "email"])).unwrap();

	assert!(!mount.focus("missing"));
	assert!(mount.focus("email"));

	mount.update(form(&["name", "email", "phone"])).unwrap();
	assert_eq!(mount.focused().and_then(|input| input.attribute("id")), Some("email"));

	mount.update(form(&["name"])).unwrap();
	assert!(mount.focused().is_none());

	// Dropped for good, even if the element comes back.
	mount.update(form(&["name", "email"])).unwrap();
	assert!(mount.focused().is_none());
}

#[test]
fn blur_drops_focus() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::default());
	mount.attach(form(&["name"])).unwrap();
	assert!(mount.focus("name"));
	mount.blur();
	assert!(mount.focused().is_none());
}

#[test]
fn unmount_detaches_the_root() {
	tracing_::init();
	let mut mount = Mount::new(body().with_child(Node::comment("before")), SyncOptions::default());
	mount.attach(form(&["x"])).unwrap();

	assert_eq!(mount.unmount(), Some(form(&["x"])));
	assert!(!mount.is_mounted());
	assert_eq!(mount.unmount(), None);
	assert_eq!(mount.into_container().children(), [Node::comment("before")]);
}

#[test]
fn failed_update_does_not_leak_into_the_next_report() {
	tracing_::init();
	let mut mount = Mount::new(body(), SyncOptions::new().with_depth_limit(1));
	mount.attach(Element::new("div").with_child(Node::text("a")).into()).unwrap();

	let error = mount.update(Element::new("div").with_child(Node::text("b")).with_child(Node::element("p")).into()).unwrap_err();
	assert_eq!(error, Error::DepthLimit(1));

	let report = mount.update(Node::comment("x")).unwrap();
	assert_eq!(report, SyncReport { replaced_nodes: 1, ..SyncReport::default() });
}
