use resync_dom::{
	diff::{self, Selection},
	diff_children,
	matcher::Bias,
	Edit, EditScript, Node,
};


fn div() -> Node {
	Node::element("div")
}

fn span() -> Node {
	Node::element("span")
}

fn p() -> Node {
	Node::element("p")
}

fn selection(bias: Bias, edits: Vec<Edit>) -> Selection {
	Selection { bias, script: EditScript::from(edits) }
}

#[test]
fn appended_node() {
	tracing_::init();
	assert_eq!(diff::select(&[div(), span()], &[div()]), selection(Bias::Insert, vec![Edit::Insert { position: 1, node: 1 }]));
}

#[test]
fn removed_last_node() {
	tracing_::init();
	assert_eq!(diff_children(&[div()], &[div(), span()]), EditScript::from(vec![Edit::Remove { position: 1 }]));
}

#[test]
fn removed_middle_node_falls_through_to_remove_bias() {
	tracing_::init();
	assert_eq!(diff::select(&[div(), p()], &[div(), span(), p()]), selection(Bias::Remove, vec![Edit::Remove { position: 1 }]));
}

#[test]
fn pure_replacement_prefers_paired() {
	tracing_::init();
	assert_eq!(
		diff::select(&[span(), p(), Node::text("t")], &[div(), div(), div()]),
		selection(
			Bias::Paired,
			vec![
				Edit::Replace { position: 0, node: 0 },
				Edit::Replace { position: 1, node: 1 },
				Edit::Replace { position: 2, node: 2 },
			],
		),
	);
}

#[test]
fn ties_go_to_the_first_matcher() {
	tracing_::init();
	// Every matcher needs two edits to swap these.
	assert_eq!(
		diff::select(&[div(), span()], &[span(), div()]),
		selection(Bias::Insert, vec![Edit::Insert { position: 0, node: 0 }, Edit::Remove { position: 2 }]),
	);
}

#[test]
fn empty_old_sequence_is_all_insertions() {
	tracing_::init();
	assert_eq!(
		diff::select(&[div(), span()], &[]),
		selection(Bias::Insert, vec![Edit::Insert { position: 0, node: 0 }, Edit::Insert { position: 1, node: 1 }]),
	);
}

#[test]
fn empty_new_sequence_is_all_removals() {
	tracing_::init();
	assert_eq!(
		diff::select(&[], &[div(), span()]),
		selection(Bias::Insert, vec![Edit::Remove { position: 0 }, Edit::Remove { position: 0 }]),
	);
}

#[test]
fn identical_sequences() {
	tracing_::init();
	assert!(diff_children(&[div(), Node::text("a")], &[div(), Node::text("b")]).is_empty());
}
