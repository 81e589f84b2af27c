//! Three index-advancement heuristics for matching child sequences.
//!
//! All of them walk `new` and `old` in lockstep while neighbouring nodes are
//! [type-compatible](`Node::is_type_compatible`) and only differ in what they assume on a mismatch.
//! Content differences between compatible nodes never produce edits here; those are
//! reconciled later by the [synchronizer](`crate::sync`).

use crate::{
	diff::{Edit, EditScript},
	node::Node,
};

/// What a matcher concludes when `new[i]` and `old[j]` aren't type-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
	/// The slot was replaced: both cursors advance.
	/// Best for equal-length sequences and for pure appends or truncations.
	Paired,
	/// `new[i]` was inserted: only the new cursor advances.
	/// Best for a single added node.
	Insert,
	/// `old[j]` was removed: only the old cursor advances.
	/// Best for a single removed node.
	Remove,
}

#[must_use]
pub fn paired(new: &[Node], old: &[Node]) -> EditScript {
	scan(new, old, Bias::Paired)
}

#[must_use]
pub fn insert_biased(new: &[Node], old: &[Node]) -> EditScript {
	scan(new, old, Bias::Insert)
}

#[must_use]
pub fn remove_biased(new: &[Node], old: &[Node]) -> EditScript {
	scan(new, old, Bias::Remove)
}

#[must_use]
pub fn match_sequences(new: &[Node], old: &[Node], bias: Bias) -> EditScript {
	scan(new, old, bias)
}

/// Positions in the emitted script refer to the live sequence with all earlier edits applied.
///
/// `displacement` is the net count of insertions minus removals emitted so far,
/// so `j + displacement` is where `old[j]` currently sits. That is always `i`:
/// everything before it already matches `new[..i]`.
fn scan(new: &[Node], old: &[Node], bias: Bias) -> EditScript {
	let mut script = EditScript::new();
	let (mut i, mut j) = (0, 0);
	let mut displacement = 0_isize;

	let live = |j: usize, displacement: isize, i: usize| {
		let position = j.wrapping_add_signed(displacement);
		debug_assert_eq!(position, i);
		position
	};

	while i < new.len() && j < old.len() {
		if new[i].is_type_compatible(&old[j]) {
			i += 1;
			j += 1;
			continue;
		}

		match bias {
			Bias::Paired => {
				script.push(Edit::Replace { position: live(j, displacement, i), node: i });
				i += 1;
				j += 1;
			}
			Bias::Insert => {
				script.push(Edit::Insert { position: live(j, displacement, i), node: i });
				displacement += 1;
				i += 1;
			}
			Bias::Remove => {
				script.push(Edit::Remove { position: live(j, displacement, i) });
				displacement -= 1;
				j += 1;
			}
		}
	}

	for i in i..new.len() {
		script.push(Edit::Insert { position: live(j, displacement, i), node: i });
		displacement += 1;
	}

	let end = new.len();
	for j in j..old.len() {
		script.push(Edit::Remove { position: live(j, displacement, end) });
		displacement -= 1;
	}

	script
}
