use adts::bst::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a sorted-vec multiset model.
/// This way we can ensure that after a random smattering of inserts and
/// removes the tree holds exactly the model's values.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                model.push(*x);
            }
            Op::Remove(x) => {
                let expected = model
                    .iter()
                    .position(|m| m == x)
                    .map(|pos| model.remove(pos));
                assert_eq!(tree.remove(x), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    model.sort_unstable();

    let in_order: Vec<_> = tree.iter().copied().collect();
    in_order == model && tree.len() == model.len()
}

#[quickcheck]
fn in_order_iteration_never_descends(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);

    let in_order: Vec<_> = tree.iter().copied().collect();
    in_order.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // A delete takes out at most one of possibly many duplicates.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    still_present.iter().all(|x| tree.contains(x)) && tree.len() == still_present.len()
}

#[quickcheck]
fn min_matches_the_model(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min()
}

#[quickcheck]
fn round_trips_to_ascending_order(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    let in_order: Vec<_> = tree.iter().copied().collect();
    in_order == sorted
}
