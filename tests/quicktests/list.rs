use adts::list::List;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a list and a `Vec` model. This way we
/// can ensure that after a random smattering of appends and removes the
/// list holds exactly the model's values in the model's order.
fn do_ops(ops: &[Op<i8>], list: &mut List<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                list.append(*x);
                model.push(*x);
            }
            Op::Remove(x) => {
                let expected = model
                    .iter()
                    .position(|m| m == x)
                    .map(|pos| model.remove(pos));
                assert_eq!(list.remove(x), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut list = List::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut list, &mut model);

    let forward: Vec<_> = list.iter().copied().collect();
    forward == model && list.len() == model.len()
}

#[quickcheck]
fn append_preserves_source_order(xs: Vec<i8>) -> bool {
    let list: List<_> = xs.iter().copied().collect();

    let forward: Vec<_> = list.iter().copied().collect();
    forward == xs
}

#[quickcheck]
fn prepend_reverses_source_order(xs: Vec<i8>) -> bool {
    let mut list = List::new();
    for x in &xs {
        list.prepend(*x);
    }

    let forward: Vec<_> = list.iter().copied().collect();
    let reversed: Vec<_> = xs.into_iter().rev().collect();
    forward == reversed
}

#[quickcheck]
fn head_and_tail_stay_consistent(ops: Vec<Op<i8>>) -> bool {
    let mut list = List::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut list, &mut model);

    // Head is absent exactly when tail is, and the chain from head
    // reaches the tail in exactly len - 1 steps with no cycle.
    if list.head().is_none() != list.tail().is_none() {
        return false;
    }
    let Some(head) = list.head() else {
        return list.len() == 0;
    };

    let mut steps = 0;
    let mut current = head;
    while let Some(next) = list.next(current) {
        current = next;
        steps += 1;
        if steps >= list.len() {
            return false;
        }
    }
    Some(current) == list.tail() && steps == list.len() - 1
}

#[quickcheck]
fn find_locates_the_first_match(xs: Vec<i8>, needle: i8) -> bool {
    let list: List<_> = xs.iter().copied().collect();

    match list.find(&needle) {
        Some(id) => {
            let position = xs.iter().position(|x| *x == needle).unwrap();
            let after: Vec<_> = xs[position + 1..].to_vec();
            // The chain after the found node matches the model after the
            // first occurrence.
            let mut rest = Vec::new();
            let mut next = list.next(id);
            while let Some(node) = next {
                rest.push(*list.value(node));
                next = list.next(node);
            }
            rest == after
        }
        None => !xs.contains(&needle),
    }
}
