use linked_bst::{Error, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map counting how many
/// copies of each item should be in it. This way we can ensure that after a
/// random smattering of adds and removes we hold the same items as the map.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut BTreeMap<T, usize>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                let removed = bst.remove(x);
                match counts.get_mut(x) {
                    Some(count) => {
                        if removed.as_ref() != Ok(x) {
                            return false;
                        }
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(x);
                        }
                    }
                    None => {
                        if removed != Err(Error::NotFound) {
                            return false;
                        }
                    }
                }
            }
            Op::Rebalance => {
                bst.rebalance();
            }
        }
    }

    true
}

#[test]
fn round_trip_example() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(
        tree.inorder().copied().collect::<Vec<_>>(),
        [1, 3, 4, 5, 7, 8, 9]
    );

    assert_eq!(tree.successor(&4), Some(&5));
    assert_eq!(tree.predecessor(&4), Some(&3));
    assert_eq!(tree.successor(&9), None);
    assert_eq!(
        tree.range_find(&3, &8).copied().collect::<Vec<_>>(),
        [3, 4, 5, 7, 8]
    );

    assert_eq!(tree.remove(&3), Ok(3));
    assert!(!tree.contains(&3));
    assert_eq!(tree.len(), 6);
    assert_eq!(
        tree.inorder().copied().collect::<Vec<_>>(),
        [1, 4, 5, 7, 8, 9]
    );
}

#[test]
fn sorted_insertion_then_rebalance() {
    let mut tree = Tree::new();
    for x in 1..=7 {
        tree.add(x);
    }
    assert_eq!(tree.height(), 6);

    assert_eq!(tree.rebalance().height(), 2);
    assert_eq!(tree.len(), 7);
}

#[test]
fn not_found_is_reported() {
    let mut tree: Tree<_> = ["b", "a"].into_iter().collect();

    let err = tree.remove(&"c").unwrap_err();
    assert_eq!(err, Error::NotFound);
    assert_eq!(err.to_string(), "item not in tree");
    assert_eq!(tree.len(), 2);
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts)
            && tree.len() == counts.values().sum::<usize>()
            && tree.len() == tree.iter().count()
            && counts.keys().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut sorted = xs;
        sorted.sort();
        tree.inorder().copied().eq(sorted)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for remove in &removes {
            // Remove every copy that was added.
            while tree.remove(remove).is_ok() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !removes.contains(x));

        removes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();

        let once: Vec<_> = tree.rebalance().iter().copied().collect();
        let twice: Vec<_> = tree.rebalance().iter().copied().collect();
        once == twice && tree.inorder().len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn range_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut expected: Vec<_> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
        expected.sort();
        tree.range_find(&low, &high).copied().eq(expected)
    }
}
