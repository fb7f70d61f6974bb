use super::*;
use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::Rng;

fn collect(n: &Node<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    n.for_each(&mut |v| out.push(*v));
    out
}

fn check(n: &Node<i32>) {
    let mut messages = Vec::new();
    n.check_invariants(&mut |m| messages.push(m), true);
    assert!(messages.is_empty(), "invariant violations: {messages:?}");
}

#[test]
fn empty_has_zero_size_and_depth() {
    let n: Node<i32> = Node::Empty;
    assert_eq!(n.size(), 0);
    assert_eq!(n.depth(), 0);
    assert!(n.is_empty());
}

#[test]
fn single_leaf_roundtrip() {
    let n = leaf::single_value(7);
    assert_eq!(n.size(), 1);
    assert_eq!(*n.get(0), 7);
    assert_eq!(*n.get_first(), 7);
    assert_eq!(*n.get_last(), 7);
}

#[test]
fn leaf_overflow_on_append_creates_branch() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..MAX_LEAF as i32 {
        n = n.append(i);
    }
    assert_eq!(n.size(), MAX_LEAF);
    assert!(matches!(n, Node::Leaf(_)));
    n = n.append(MAX_LEAF as i32);
    assert!(matches!(n, Node::Branch(_)));
    assert_eq!(n.size(), MAX_LEAF + 1);
    assert_eq!(collect(&n), (0..=MAX_LEAF as i32).collect::<Vec<_>>());
    check(&n);
}

#[test]
fn leaf_overflow_on_insert_splits_at_insertion_index() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..MAX_LEAF as i32 {
        n = n.append(i);
    }
    n = n.insert(10, 999);
    check(&n);
    let mut expected: Vec<i32> = (0..MAX_LEAF as i32).collect();
    expected.insert(10, 999);
    assert_eq!(collect(&n), expected);
}

#[test]
fn build_4096_by_append() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..4096 {
        n = n.append(i);
        if i % 131 == 0 {
            check(&n);
        }
    }
    check(&n);
    assert_eq!(n.size(), 4096);
    for i in 0..4096 {
        assert_eq!(*n.get(i as usize), i);
    }
}

#[test]
fn build_4096_by_insert_at_zero_reverses_order() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..4096 {
        n = n.insert(0, i);
    }
    check(&n);
    let expected: Vec<i32> = (0..4096).rev().collect();
    assert_eq!(collect(&n), expected);
}

#[test]
fn append_list_of_two_512_runs_then_delete_from_front() {
    let mut a: Node<i32> = Node::Empty;
    for i in 0..512 {
        a = a.append(i);
    }
    let mut b: Node<i32> = Node::Empty;
    for i in 0..512 {
        b = b.append(i);
    }
    let mut combined = append_nodes(&a, &b);
    check(&combined);
    assert_eq!(combined.size(), 1024);
    for _ in 0..512 {
        combined = combined.delete(0);
    }
    check(&combined);
    assert_eq!(collect(&combined), (0..512).collect::<Vec<_>>());
}

#[test]
fn sub_list_sweep_over_1122() {
    let mut n: Node<i32> = Node::Empty;
    for i in 1..=1122 {
        n = n.append(i);
    }
    let size = n.size();
    for offset in (0..size).step_by(37) {
        for limit in (offset..=size).step_by(41) {
            let sub = n.head(limit).tail(offset);
            let expected: Vec<i32> = ((offset as i32 + 1)..=(limit as i32)).collect();
            assert_eq!(collect(&sub), expected, "offset={offset} limit={limit}");
        }
    }
}

#[test]
fn push_pop_is_lifo() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..500 {
        n = n.prepend(i);
    }
    check(&n);
    for i in (0..500).rev() {
        let (v, rest) = n.pop();
        assert_eq!(v, i);
        n = rest;
    }
    assert!(n.is_empty());
}

#[quickcheck]
fn invariants_hold_after_random_insert_sequence(indices: Vec<u8>) -> TestResult {
    let mut n: Node<i32> = Node::Empty;
    let mut oracle: Vec<i32> = Vec::new();
    for (i, raw) in indices.into_iter().enumerate() {
        let size = oracle.len();
        let index = if size == 0 { 0 } else { raw as usize % (size + 1) };
        n = n.insert(index, i as i32);
        oracle.insert(index, i as i32);
    }
    n.check_invariants(&mut |m| panic!("invariant violation: {m}"), true);
    TestResult::from_bool(collect(&n) == oracle)
}

#[test]
fn random_index_insert_of_4096_matches_oracle() {
    let mut rng = rand::thread_rng();
    let mut n: Node<i32> = Node::Empty;
    let mut oracle: Vec<i32> = Vec::new();
    for i in 0..4096 {
        let index = if oracle.is_empty() {
            0
        } else {
            rng.gen_range(0..=oracle.len())
        };
        n = n.insert(index, i);
        oracle.insert(index, i);
    }
    check(&n);
    assert_eq!(collect(&n), oracle);
}

#[test]
fn set_get_law() {
    let mut n: Node<i32> = Node::Empty;
    for i in 0..200 {
        n = n.append(i);
    }
    let updated = n.set(50, -1);
    assert_eq!(*updated.get(50), -1);
    for i in 0..200 {
        if i != 50 {
            assert_eq!(*updated.get(i), *n.get(i));
        }
    }
}

#[test]
fn append_list_associativity() {
    let build = |from: i32, to: i32| -> Node<i32> {
        let mut n: Node<i32> = Node::Empty;
        for i in from..to {
            n = n.append(i);
        }
        n
    };
    let a = build(0, 50);
    let b = build(50, 130);
    let c = build(130, 400);
    let left = append_nodes(&append_nodes(&a, &b), &c);
    let right = append_nodes(&a, &append_nodes(&b, &c));
    assert_eq!(collect(&left), collect(&right));
    assert_eq!(collect(&left), (0..400).collect::<Vec<_>>());
}
