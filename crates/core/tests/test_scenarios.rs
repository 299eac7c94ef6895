//! End-to-end stack pool scenarios
//!
//! Several stacks sharing one pool, exercised only through the public API.

use stack_pool::{Handle, PoolConfig, PoolError, StackPool};

fn build(pool: &mut StackPool<i32>, values: &[i32]) -> Handle {
    let mut s = pool.new_stack();
    for &v in values {
        s = pool.push(v, s).expect("push onto live stack");
    }
    s
}

fn contents(pool: &StackPool<i32>, s: Handle) -> Vec<i32> {
    pool.iter(s).copied().collect()
}

const PI: [i32; 11] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
const E: [i32; 11] = [8, 9, 7, 9, 3, 1, 1, 5, 9, 9, 7];

#[test]
fn test_iteration_is_reverse_push_order() {
    let mut pool = StackPool::with_capacity(22);
    let l1 = build(&mut pool, &PI);

    assert_eq!(contents(&pool, l1), vec![5, 3, 5, 6, 2, 9, 5, 1, 4, 1, 3]);
    assert_eq!(pool.iter(l1).max(), Some(&9));
    assert_eq!(pool.depth(l1), PI.len());
}

#[test]
fn test_independent_stacks_do_not_interfere() {
    let mut pool = StackPool::with_capacity(22);
    let l1 = build(&mut pool, &PI);
    let before = contents(&pool, l1);

    let mut l2 = build(&mut pool, &E);
    assert_eq!(pool.iter(l2).min(), Some(&1));
    assert_eq!(contents(&pool, l1), before);

    // Mutating the second stack leaves the first alone
    l2 = pool.pop(l2).unwrap();
    l2 = pool.pop(l2).unwrap();
    l2 = pool.push(42, l2).unwrap();
    assert_eq!(contents(&pool, l1), before);
    assert_eq!(pool.depth(l2), E.len() - 1);

    // No node is reachable from both stacks
    let mut nodes = Vec::new();
    for top in [l1, l2] {
        let mut it = pool.begin(top);
        while it != pool.end(top) {
            nodes.push(it.handle());
            it.advance(&pool);
        }
    }
    let total = nodes.len();
    nodes.sort();
    nodes.dedup();
    assert_eq!(nodes.len(), total);
}

#[test]
fn test_push_then_pop_restores_stack() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[1, 2, 3]);
    let before = contents(&pool, s);

    let pushed = pool.push(99, s).unwrap();
    assert_eq!(pool.value(pushed), Ok(&99));
    let rest = pool.pop(pushed).unwrap();

    assert_eq!(rest, s);
    assert_eq!(contents(&pool, rest), before);
}

#[test]
fn test_pop_then_push_reuses_node() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[3, 5]);
    assert_eq!(pool.value(s), Ok(&5));

    let rest = pool.pop(s).unwrap();
    assert_eq!(pool.value(rest), Ok(&3));

    let capacity = pool.capacity();
    let len = pool.len();
    let s = pool.push(7, rest).unwrap();
    assert_eq!(pool.capacity(), capacity);
    assert_eq!(pool.len(), len);
    assert_eq!(contents(&pool, s), vec![7, 3]);
}

#[test]
fn test_free_stack_makes_all_nodes_reusable() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[1, 2, 3, 4, 5]);

    let s = pool.free_stack(s).unwrap();
    assert_eq!(s, Handle::EMPTY);
    assert_eq!(pool.stats().free, 5);

    let capacity = pool.capacity();
    let fresh = build(&mut pool, &[10, 20, 30, 40, 50]);
    assert_eq!(pool.capacity(), capacity);
    assert_eq!(pool.len(), 5);
    assert_eq!(contents(&pool, fresh), vec![50, 40, 30, 20, 10]);
}

#[test]
fn test_pop_on_empty_stack_changes_nothing() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[1, 2, 3]);
    pool.pop(s).unwrap();
    let stats = pool.stats();

    assert_eq!(pool.pop(Handle::EMPTY), Ok(Handle::EMPTY));
    assert_eq!(pool.stats(), stats);

    // The next push still reuses the node freed above
    assert_eq!(pool.push(4, Handle::EMPTY), Ok(s));
}

#[test]
fn test_drained_stack_iterates_nothing() {
    let mut pool = StackPool::new();
    let mut s = build(&mut pool, &[1, 2, 3]);
    while !pool.empty(s) {
        s = pool.pop(s).unwrap();
    }
    assert_eq!(pool.begin(s), pool.end(s));
    assert_eq!(pool.iter(s).count(), 0);
    assert_eq!(pool.stats().live, 0);
}

#[test]
fn test_capacity_never_decreases() {
    let mut pool = StackPool::with_capacity(4);
    let mut last = pool.capacity();
    let mut stacks = vec![pool.new_stack(); 3];

    for round in 0..50 {
        let i = round % stacks.len();
        stacks[i] = match round % 5 {
            0 | 1 | 2 => pool.push(round as i32, stacks[i]).unwrap(),
            3 => pool.pop(stacks[i]).unwrap(),
            _ => pool.free_stack(stacks[i]).unwrap(),
        };
        if round % 7 == 0 {
            pool.reserve(round);
        }
        assert!(pool.capacity() >= last);
        last = pool.capacity();
    }
}

#[test]
fn test_invalid_handles_leave_pool_unchanged() {
    let mut pool = StackPool::with_config(&PoolConfig::new().with_strict_pop(true));
    let s = build(&mut pool, &[1, 2]);
    let rest = pool.pop(s).unwrap();
    let stats = pool.stats();

    assert_eq!(
        pool.push(5, s),
        Err(PoolError::InvalidIndexOnPush { handle: s })
    );
    assert_eq!(
        pool.pop(Handle::EMPTY),
        Err(PoolError::InvalidIndexOnPop {
            handle: Handle::EMPTY
        })
    );
    assert!(matches!(
        pool.value(Handle::from_raw(10)),
        Err(PoolError::OutOfRangeAccess { len: 2, .. })
    ));

    assert_eq!(pool.stats(), stats);
    assert_eq!(contents(&pool, rest), vec![1]);
}

#[test]
fn test_handle_below_top_is_rejected() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[1, 2, 3]);
    let other = build(&mut pool, &[7]);
    let mid = pool.next(s).unwrap();
    let stats = pool.stats();

    assert_eq!(
        pool.push(99, mid),
        Err(PoolError::InvalidIndexOnPush { handle: mid })
    );
    assert_eq!(
        pool.pop(mid),
        Err(PoolError::InvalidIndexOnPop { handle: mid })
    );
    assert_eq!(
        pool.free_stack(mid),
        Err(PoolError::InvalidIndexOnPop { handle: mid })
    );

    assert_eq!(pool.stats(), stats);
    assert_eq!(contents(&pool, s), vec![3, 2, 1]);
    assert_eq!(contents(&pool, other), vec![7]);

    // A fresh stack still grows storage instead of reusing a node of `s`
    let fresh = pool.push(42, Handle::EMPTY).unwrap();
    assert_eq!(pool.len(), stats.len + 1);
    assert_eq!(contents(&pool, s), vec![3, 2, 1]);
    assert_eq!(contents(&pool, fresh), vec![42]);
}

#[test]
fn test_popped_rest_is_a_valid_top() {
    let mut pool = StackPool::new();
    let s = build(&mut pool, &[1, 2, 3]);
    let rest = pool.pop(s).unwrap();

    let t = pool.push(5, rest).unwrap();
    assert_eq!(contents(&pool, t), vec![5, 2, 1]);
    let t = pool.free_stack(t).unwrap();
    assert!(pool.empty(t));
    assert_eq!(pool.stats().live, 0);
}
