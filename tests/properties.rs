//! Property tests for the stack contract

use bytestack::{RawStack, Stack, StackConfig};
use proptest::collection::vec;
use proptest::prelude::*;

/// Push-or-pop step for interleaved sequences
#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u8>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    #[test]
    fn prop_raw_lifo_order(values in vec(any::<u8>(), 0..128)) {
        let mut stack = RawStack::new(1).expect("failed to create stack");

        for value in &values {
            stack.push(&[*value]).expect("push failed");
        }
        for value in values.iter().rev() {
            prop_assert_eq!(stack.peek_top().unwrap(), &[*value]);
            stack.pop().expect("pop failed");
        }
        prop_assert!(stack.is_empty().unwrap());
    }

    #[test]
    fn prop_raw_size_invariant(ops in vec(op_strategy(), 0..256)) {
        let mut stack = RawStack::new(1).expect("failed to create stack");
        let mut pushes = 0usize;
        let mut pops = 0usize;

        for op in ops {
            match op {
                Op::Push(value) => {
                    stack.push(&[value]).expect("push failed");
                    pushes += 1;
                }
                Op::Pop => {
                    if stack.pop().is_ok() {
                        pops += 1;
                    }
                }
            }
            let len = stack.len().unwrap();
            prop_assert_eq!(len, pushes - pops);
            prop_assert!(len <= stack.capacity().unwrap());
        }
    }

    #[test]
    fn prop_raw_growth_preserves_values(values in vec(any::<u32>(), 1..64)) {
        let config = StackConfig { initial_capacity: 1, track_stats: false };
        let mut stack = RawStack::with_config(4, config).expect("failed to create stack");

        for value in &values {
            stack.push(&value.to_le_bytes()).expect("push failed");
        }
        prop_assert!(stack.capacity().unwrap() >= values.len());

        for value in values.iter().rev() {
            prop_assert_eq!(stack.peek_top().unwrap(), &value.to_le_bytes());
            stack.pop().expect("pop failed");
        }
    }

    #[test]
    fn prop_typed_lifo_order(values in vec(any::<i64>(), 0..128)) {
        let config = StackConfig { initial_capacity: 1, track_stats: false };
        let mut stack: Stack<i64> = Stack::with_config(config).expect("failed to create stack");

        for value in &values {
            stack.push(*value).expect("push failed");
        }
        for value in values.iter().rev() {
            prop_assert_eq!(*stack.peek_top().unwrap(), *value);
            stack.pop().expect("pop failed");
        }
        prop_assert!(stack.is_empty().unwrap());
    }

    #[test]
    fn prop_underflow_leaves_size(extra_pops in 1usize..8, values in vec(any::<u8>(), 0..16)) {
        let mut stack = RawStack::new(1).expect("failed to create stack");

        for value in &values {
            stack.push(&[*value]).expect("push failed");
        }
        for _ in 0..values.len() {
            stack.pop().expect("pop failed");
        }
        for _ in 0..extra_pops {
            prop_assert!(stack.pop().unwrap_err().is_underflow());
            prop_assert_eq!(stack.len().unwrap(), 0);
        }
    }
}
