//! Benchmark workloads for simvec.
//!
//! Provides deterministic inputs shared by the Criterion benches:
//!
//! - [`insert_positions`]: seeded insert offsets that stay within bounds
//! - [`mixed_ops`]: a seeded push/insert/erase/pop script
//! - [`run_mixed`]: replays a script against a [`DynamicArray`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simvec::{ArrayError, DynamicArray};

/// One step of a mixed workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Push(u32),
    /// Insert the value at the offset.
    Insert(usize, u32),
    /// Remove the element at the offset.
    Erase(usize),
    /// Drop the last element.
    Pop,
}

/// Generate `n` insert offsets for an array that starts empty and grows
/// by one per insert, so offset `i` is always in `[0, i]`.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|len| rng.gen_range(0..=len)).collect()
}

/// Generate a script of `n` operations that never violates a precondition
/// when replayed from an empty array.
///
/// Roughly half the steps append, a quarter insert, and the rest remove.
pub fn mixed_ops(n: usize, seed: u64) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut len = 0usize;
    let mut ops = Vec::with_capacity(n);
    for _ in 0..n {
        let roll: u8 = rng.gen_range(0..8);
        let op = match roll {
            0..=3 => Op::Push(rng.gen()),
            4 | 5 => Op::Insert(rng.gen_range(0..=len), rng.gen()),
            6 if len > 0 => Op::Erase(rng.gen_range(0..len)),
            7 if len > 0 => Op::Pop,
            _ => Op::Push(rng.gen()),
        };
        match op {
            Op::Push(_) | Op::Insert(..) => len += 1,
            Op::Erase(_) | Op::Pop => len -= 1,
        }
        ops.push(op);
    }
    ops
}

/// Replay `ops` against `array`.
pub fn run_mixed(array: &mut DynamicArray<u32>, ops: &[Op]) -> Result<(), ArrayError> {
    for op in ops {
        match *op {
            Op::Push(value) => array.push_back(value)?,
            Op::Insert(pos, value) => {
                array.insert(pos, value)?;
            }
            Op::Erase(pos) => {
                array.erase(pos);
            }
            Op::Pop => array.pop_back(),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_positions_are_in_bounds() {
        let positions = insert_positions(200, 42);
        for (len, &pos) in positions.iter().enumerate() {
            assert!(pos <= len);
        }
    }

    #[test]
    fn workloads_are_deterministic() {
        assert_eq!(mixed_ops(100, 7), mixed_ops(100, 7));
        assert_eq!(insert_positions(100, 7), insert_positions(100, 7));
    }

    #[test]
    fn mixed_ops_replay_matches_vec() {
        let ops = mixed_ops(500, 3);
        let mut array = DynamicArray::new();
        run_mixed(&mut array, &ops).unwrap();

        let mut model = Vec::new();
        for op in &ops {
            match *op {
                Op::Push(v) => model.push(v),
                Op::Insert(pos, v) => model.insert(pos, v),
                Op::Erase(pos) => {
                    model.remove(pos);
                }
                Op::Pop => {
                    model.pop();
                }
            }
        }
        assert_eq!(array, model.as_slice());
    }
}
