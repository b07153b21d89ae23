use alloc::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::super::SpinList;
use crate::error::ListError;

/// Apply random operations to a list and to a `Vec` and compare both.
fn run_against_model(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let list: SpinList<u32> = SpinList::new().unwrap();
    let mut model: Vec<u32> = Vec::new();

    let mut adds = 0usize;
    let mut removes = 0usize;

    for _ in 0..steps {
        // Indices may run past the end to exercise the out-of-range paths
        let index = rng.random_range(0..model.len() + 2);
        match rng.random_range(0..4) {
            0 => {
                let value = rng.random();
                list.add(&value).unwrap();
                model.push(value);
                adds += 1;
            }
            1 => {
                let result = list.remove(index);
                if index < model.len() {
                    assert_eq!(result, Ok(()));
                    model.remove(index);
                    removes += 1;
                } else {
                    assert_eq!(result, Err(ListError::OutOfRange));
                }
            }
            2 => {
                let expected = model.get(index).copied().ok_or(ListError::OutOfRange);
                assert_eq!(list.get(index), expected);
            }
            _ => {
                let value = rng.random();
                let result = list.update(index, &value);
                if let Some(slot) = model.get_mut(index) {
                    assert_eq!(result, Ok(()));
                    *slot = value;
                } else {
                    assert_eq!(result, Err(ListError::OutOfRange));
                }
            }
        }
        assert_eq!(list.length(), Ok(adds - removes));
    }

    let stored: Vec<u32> = (0..model.len()).map(|i| list.get(i).unwrap()).collect();
    assert_eq!(stored, model);
}

#[test_log::test]
fn test_random_sequences_match_vec() {
    for seed in 0..8 {
        run_against_model(seed, 400);
    }
}
