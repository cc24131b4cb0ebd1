//! Integration test: end-to-end usage scenarios.
//!
//! Walks the public API through the sequences a caller is expected to
//! rely on: building, editing, comparing and reserving.

use simvec::{reserve, simvec, ArrayError, DynamicArray};

#[test]
fn push_erase_insert_compare() {
    let mut array = DynamicArray::new();
    array.push_back(1).unwrap();
    array.push_back(2).unwrap();
    array.push_back(3).unwrap();
    assert_eq!(array.len(), 3);
    assert!(array.capacity() >= 3);
    assert_eq!(array, [1, 2, 3]);

    let next = array.erase(1);
    assert_eq!(array, [1, 3]);
    assert_eq!(array.len(), 2);
    assert_eq!(array[next], 3);

    let at = array.insert(1, 5).unwrap();
    assert_eq!(array[at], 5);
    assert_eq!(array, [1, 5, 3]);

    assert!(array == simvec![1, 5, 3]);
    assert!(array < simvec![1, 5, 4]);
    assert!(array <= simvec![1, 5, 4]);
    assert!(simvec![1, 5, 4] > array);
}

#[test]
fn sized_constructor_fills_defaults() {
    let array: DynamicArray<i32> = DynamicArray::with_len(3).unwrap();
    assert_eq!(array, [0, 0, 0]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn sized_constructor_with_value() {
    let array = DynamicArray::with_len_and_value(4, &42u8).unwrap();
    assert_eq!(array, [42, 42, 42, 42]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn reservation_avoids_reallocation() {
    let mut array: DynamicArray<u32> = DynamicArray::with_reservation(reserve(10)).unwrap();
    assert_eq!(array.capacity(), 10);
    let block = array.as_ptr();
    for i in 0..5 {
        array.push_back(i).unwrap();
        assert_eq!(array.capacity(), 10);
        assert_eq!(array.as_ptr(), block);
    }
    assert_eq!(array, [0, 1, 2, 3, 4]);
}

#[test]
fn reserve_on_existing_array_avoids_reallocation() {
    let mut array: DynamicArray<u32> = DynamicArray::new();
    array.reserve(10).unwrap();
    let block = array.as_ptr();
    for i in 0..10 {
        array.push_back(i).unwrap();
    }
    assert_eq!(array.as_ptr(), block);
    assert_eq!(array.capacity(), 10);
}

#[test]
fn appends_reallocate_logarithmically() {
    let mut array = DynamicArray::new();
    let mut reallocations = 0;
    let mut capacity = array.capacity();
    for i in 0..1000u32 {
        array.push_back(i).unwrap();
        if array.capacity() != capacity {
            reallocations += 1;
            capacity = array.capacity();
        }
    }
    // 1 → 2 → 4 → ... → 1024
    assert_eq!(reallocations, 11);
    assert_eq!(array.capacity(), 1024);
}

#[test]
fn checked_access_reports_out_of_range() {
    let array = simvec![10, 20, 30];
    for i in 0..array.len() {
        assert_eq!(array.at(i), Ok(&array[i]));
    }
    let err = array.at(3).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 3, len: 3 });
    assert_eq!(err.to_string(), "index 3 out of range for array of length 3");
    // The failed access does not disturb the array.
    assert_eq!(array, [10, 20, 30]);
}

#[test]
fn resize_then_regrow() {
    let mut array = simvec![5, 6, 7, 8];
    array.resize(2).unwrap();
    assert_eq!(array, [5, 6]);
    array.resize(6).unwrap();
    assert_eq!(array, [5, 6, 0, 0, 0, 0]);
    assert_eq!(array.capacity(), 8);
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 8);
}

#[test]
fn strings_survive_reallocation() {
    let mut array: DynamicArray<String> = DynamicArray::new();
    for word in ["alpha", "beta", "gamma", "delta", "epsilon"] {
        array.push_back(word.to_string()).unwrap();
    }
    array.insert(0, "zeta".to_string()).unwrap();
    array.erase(2);
    let joined: Vec<&str> = array.iter().map(String::as_str).collect();
    assert_eq!(joined, ["zeta", "alpha", "gamma", "delta", "epsilon"]);
}

#[test]
fn slice_methods_work_through_deref() {
    let mut array = simvec![3, 1, 2];
    array.sort();
    assert_eq!(array.first(), Some(&1));
    assert_eq!(array.last(), Some(&3));
    assert!(array.contains(&2));
    assert_eq!(array.iter().sum::<i32>(), 6);
}

#[test]
fn allocation_failure_is_recoverable() {
    let mut array = simvec![1u64, 2, 3];
    let err = array.resize(usize::MAX).unwrap_err();
    assert!(matches!(err, ArrayError::AllocationFailed { .. }));
    assert_eq!(array, [1, 2, 3]);
    // The array stays usable after the failure.
    array.push_back(4).unwrap();
    assert_eq!(array, [1, 2, 3, 4]);
}
