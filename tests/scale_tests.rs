use keysort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<(u64, u32)> = (0..count)
        .map(|i| (rng.random::<u64>(), i as u32))
        .collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let indices = keysort_indices(|p: &(u64, u32)| p.0, &input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(indices.len(), count);

    for i in 0..count - 1 {
        let a = &input[indices[i]];
        let b = &input[indices[i + 1]];
        assert!(a.0 <= b.0, "Sort failed at index {}", i);
        if a.0 == b.0 {
            assert!(a.1 < b.1, "Stability broken at index {}", i);
        }
    }
}

#[test]
fn test_cached_1m_expensive_keys() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..100_000)).collect();

    let start = Instant::now();
    let sorted = keysort_cached(|n: &u32| format!("{:08}", n), &input);
    println!("Sorted 1M elements by cached string key in {:?}", start.elapsed());

    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: This test requires several GB of RAM.
    // 100M * 16 bytes input + 2 * 100M * 8 bytes of index buffers = ~3.2GB.
    let count = 100_000_000;
    println!(
        "Generating {} random elements... (Expect high RAM usage)",
        count
    );

    let mut rng = rand::rng();
    let input: Vec<(u64, u64)> = (0..count)
        .map(|i| (rng.random_range(0..1_000_000), i as u64))
        .collect();

    println!("Sorting 100M elements...");
    let start = Instant::now();
    let indices = keysort_indices(|p: &(u64, u64)| p.0, &input);
    println!("Sorted 100M elements in {:?}", start.elapsed());

    assert_eq!(indices.len(), count);

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        let a = &input[indices[i]];
        let b = &input[indices[i + 1]];
        assert!(a.0 <= b.0, "Sort failed at index {}", i);
    }
}
