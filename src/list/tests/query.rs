use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::list::prelude::*;

#[test]
fn first_and_last() {
    let list = list![2, 3, 10];
    assert_eq!(list.first(), 2);
    assert_eq!(list.last(), 10);
}

#[test]
fn first_and_last_default_on_empty() {
    let numbers: List<i32> = list![];
    assert_eq!(numbers.first(), 0);

    let words: List<String> = list![];
    assert_eq!(words.last(), "");
}

#[test]
fn length_and_emptiness() {
    let list = list![1, 2, 3];
    assert_eq!(list.length(), 3);
    assert!(!list.is_empty());
    assert!(list.length_eq(&list![4, 5, 6]));
    assert_eq!(list.length_cmp(&list![1]), std::cmp::Ordering::Greater);
}

#[test]
fn borrows_as_slice() {
    fn total<L: AsRef<[i32]>>(list: L) -> i32 {
        list.as_ref().iter().sum()
    }

    let list = list![1, 2, 3];
    assert_eq!(total(&list), 6);
    assert_eq!(list.as_ref(), list.values());
}

#[test]
fn contains() {
    let list = list!["a", "b"];
    assert!(list.contains(&"b"));
    assert!(!list.contains(&"c"));
    assert!(!List::<&str>::new().contains(&"a"));
}

#[test]
fn random_is_a_member() -> anyhow::Result<()> {
    let list = list![1, 2, 3, 4, 5];
    for _ in 0..100 {
        assert!(list.contains(&list.random()?));
    }
    Ok(())
}

#[test]
fn random_with_seeded_rng_is_reproducible() -> anyhow::Result<()> {
    let list = List::range(0, 99);

    let mut left = StdRng::seed_from_u64(7);
    let mut right = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        assert_eq!(list.random_with(&mut left)?, list.random_with(&mut right)?);
    }

    Ok(())
}

#[test]
fn random_reaches_every_element() -> anyhow::Result<()> {
    let list = list!['a', 'b', 'c'];
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = [false; 3];

    for _ in 0..300 {
        let value = list.random_with(&mut rng)?;
        seen[(value as u8 - b'a') as usize] = true;
    }

    assert_eq!(seen, [true; 3]);
    Ok(())
}

#[test]
fn random_on_empty_fails() {
    let list: List<i32> = list![];
    let error = list.random().unwrap_err();
    assert_eq!(
        error.downcast_ref::<ListError>(),
        Some(&ListError::Empty { operation: "random" })
    );
}

#[test]
fn snapshot_is_detached() {
    let mut list = list![1, 2];
    let snapshot = list.snapshot();
    list.add(3);
    assert_eq!(snapshot, vec![1, 2]);
    assert_eq!(list.values(), &[1, 2, 3]);
}
