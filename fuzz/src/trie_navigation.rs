#![no_main]

use std::collections::BTreeSet;
use std::ops::Bound;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use digitrie::{Trie, TrieError};

#[derive(Arbitrary, Debug)]
enum SetMethod {
    Insert { key: u16 },
    Delete { key: u16 },
    Predecessor { key: u16 },
    Successor { key: u16 },
    Completions { key: u16 },
    ValueAt { index: u8 },
    Bounds,
}

// Short keys over a four letter alphabet, so that shared prefixes are common.
fn make_key(seed: u16) -> String {
    let len = (seed % 4) as usize + 1;
    let mut rest = seed / 4;
    (0..len)
        .map(|_| {
            let c = b'a' + (rest % 4) as u8;
            rest /= 4;
            c as char
        })
        .collect()
}

fn expect_empty<T: std::fmt::Debug>(result: Result<T, TrieError>) {
    assert_eq!(result.map(|_| ()).unwrap_err(), TrieError::CollectionEmpty);
}

fuzz_target!(|methods: Vec<SetMethod>| {
    let mut trie = Trie::<()>::new();
    let mut bt_set = BTreeSet::<String>::new();

    for m in &methods {
        match m {
            SetMethod::Insert { key } => {
                let key = make_key(*key);
                assert_eq!(trie.add(&key).is_ok(), bt_set.insert(key));
            }
            SetMethod::Delete { key } => {
                let key = make_key(*key);
                if bt_set.is_empty() {
                    expect_empty(trie.remove(&key));
                } else {
                    assert_eq!(trie.remove(&key), Ok(bt_set.remove(&key)));
                }
            }
            SetMethod::Predecessor { key } => {
                let key = make_key(*key);
                if bt_set.is_empty() {
                    expect_empty(trie.predecessor(&key));
                    continue;
                }
                let expected = bt_set
                    .range::<str, _>((Bound::Unbounded, Bound::Excluded(key.as_str())))
                    .next_back();
                match expected {
                    Some(k) => assert_eq!(trie.predecessor(&key), Ok(k.as_str())),
                    None => assert_eq!(trie.predecessor(&key), Err(TrieError::NotFound)),
                }
            }
            SetMethod::Successor { key } => {
                let key = make_key(*key);
                if bt_set.is_empty() {
                    expect_empty(trie.successor(&key));
                    continue;
                }
                let expected = bt_set
                    .range::<str, _>((Bound::Excluded(key.as_str()), Bound::Unbounded))
                    .next();
                match expected {
                    Some(k) => assert_eq!(trie.successor(&key), Ok(k.as_str())),
                    None => assert_eq!(trie.successor(&key), Err(TrieError::NotFound)),
                }
            }
            SetMethod::Completions { key } => {
                let prefix = make_key(*key);
                if bt_set.is_empty() {
                    expect_empty(trie.completions(&prefix));
                    continue;
                }
                let expected: Vec<String> = bt_set
                    .iter()
                    .filter(|k| k.starts_with(prefix.as_str()))
                    .cloned()
                    .collect();
                assert_eq!(trie.completions(&prefix), Ok(expected));
            }
            SetMethod::ValueAt { index } => {
                let index = *index as usize;
                match bt_set.iter().nth(index) {
                    Some(k) => assert_eq!(trie.value_at(index).map(|e| e.key()), Ok(k.as_str())),
                    None => assert!(matches!(
                        trie.value_at(index),
                        Err(TrieError::BoundsOutOfRange { .. })
                    )),
                }
            }
            SetMethod::Bounds => {
                if bt_set.is_empty() {
                    expect_empty(trie.min());
                    expect_empty(trie.max());
                } else {
                    assert_eq!(trie.min().ok(), bt_set.first().map(String::as_str));
                    assert_eq!(trie.max().ok(), bt_set.last().map(String::as_str));
                }
            }
        }
    }

    let keys: Vec<&str> = trie.keys().collect();
    let expected: Vec<&str> = bt_set.iter().map(String::as_str).collect();
    assert_eq!(keys, expected);
});
