#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use digitrie::{Entry, Trie, TrieError};

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Get { key: u16 },
    Insert { key: u16, val: usize },
    Update { key: u16, val: usize },
    Delete { key: u16 },
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

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut trie = Trie::<usize>::new();
    let mut bt_map = BTreeMap::<String, usize>::new();

    for m in &methods {
        match m {
            MapMethod::Get { key } => {
                let key = make_key(*key);
                assert_eq!(trie.get(&key), bt_map.get(&key));
                assert_eq!(trie.contains(&key), bt_map.contains_key(&key));
            }
            MapMethod::Insert { key, val } => {
                let key = make_key(*key);
                let result = trie.add_entry(Entry::new(key.clone(), *val));
                if bt_map.contains_key(&key) {
                    assert_eq!(result, Err(TrieError::DuplicateKey(key)));
                } else {
                    assert_eq!(result, Ok(()));
                    bt_map.insert(key, *val);
                }
            }
            MapMethod::Update { key, val } => {
                let key = make_key(*key);
                let old_bt = bt_map.get_mut(&key);
                let old_trie = trie.get_mut(&key);
                assert_eq!(old_trie, old_bt);
                if let (Some(old_bt), Some(old_trie)) = (old_bt, old_trie) {
                    *old_bt = *val;
                    *old_trie = *val;
                }
                assert_eq!(trie.get(&key), bt_map.get(&key));
            }
            MapMethod::Delete { key } => {
                let key = make_key(*key);
                let btr = bt_map.remove(&key);
                match trie.take(&key) {
                    Ok(taken) => assert_eq!(taken.map(|e| *e.data()), btr),
                    Err(e) => {
                        assert_eq!(e, TrieError::CollectionEmpty);
                        assert!(btr.is_none());
                    }
                }
            }
        }
        assert_eq!(trie.len(), bt_map.len());
    }

    let trie_entries: Vec<(&str, usize)> = trie.iter().map(|e| (e.key(), *e.data())).collect();
    let bt_entries: Vec<(&str, usize)> = bt_map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(trie_entries, bt_entries);
});
