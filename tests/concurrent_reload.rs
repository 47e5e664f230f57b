//! Readers racing a stream of reloads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use switch_store::{ReloadOutcome, SwitchStore};

mod common;

const KEYS: usize = 64;
const RELOADS: u64 = 500;

#[test]
fn test_readers_never_see_mixed_generations() {
    let store = Arc::new(SwitchStore::new());
    store.reload(&common::uniform_blob(0, KEYS));

    let done = Arc::new(AtomicBool::new(false));
    let mut readers = Vec::new();

    for _ in 0..4 {
        let store = Arc::clone(&store);
        let done = Arc::clone(&done);
        readers.push(thread::spawn(move || {
            let mut observed = 0u64;
            let mut last_generation = 0;
            while !done.load(Ordering::Acquire) {
                let table = store.table();
                assert!(table.generation() >= last_generation, "generation went backwards");
                last_generation = table.generation();
                assert_eq!(table.len(), KEYS, "reader saw a partially built table");

                let first = table.get("key0").unwrap().to_string();
                for (_, value) in table.iter() {
                    assert_eq!(value, first, "reader saw entries from two reloads");
                }

                let snapshot = store.snapshot();
                let markers: Vec<&str> = snapshot
                    .split("; ")
                    .map(|entry| entry.split_once('=').unwrap().1)
                    .collect();
                assert_eq!(markers.len(), KEYS);
                assert!(markers.iter().all(|m| *m == markers[0]));

                let _ = store.get_integer("key7", -1);
                let _ = store.get_boolean("key3", false);
                let _ = store.get_string("missing", "x");
                observed += 1;
            }
            observed
        }));
    }

    for marker in 1..=RELOADS {
        store.reload(&common::uniform_blob(marker, KEYS));
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        let observed = reader.join().expect("reader panicked");
        assert!(observed > 0);
    }

    assert_eq!(store.generation(), RELOADS + 1);
    assert_eq!(store.get_integer("key0", -1), RELOADS as i32);
}

#[test]
fn test_racing_reloads_publish_one_whole_table() {
    let store = Arc::new(SwitchStore::new());

    let writers: Vec<_> = (1..=4u64)
        .map(|marker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    store.reload(&common::uniform_blob(marker, KEYS));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    // Last to publish wins; whichever it was, its table is complete and
    // every applied reload got its own generation.
    let table = store.table();
    assert_eq!(table.len(), KEYS);
    let first = table.get("key0").unwrap();
    assert!(table.iter().all(|(_, v)| v == first));
    assert_eq!(table.generation(), 200);
}

#[test]
fn test_racing_reloads_publish_increasing_generations() {
    let store = Arc::new(SwitchStore::new());

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut generations = Vec::new();
                for i in 0..100u64 {
                    if let ReloadOutcome::Applied { generation, .. } =
                        store.reload(&format!("counter={}", i))
                    {
                        generations.push(generation);
                    }
                }
                generations
            })
        })
        .collect();

    let mut all: Vec<u64> = Vec::new();
    for writer in writers {
        let generations = writer.join().unwrap();
        assert!(generations.windows(2).all(|w| w[0] < w[1]));
        all.extend(generations);
    }

    all.sort_unstable();
    assert_eq!(all, (1..=400).collect::<Vec<u64>>());
    assert_eq!(store.generation(), 400);
}
