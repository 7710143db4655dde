//! Concurrent use of a shared registry.

use std::io::Read;
use std::sync::Arc;
use std::thread;

use colorize_exercises::{Day, Exercise, Registry, RegistryError};
use colorize_input::read_byte_matrix;

fn count_hashes(input: &mut dyn Read) -> anyhow::Result<serde_json::Value> {
    let grid = read_byte_matrix(input)?;
    let count = grid.iter().flatten().filter(|&&b| b == b'#').count();
    Ok(count.into())
}

#[test]
fn only_one_concurrent_registration_wins() {
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.register("shared", Day::new(format!("input-{}", i))))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();
    let dupes = results
        .iter()
        .filter(|r| matches!(r, Err(RegistryError::AlreadyRegistered(_))))
        .count();

    assert_eq!(wins, 1);
    assert_eq!(dupes, 7);
    assert_eq!(registry.len(), 1);
}

#[test]
fn readers_see_registered_days() {
    let registry = Arc::new(Registry::new());
    registry
        .register(
            "grid",
            Day::new("grid.txt").exercise("hashes", Exercise::new("count #", count_hashes)),
        )
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .run("grid", "hashes", &mut "#.#\n.#.\n".as_bytes())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
