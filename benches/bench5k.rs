use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_phonebook::prelude::{Contact, ContactStore, SortKey};
use tempfile::tempdir;

// Helper to create a store prepopulated with `n` contacts in memory.
fn make_store_with_n(n: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in 0..n {
        let contact = Contact::new(
            format!("User{}", n - i),
            if i % 2 == 0 {
                "Friend".to_string()
            } else {
                "Work".to_string()
            },
            format!("0888{i:07}"),
            format!("user{i}@yahoo.com"),
        );
        store.add_contact(contact).expect("unique fixture contact");
    }
    store
}

// Add-benchmark: duplicate check plus append on a full store.
fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts (single add)", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                let new_contact = Contact::new(
                    "Zoe".to_string(),
                    "Welch".to_string(),
                    "08885499529".to_string(),
                    "bryanwelch@gmail.com".to_string(),
                );
                let _ = store.add_contact(new_contact);
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

// List-benchmark: sort in place by first name.
fn bench_list(c: &mut Criterion) {
    c.bench_function("Listing 5k contacts (sort by first name)", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                black_box(store.list(SortKey::FirstName).len());
            },
            BatchSize::SmallInput,
        );
    });
}

// Search-benchmark: one full scan per iteration.
fn bench_search(c: &mut Criterion) {
    c.bench_function("Searching 5k contacts (substring)", |b| {
        let store = make_store_with_n(5_000);
        b.iter(|| {
            black_box(store.search("user10").count());
        });
    });
}

// Save/load-benchmark: write the data file, then read it back.
fn bench_save_load(c: &mut Criterion) {
    c.bench_function("Save and load 5k contacts (txt)", |b| {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("contacts.txt");
        let store = make_store_with_n(5_000);

        b.iter(|| {
            store.save_to_file(&path).expect("save failed");
            let mut reloaded = ContactStore::new();
            black_box(reloaded.load_from_file(&path).expect("load failed"));
        });
    });
}

criterion_group!(benches, bench_add, bench_list, bench_search, bench_save_load);
criterion_main!(benches);
