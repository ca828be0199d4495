//! Persisted collections survive a save/load cycle unchanged.
//!
//! Ordering matters: the roster is shown in insertion order and history is
//! newest-first, so equality here is sequence equality.

use brew_model::{
    CoffeeRunDay, CupSize, DrinkType, Order, Person, PersonOrder, RunCupSize, RunDrink,
};
use brew_persist::{keys, DirectoryStore, MemoryStore, PersistenceAdapter};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Two history days, newest first, built from fixed timestamps.
fn sample_days() -> Vec<CoffeeRunDay> {
    let newer: CoffeeRunDay = serde_json::from_str(
        r#"{"id":"6f1c3c2e-8a57-4a8e-9d43-0b4c7f0f6a11","date":"2026-03-15T14:00:00Z","orders":[]}"#,
    )
    .unwrap();
    let mut older = newer.clone();
    older.id = brew_model::DayId::new();
    older.date = "2026-03-14T09:30:00Z".parse().unwrap();
    older.orders.push(PersonOrder::new(
        "Aisha",
        RunDrink::Cappuccino,
        RunCupSize::Small,
        "Almond",
        1,
    ));
    vec![newer, older]
}

fn drink() -> impl Strategy<Value = DrinkType> {
    prop::sample::select(DrinkType::ALL.to_vec())
}

fn size() -> impl Strategy<Value = CupSize> {
    prop::sample::select(CupSize::ALL.to_vec())
}

fn order() -> impl Strategy<Value = Order> {
    (drink(), size(), 0u32..=6, 0u32..=6, any::<bool>(), any::<bool>(), "[a-z ]{0,12}").prop_map(
        |(drink, size, sugars, milks, decaf, iced, notes)| {
            Order::new()
                .with_drink(drink)
                .with_size(size)
                .with_sugars(sugars)
                .with_milks(milks)
                .with_decaf(decaf)
                .with_iced(iced)
                .with_notes(notes)
        },
    )
}

fn person() -> impl Strategy<Value = Person> {
    (
        "[A-Za-z]{1,10}",
        proptest::option::of(order()),
        proptest::option::of(order()),
    )
        .prop_map(|(name, favorite, last_order)| {
            let mut person = Person::new(&name).unwrap();
            person.favorite = favorite;
            person.last_order = last_order;
            person
        })
}

proptest! {
    #[test]
    fn prop_roster_round_trips_in_order(people in prop::collection::vec(person(), 0..6)) {
        let adapter = PersistenceAdapter::new(MemoryStore::new());
        adapter.save(keys::PEOPLE, &people).unwrap();

        let loaded: Vec<Person> = adapter.load(keys::PEOPLE).unwrap().unwrap();
        prop_assert_eq!(loaded, people);
    }
}

#[test]
fn favorites_and_history_round_trip_through_directory() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = PersistenceAdapter::new(DirectoryStore::open(dir.path()).unwrap());

    let favorites = vec![
        PersonOrder::new("Doug", RunDrink::Tea, RunCupSize::Large, "No milk", 0).with_favorite(true),
        PersonOrder::new("Michael", RunDrink::Latte, RunCupSize::Medium, "Oat", 2)
            .with_notes("extra shot")
            .with_favorite(true),
    ];
    let history = sample_days();

    adapter.save(keys::FAVORITES, &favorites).unwrap();
    adapter.save(keys::HISTORY, &history).unwrap();

    // Reopen to make sure the values came from disk.
    let reopened = PersistenceAdapter::new(DirectoryStore::open(dir.path()).unwrap());
    let loaded_favorites: Vec<PersonOrder> = reopened.load(keys::FAVORITES).unwrap().unwrap();
    let loaded_history: Vec<CoffeeRunDay> = reopened.load(keys::HISTORY).unwrap().unwrap();

    assert_eq!(loaded_favorites, favorites);
    assert_eq!(loaded_history, history);
}

#[test]
fn truncated_file_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(keys::HISTORY), b"[{\"id\":").unwrap();

    let adapter = PersistenceAdapter::new(DirectoryStore::open(dir.path()).unwrap());
    let history: Vec<CoffeeRunDay> = adapter.load_or_else(keys::HISTORY, Vec::new);
    assert!(history.is_empty());
}
