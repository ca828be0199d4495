//! End-to-end store scenarios over shared backends

use brew_model::{CupSize, DrinkType, Order};
use brew_persist::{keys, MemoryStore, PersistenceAdapter};
use brew_store::{
    CurrentRunStore, OrderStore, RosterOptions, SavedOrdersStore, DEFAULT_DEBOUNCE,
};
use brew_test_utils::{
    adapter_over, latte_large, person, run_order, CountingStore, FailingStore, FixedClock,
};
use chrono::Duration as ChronoDuration;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn write_through() -> RosterOptions {
    RosterOptions::new().with_debounce(Duration::ZERO)
}

#[test]
fn submitting_for_one_person_leaves_others_alone() {
    let store = OrderStore::load(
        PersistenceAdapter::new(MemoryStore::new()),
        write_through().with_default_names(["Alice", "Bob"]),
    );
    let people = store.people();
    let (alice, bob) = (people[0].id, people[1].clone());

    store.update_draft(alice, latte_large());
    store.submit_order(alice).unwrap();

    let alice_now = store.person(alice).unwrap();
    let last = alice_now.last_order.unwrap();
    assert_eq!(last.drink, DrinkType::Latte);
    assert_eq!(last.size, CupSize::Large);
    assert_eq!(last.sugars, 0);
    assert!(!last.decaf);
    assert!(store.draft(alice).is_none());
    assert_eq!(store.person(bob.id).unwrap(), bob);
}

#[test]
fn person_with_nothing_saved_gets_default_draft() {
    let store = OrderStore::load(
        PersistenceAdapter::new(MemoryStore::new()),
        write_through(),
    );
    for person in store.people() {
        let draft = store.draft_order(person.id);
        assert_eq!(
            draft,
            Order {
                id: draft.id,
                ..Order::default()
            }
        );
    }
}

#[test]
fn deleting_people_drops_their_drafts_and_persists() {
    let backend = CountingStore::new();
    let (ana, ben, cy) = (person("Ana"), person("Ben"), person("Cy"));
    let store = OrderStore::with_people(
        adapter_over(&backend),
        vec![ana.clone(), ben.clone(), cy.clone()],
        &write_through(),
    );
    store.update_draft(ana.id, latte_large());
    store.update_draft(ben.id, latte_large());

    let removed = store.delete_people(&[1, 0, 1, 7]);

    assert_eq!(removed.len(), 2);
    assert_eq!(store.people(), vec![cy]);
    assert!(store.drafts().is_empty());
    assert_eq!(backend.writes(keys::PEOPLE), 1);
}

#[tokio::test(start_paused = true)]
async fn roster_burst_is_written_once_after_quiet_window() {
    let backend = CountingStore::new();
    let store = OrderStore::load(adapter_over(&backend), RosterOptions::default());

    for name in ["Ana", "Ben", "Cy", "Di"] {
        store.add_person(name).unwrap();
    }
    assert_eq!(backend.writes(keys::PEOPLE), 0);

    tokio::time::sleep(DEFAULT_DEBOUNCE + Duration::from_millis(10)).await;
    assert_eq!(backend.writes(keys::PEOPLE), 1);

    let reloaded = OrderStore::load(adapter_over(&backend), write_through());
    assert_eq!(reloaded.people(), store.people());
}

#[tokio::test(start_paused = true)]
async fn drafts_never_reach_storage() {
    let backend = CountingStore::new();
    let store = OrderStore::load(adapter_over(&backend), RosterOptions::default());
    let id = store.people()[0].id;

    store.update_draft(id, latte_large());
    store.clear_draft(id);
    tokio::time::sleep(DEFAULT_DEBOUNCE * 2).await;

    assert_eq!(backend.total_writes(), 0);
}

#[test]
fn failing_backend_never_breaks_mutators() {
    let adapter = PersistenceAdapter::new(FailingStore);
    let roster = OrderStore::load(adapter.clone(), write_through());
    let saved = SavedOrdersStore::load(adapter, FixedClock::at_noon(2026, 3, 14));

    assert_eq!(roster.len(), 3);
    let id = roster.add_person("Eve").unwrap();
    roster.update_draft(id, latte_large());
    roster.submit_order(id).unwrap();

    saved.upsert_favorite(run_order("Eve"));
    assert!(saved.add_to_today(vec![run_order("Eve")]).is_some());
    assert_eq!(saved.favorites().len(), 1);
    assert_eq!(saved.history().len(), 1);
}

#[test]
fn same_day_runs_share_one_history_entry() {
    let clock = FixedClock::at_noon(2026, 3, 14);
    let saved = SavedOrdersStore::load(PersistenceAdapter::new(MemoryStore::new()), clock.clone());
    let (o1, o2) = (run_order("Ana"), run_order("Ben"));

    saved.add_to_today(vec![o1.clone()]);
    clock.advance(ChronoDuration::hours(3));
    saved.add_to_today(vec![o2.clone()]);

    let history = saved.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].orders, vec![o1, o2]);
}

#[test]
fn runs_on_different_days_are_newest_first() {
    let clock = FixedClock::at_noon(2026, 3, 14);
    let saved = SavedOrdersStore::load(PersistenceAdapter::new(MemoryStore::new()), clock.clone());

    saved.add_to_today(vec![run_order("Ana")]);
    clock.advance(ChronoDuration::days(2));
    saved.add_to_today(vec![run_order("Ben")]);

    let history = saved.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].orders[0].name, "Ben");
    assert_eq!(history[1].orders[0].name, "Ana");
    assert!(history[0].date > history[1].date);
}

#[test]
fn placing_a_run_moves_orders_into_history() {
    let backend = CountingStore::new();
    let saved = SavedOrdersStore::load(adapter_over(&backend), FixedClock::at_noon(2026, 3, 14));
    let run = CurrentRunStore::new();

    run.add(run_order("Ana"));
    run.add(run_order("Ben"));
    saved.add_to_today(run.take_all());

    assert!(run.is_empty());
    assert_eq!(saved.history()[0].orders.len(), 2);
    assert_eq!(backend.writes(keys::HISTORY), 1);
    assert_eq!(backend.writes(keys::FAVORITES), 1);
}
