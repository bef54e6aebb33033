//! Tests for the recency-weighted roster core.

use cold_call::{Roster, SelectError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Looks up the current weight of a single name.
fn weight_of(roster: &Roster, name: &str) -> f64 {
    let pos = roster
        .names()
        .iter()
        .position(|n| n == name)
        .expect("name on roster");
    roster.weights()[pos]
}

#[test]
fn test_duplicate_add_is_noop() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Ada");

    assert_eq!(roster.names(), ["Ada"]);
    assert_eq!(roster.counts().get("Ada"), Some(&0));
}

#[test]
fn test_empty_name_is_noop() {
    let mut roster = Roster::new();
    roster.add_name("");

    assert!(roster.is_empty());
    assert!(roster.counts().is_empty());
}

#[test]
fn test_add_is_case_sensitive() {
    let mut roster = Roster::new();
    roster.add_name("ada");
    roster.add_name("Ada");

    assert_eq!(roster.names(), ["ada", "Ada"]);
}

#[test]
fn test_select_on_empty_roster_fails_without_mutation() {
    let mut roster = Roster::new();
    let result = roster.select_name();

    assert!(matches!(result, Err(SelectError::EmptyRoster)));
    assert!(roster.selection_order().is_empty());
    assert!(roster.counts().is_empty());
}

#[test]
fn test_select_updates_order_and_counts() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Grace");
    roster.add_name("Edsger");

    let mut rng = StdRng::seed_from_u64(7);
    for round in 1..=20 {
        let selected = roster.select_name_with(&mut rng).expect("non-empty roster");

        // Drawn name is always the most recent entry.
        assert_eq!(roster.selection_order().last(), Some(&selected));
        // One increment per draw, nothing else touched.
        let total: u32 = roster.counts().values().sum();
        assert_eq!(total, round);
    }

    // Names themselves are never reordered by selection.
    assert_eq!(roster.names(), ["Ada", "Grace", "Edsger"]);
}

#[test]
fn test_selection_order_holds_each_name_once() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Grace");

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        roster.select_name_with(&mut rng).expect("non-empty roster");
    }

    assert!(roster.selection_order().len() <= 2);
    let mut seen = roster.selection_order().to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), roster.selection_order().len());
}

#[test]
fn test_both_names_eventually_selected() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Grace");

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        roster.select_name_with(&mut rng).expect("non-empty roster");
    }

    assert!(*roster.counts().get("Ada").unwrap() > 0);
    assert!(*roster.counts().get("Grace").unwrap() > 0);
}

#[test]
fn test_fresh_roster_weights_are_uniform() {
    let mut roster = Roster::new();
    roster.add_name("A");
    roster.add_name("B");
    roster.add_name("C");

    assert_eq!(roster.weights(), [1.0, 1.0, 1.0]);

    // A single history entry has recency 1, so its weight stays 1.0 and
    // no name is penalized yet.
    let mut rng = StdRng::seed_from_u64(3);
    roster.select_name_with(&mut rng).expect("non-empty roster");
    assert_eq!(roster.selection_order().len(), 1);
    assert_eq!(roster.weights(), [1.0, 1.0, 1.0]);
}

#[test]
fn test_weights_follow_inverse_recency() {
    let mut roster = Roster::new();
    roster.add_name("A");
    roster.add_name("B");
    roster.add_name("C");

    // Draw until every name has entered the history.
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        roster.select_name_with(&mut rng).expect("non-empty roster");
        if roster.selection_order().len() == 3 {
            break;
        }
    }
    assert_eq!(roster.selection_order().len(), 3);

    // Weight depends only on position in the order: the oldest entry is
    // back to full weight, the most recent carries 1/3.
    let order = roster.selection_order().to_vec();
    assert_eq!(weight_of(&roster, &order[0]), 1.0);
    assert_eq!(weight_of(&roster, &order[1]), 0.5);
    assert_eq!(weight_of(&roster, &order[2]), 1.0 / 3.0);
}

#[test]
fn test_delete_removes_from_all_collections() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Grace");

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        roster.select_name_with(&mut rng).expect("non-empty roster");
    }

    roster.delete_name("Ada");
    assert_eq!(roster.names(), ["Grace"]);
    assert!(roster.counts().get("Ada").is_none());
    assert!(!roster.selection_order().contains(&"Ada".to_string()));

    // Re-adding starts over: count 0 and full weight.
    roster.add_name("Ada");
    assert_eq!(roster.counts().get("Ada"), Some(&0));
    assert_eq!(weight_of(&roster, "Ada"), 1.0);
}

#[test]
fn test_delete_absent_name_is_noop() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.delete_name("Grace");

    assert_eq!(roster.names(), ["Ada"]);
}

#[test]
fn test_reset_wipes_everything() {
    let mut roster = Roster::new();
    roster.add_name("Ada");
    roster.add_name("Grace");
    roster.select_name().expect("non-empty roster");

    roster.reset();
    assert!(roster.is_empty());
    assert!(roster.selection_order().is_empty());
    assert!(roster.counts().is_empty());
    assert!(matches!(roster.select_name(), Err(SelectError::EmptyRoster)));
}
