use super::*;

const A: PublicationId = PublicationId(1);
const B: PublicationId = PublicationId(2);

#[test]
fn starts_empty() {
    let set = DisclosureSet::new();
    assert!(set.is_empty());
    assert!(!set.is_open(A));
}

#[test]
fn toggle_opens_then_closes() {
    let mut set = DisclosureSet::new();
    assert!(set.toggle(A));
    assert!(set.is_open(A));
    assert!(!set.toggle(A));
    assert!(!set.is_open(A));
}

#[test]
fn toggle_twice_restores_prior_contents() {
    let mut set = DisclosureSet::new();
    set.toggle(B);
    let before = set.clone();

    for id in [A, B, PublicationId(7)] {
        set.toggle(id);
        set.toggle(id);
        assert_eq!(set, before);
    }
}

#[test]
fn entries_toggle_independently() {
    let mut set = DisclosureSet::new();
    set.toggle(A);
    set.toggle(B);
    set.toggle(A);
    assert!(!set.is_open(A));
    assert!(set.is_open(B));
    assert_eq!(set.len(), 1);
}

#[test]
fn unknown_ids_are_inserted() {
    let mut set = DisclosureSet::new();
    assert!(set.toggle(PublicationId(9999)));
    assert!(set.is_open(PublicationId(9999)));
}

#[test]
fn collapse_all_clears_every_entry() {
    let mut set = DisclosureSet::new();
    set.toggle(A);
    set.toggle(B);
    set.collapse_all();
    assert!(set.is_empty());
}
