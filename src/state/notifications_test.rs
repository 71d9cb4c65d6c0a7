use super::*;

fn seeded() -> NotificationsState {
    let mut state = NotificationsState::default();
    state.replace(sample_notifications());
    state
}

#[test]
fn sample_batch_ids_are_unique() {
    let batch = sample_notifications();
    let mut ids: Vec<u32> = batch.iter().map(|n| n.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), batch.len());
}

#[test]
fn replace_swaps_list_and_clears_loading() {
    let mut state = NotificationsState { items: Vec::new(), loading: true };
    state.replace(sample_notifications());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 3);
}

#[test]
fn unread_count_is_count_of_unread_flags() {
    let state = seeded();
    assert_eq!(state.unread_count(), 2);
    assert_eq!(state.unread_ids(), vec![1, 2]);
}

#[test]
fn mark_read_decrements_badge_once_per_item() {
    let mut state = seeded();
    assert!(state.mark_read(1));
    assert_eq!(state.unread_count(), 1);

    // A duplicate completion for the same item must not decrement again.
    assert!(!state.mark_read(1));
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn mark_read_unknown_id_is_rejected() {
    let mut state = seeded();
    assert!(!state.mark_read(99));
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn mark_read_on_already_read_entry_is_rejected() {
    let mut state = seeded();
    assert!(!state.mark_read(3));
    assert_eq!(state.unread_count(), 2);
}

// Completions may land in any order; the badge still bottoms out at zero.
#[test]
fn out_of_order_completion_reaches_zero_and_stays_there() {
    let mut state = seeded();
    let mut ids = state.unread_ids();
    ids.reverse();
    for id in &ids {
        assert!(state.mark_read(*id));
    }
    assert_eq!(state.unread_count(), 0);
    for id in ids {
        assert!(!state.mark_read(id));
    }
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn empty_list_has_zero_unread() {
    let state = NotificationsState::default();
    assert_eq!(state.unread_count(), 0);
    assert!(state.unread_ids().is_empty());
}
