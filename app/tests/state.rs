use leptos::prelude::*;

use app::pointer::forward_pointer_move;
use app::registry::LINKS;
use app::state::{row_reveal_delay_ms, PointerPosition, ViewState};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn fresh_state() {
    setup();

    let state = ViewState::new();
    assert!(!state.is_loaded());
    assert_eq!(None, state.hovered());
    assert_eq!(PointerPosition::default(), state.pointer());
}

#[test]
fn mark_loaded_is_one_way() {
    setup();

    let mut state = ViewState::new();
    state.mark_loaded();
    assert!(state.is_loaded());

    // Nothing that happens later turns the flag back off.
    state.enter_row(2);
    state.leave_row(2);
    state.set_pointer(PointerPosition::new(12.0, 34.0));
    state.mark_loaded();
    assert!(state.is_loaded());
}

#[test]
fn last_enter_wins() {
    setup();

    let mut state = ViewState::new();
    state.enter_row(1);
    assert_eq!(Some(1), state.hovered());

    // Straight onto another row, no leave event in between.
    state.enter_row(3);
    assert_eq!(Some(3), state.hovered());
    assert!(state.is_hovered(3));
    assert!(!state.is_hovered(1));
}

#[test]
fn stale_leave_does_not_clobber_newer_hover() {
    setup();

    let mut state = ViewState::new();
    state.enter_row(0);
    state.enter_row(1);
    // The leave event for row 0 can land after row 1 was entered.
    state.leave_row(0);
    assert_eq!(Some(1), state.hovered());

    state.leave_row(1);
    assert_eq!(None, state.hovered());

    // Leaving while nothing is hovered stays a no-op.
    state.leave_row(4);
    assert_eq!(None, state.hovered());
}

#[test]
fn pointer_replaces_wholesale() {
    setup();

    let mut state = ViewState::new();
    state.mark_loaded();
    state.enter_row(2);

    state.set_pointer(PointerPosition::new(10.0, 20.0));
    state.set_pointer(PointerPosition::new(30.0, 40.0));
    assert_eq!(PointerPosition::new(30.0, 40.0), state.pointer());

    // Same sample again: same position, and the other two slots are
    // untouched.
    state.set_pointer(PointerPosition::new(30.0, 40.0));
    assert_eq!(PointerPosition::new(30.0, 40.0), state.pointer());
    assert!(state.is_loaded());
    assert_eq!(Some(2), state.hovered());
}

#[test]
fn glow_centers_on_pointer() {
    setup();

    let (left, top) = PointerPosition::new(400.0, 300.0).glow_origin();
    assert_eq!(100.0, left);
    assert_eq!(0.0, top);
}

#[test]
fn reveal_delays_increase_down_the_page() {
    setup();

    assert_eq!(500, row_reveal_delay_ms(0));
    assert_eq!(900, row_reveal_delay_ms(LINKS.len() - 1));
    for index in 1..LINKS.len() {
        assert!(row_reveal_delay_ms(index - 1) < row_reveal_delay_ms(index));
    }
}

#[test]
fn registry_lists_five_links_in_order() {
    setup();

    assert_eq!(5, LINKS.len());
    let names = LINKS.iter().map(|entry| entry.name).collect::<Vec<_>>();
    assert_eq!(
        vec!["Twitter / X", "GitHub", "LinkedIn", "Portfolio", "Email Me"],
        names
    );
    for entry in LINKS.iter() {
        assert!(!entry.url.is_empty());
        assert!(!entry.icon.is_empty());
        assert!(entry.icon.chars().count() <= 2);
    }
}

#[test]
fn teardown_drops_late_pointer_moves() {
    setup();

    let state = RwSignal::new(ViewState::new());
    forward_pointer_move(state, PointerPosition::new(5.0, 6.0));
    assert_eq!(
        Some(PointerPosition::new(5.0, 6.0)),
        state.try_get_untracked().map(|state| state.pointer()),
    );

    state.dispose();

    // The window listener can still fire between disposal of the page and
    // removal of the listener; those samples must go nowhere instead of
    // panicking.
    forward_pointer_move(state, PointerPosition::new(7.0, 8.0));
    assert_eq!(None, state.try_get_untracked());
}

#[test]
fn full_page_lifecycle() {
    setup();

    let state = RwSignal::new(ViewState::new());
    assert!(!state.get_untracked().is_loaded());

    state.update(|state| state.mark_loaded());
    forward_pointer_move(state, PointerPosition::new(250.0, 125.0));

    // Sweep the pointer down the rows the way a mouse would: the next row's
    // enter fires before the previous row's leave lands.
    for index in 0..LINKS.len() {
        state.update(|state| state.enter_row(index));
        if index > 0 {
            state.update(|state| state.leave_row(index - 1));
        }
        assert_eq!(Some(index), state.get_untracked().hovered());
    }
    state.update(|state| state.leave_row(LINKS.len() - 1));
    assert_eq!(None, state.get_untracked().hovered());
    assert!(state.get_untracked().is_loaded());
    assert_eq!(
        PointerPosition::new(250.0, 125.0),
        state.get_untracked().pointer()
    );

    state.dispose();
    forward_pointer_move(state, PointerPosition::new(0.0, 0.0));
    assert_eq!(None, state.try_get_untracked());
}
