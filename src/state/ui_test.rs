use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_are_closed_light_and_sidebar_shown() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.sidebar_open);
    assert_eq!(state.open_menu, None);
    assert_eq!(state.open_submenu, None);
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn sidebar_toggles_between_two_states() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}

// =============================================================
// Exclusive menu groups
// =============================================================

#[test]
fn opening_a_menu_closes_its_sibling() {
    let mut state = UiState::default();
    assert!(state.toggle_menu(MenuId::Notifications));
    assert!(state.menu_is_open(MenuId::Notifications));

    assert!(state.toggle_menu(MenuId::Profile));
    assert!(state.menu_is_open(MenuId::Profile));
    assert!(!state.menu_is_open(MenuId::Notifications));
}

#[test]
fn toggling_an_open_menu_closes_it() {
    let mut state = UiState::default();
    assert!(state.toggle_menu(MenuId::Profile));
    assert!(!state.toggle_menu(MenuId::Profile));
    assert_eq!(state.open_menu, None);
}

#[test]
fn opening_a_submenu_closes_its_sibling() {
    let mut state = UiState::default();
    state.toggle_submenu(SubmenuId::Courses);
    assert!(state.submenu_is_open(SubmenuId::Courses));

    state.toggle_submenu(SubmenuId::Reports);
    assert!(state.submenu_is_open(SubmenuId::Reports));
    assert!(!state.submenu_is_open(SubmenuId::Courses));
}

#[test]
fn toggling_an_open_submenu_closes_it() {
    let mut state = UiState::default();
    state.toggle_submenu(SubmenuId::Courses);
    state.toggle_submenu(SubmenuId::Courses);
    assert_eq!(state.open_submenu, None);
}

#[test]
fn close_menus_clears_dropdowns_but_keeps_submenu() {
    let mut state = UiState::default();
    state.toggle_submenu(SubmenuId::Reports);
    let _ = state.toggle_menu(MenuId::Notifications);

    state.close_menus();
    assert_eq!(state.open_menu, None);
    assert!(state.submenu_is_open(SubmenuId::Reports));
}
