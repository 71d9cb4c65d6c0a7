//! Shell chrome state (sidebar, exclusive menus, theme flag).
//!
//! Menus and submenus each form an exclusive group: at most one member is
//! open, and opening one closes its siblings.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-bar dropdown menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    Notifications,
    Profile,
}

/// Sidebar submenu sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmenuId {
    Courses,
    Reports,
}

/// UI state for the page shell.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub open_menu: Option<MenuId>,
    pub open_submenu: Option<SubmenuId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            open_menu: None,
            open_submenu: None,
        }
    }
}

impl UiState {
    /// Show or hide the sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Open `menu`, closing any sibling; close it if it was already open.
    /// Returns `true` when the menu ends up open.
    pub fn toggle_menu(&mut self, menu: MenuId) -> bool {
        if self.open_menu == Some(menu) {
            self.open_menu = None;
            false
        } else {
            self.open_menu = Some(menu);
            true
        }
    }

    /// Open `submenu`, closing any sibling; close it if it was already open.
    pub fn toggle_submenu(&mut self, submenu: SubmenuId) {
        if self.open_submenu == Some(submenu) {
            self.open_submenu = None;
        } else {
            self.open_submenu = Some(submenu);
        }
    }

    /// Close every dropdown menu (outside click). Submenus keep their state.
    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    #[must_use]
    pub fn menu_is_open(&self, menu: MenuId) -> bool {
        self.open_menu == Some(menu)
    }

    #[must_use]
    pub fn submenu_is_open(&self, submenu: SubmenuId) -> bool {
        self.open_submenu == Some(submenu)
    }
}
