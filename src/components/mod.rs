//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and interaction surfaces while reading
//! and writing shared state from Leptos context providers.

pub mod content_panel;
pub mod notification_bell;
pub mod password_input;
pub mod ripple_button;
pub mod sidebar;
pub mod toast_host;
pub mod topbar;
pub mod upload_preview;
