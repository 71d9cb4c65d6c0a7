//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles fragment fetches, form submission, and the simulated
//! notification endpoints.

pub mod api;
