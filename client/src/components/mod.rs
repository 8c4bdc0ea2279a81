//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from static content while reading/writing
//! shared state from Leptos context providers.

pub mod backdrop;
pub mod glass_card;
pub mod hero;
pub mod navbar;
pub mod publication_card;
pub mod service_list;
