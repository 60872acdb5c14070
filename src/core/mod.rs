//! # Core Application Logic
//!
//! This module contains Dine's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • filter (list view)   │
//!                    │  • reveal (load more)   │
//!                    │  • review (form rules)  │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │ ─────────► │    API     │
//!            │  Adapter   │  spawns    │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`filter`]: City/alphabetical filtering of the restaurant list
//! - [`reveal`]: The "Load More" cursor over a restaurant's reviews
//! - [`review`]: Review form validation
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod filter;
pub mod reveal;
pub mod review;
pub mod state;

pub use action::{Action, Effect, update};
pub use state::{App, View};
