//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status bar with page title, status and spinner
//! - `FilterBar`: list page header with the city / sort / clear controls
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame and renders:
//! - `RestaurantListState` / `RestaurantList`: selectable list page body
//! - `DetailViewState` / `DetailView`: scrollable detail page body
//! - `ReviewFormState` / `ReviewForm`: name + review inputs
//!
//! Components never touch `App` directly. Everything they need arrives as
//! props, and anything they want to change comes back as an event.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status bar)
//! ├── filter_bar.rs       (list header + filter controls)
//! ├── restaurant_list.rs  (list rows, selection)
//! ├── detail_view.rs      (detail sections, reviews, load more)
//! └── review_form.rs      (review inputs)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

mod filter_bar;
pub use filter_bar::{FILTER_BAR_HEIGHT, FilterBar};

pub mod restaurant_list;
pub use restaurant_list::{ListEvent, RestaurantList, RestaurantListState};

pub mod detail_view;
pub use detail_view::{DetailView, DetailViewState};

pub mod review_form;
pub use review_form::{FormEvent, ReviewForm, ReviewFormState};
