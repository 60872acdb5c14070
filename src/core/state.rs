//! # Application State
//!
//! Core business state for Dine. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── restaurants: Vec<Restaurant>     // raw list from GET /list
//! ├── selection: FilterSelection       // city + sort axes
//! ├── view: View                       // List | Detail { id }
//! ├── detail: Option<RestaurantDetail> // payload for the open detail view
//! ├── reveal: RevealCursor             // reviews shown on the detail view
//! ├── detail_cache: DetailCache        // details by id, invalidated on review
//! ├── form_error: Option<...>          // inline review form error
//! ├── is_loading / is_submitting       // requests in flight
//! ├── status_message: String           // status bar text
//! └── error: Option<String>            // last request failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::{DetailCache, Restaurant, RestaurantDetail, Review, picture_url};
use crate::core::config::ResolvedConfig;
use crate::core::filter::{self, FilterSelection};
use crate::core::reveal::{RevealCursor, RevealState};
use crate::core::review::ReviewFormError;

/// Which page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Detail { id: String },
}

pub struct App {
    pub restaurants: Vec<Restaurant>,
    pub selection: FilterSelection,
    pub view: View,
    pub detail: Option<RestaurantDetail>,
    pub reveal: RevealCursor,
    /// Restaurant the current `reveal` cursor was created for.
    pub reveal_owner: Option<String>,
    pub detail_cache: DetailCache,
    pub form_error: Option<ReviewFormError>,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub status_message: String,
    pub error: Option<String>,
    pub image_base_url: String,
}

impl App {
    pub fn new(page_size: usize, image_base_url: String) -> Self {
        Self {
            restaurants: Vec::new(),
            selection: FilterSelection::default(),
            view: View::List,
            detail: None,
            reveal: RevealCursor::new(page_size),
            reveal_owner: None,
            detail_cache: DetailCache::new(),
            form_error: None,
            is_loading: false,
            is_submitting: false,
            status_message: String::from("Welcome to Dine!"),
            error: None,
            image_base_url,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.page_size, config.image_base_url.clone());
        app.selection = config.initial_selection.clone();
        app
    }

    /// The list page's rows: filtered and ordered.
    pub fn visible_restaurants(&self) -> Vec<&Restaurant> {
        filter::apply(&self.restaurants, &self.selection)
    }

    /// Filter controls are disabled until there is something to filter.
    pub fn filters_enabled(&self) -> bool {
        !self.restaurants.is_empty()
    }

    /// The "Clear All" control is disabled when no filter is active.
    pub fn can_clear_filters(&self) -> bool {
        self.selection.is_active()
    }

    pub fn reviews(&self) -> &[Review] {
        self.detail
            .as_ref()
            .map(|d| d.customer_reviews.as_slice())
            .unwrap_or_default()
    }

    pub fn visible_reviews(&self) -> &[Review] {
        self.reveal.visible_prefix(self.reviews())
    }

    /// Whether the "Load More" control is shown.
    pub fn can_load_more(&self) -> bool {
        self.reveal.state(self.reviews()) == RevealState::Partial
    }

    pub fn current_detail_id(&self) -> Option<&str> {
        match &self.view {
            View::Detail { id } => Some(id.as_str()),
            View::List => None,
        }
    }

    pub fn detail_picture_url(&self) -> Option<String> {
        self.detail
            .as_ref()
            .filter(|d| !d.picture_id.is_empty())
            .map(|d| picture_url(&self.image_base_url, &d.picture_id))
    }
}
