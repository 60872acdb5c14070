//! # Actions
//!
//! Everything that can happen in Dine becomes an `Action`.
//! User presses `s`? That's `Action::CycleSort`.
//! API responds? That's `Action::RestaurantsLoaded(result)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and returns an `Effect` describing any I/O the adapter
//! should perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effects.

use log::{debug, info, warn};

use crate::api::{ApiError, NewReview, Restaurant, RestaurantDetail, Review};
use crate::core::filter::SortOrder;
use crate::core::review::ReviewDraft;
use crate::core::state::{App, View};

pub const REVIEW_ADDED_MESSAGE: &str = "Your review has been added 🎉️.";

#[derive(Debug)]
pub enum Action {
    /// (Re)fetch the restaurant list.
    LoadRestaurants,
    RestaurantsLoaded(Result<Vec<Restaurant>, ApiError>),
    SetCity(Option<String>),
    CycleCity,
    SetSort(SortOrder),
    CycleSort,
    ClearFilters,
    OpenDetail(String),
    DetailLoaded {
        id: String,
        result: Result<RestaurantDetail, ApiError>,
    },
    LoadMoreReviews,
    BackToList,
    SubmitReview {
        name: String,
        review: String,
    },
    ReviewPosted {
        id: String,
        result: Result<Vec<Review>, ApiError>,
    },
    Quit,
}

/// I/O requested by `update()`. The adapter performs it and feeds the
/// outcome back as another `Action`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchList,
    FetchDetail(String),
    PostReview(NewReview),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadRestaurants => {
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Loading restaurants...");
            Effect::FetchList
        }
        Action::RestaurantsLoaded(Ok(restaurants)) => {
            info!("Loaded {} restaurants", restaurants.len());
            app.is_loading = false;
            app.status_message = format!("{} restaurants", restaurants.len());
            app.restaurants = restaurants;
            Effect::None
        }
        Action::RestaurantsLoaded(Err(e)) => {
            warn!("Failed to load restaurants: {}", e);
            app.is_loading = false;
            app.status_message = String::from("Failed to load restaurants");
            app.error = Some(e.to_string());
            Effect::None
        }
        Action::SetCity(city) => {
            if app.filters_enabled() {
                app.selection = app.selection.clone().with_city(city.as_deref());
                announce_filters(app);
            }
            Effect::None
        }
        Action::CycleCity => {
            if app.filters_enabled() {
                app.selection = app.selection.clone().next_city();
                announce_filters(app);
            }
            Effect::None
        }
        Action::SetSort(sort) => {
            if app.filters_enabled() {
                app.selection = app.selection.clone().with_sort(sort);
                announce_filters(app);
            }
            Effect::None
        }
        Action::CycleSort => {
            if app.filters_enabled() {
                let next = app.selection.sort.next();
                app.selection = app.selection.clone().with_sort(next);
                announce_filters(app);
            }
            Effect::None
        }
        Action::ClearFilters => {
            if app.can_clear_filters() {
                app.selection = app.selection.clone().clear();
                app.status_message = String::from("Filters cleared");
            }
            Effect::None
        }
        Action::OpenDetail(id) => open_detail(app, id),
        Action::DetailLoaded { id, result } => {
            if app.current_detail_id() != Some(id.as_str()) {
                debug!("Dropping detail for {} (no longer open)", id);
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(detail) => {
                    app.status_message = detail.name.clone();
                    app.detail_cache.insert(detail.clone());
                    debug!("{} details cached", app.detail_cache.len());
                    app.detail = Some(detail);
                }
                Err(e) => {
                    warn!("Failed to load detail {}: {}", id, e);
                    app.status_message = String::from("Failed to load restaurant");
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::LoadMoreReviews => {
            if app.can_load_more() {
                app.reveal = app.reveal.advance();
                debug!("Revealed {} reviews", app.visible_reviews().len());
            }
            Effect::None
        }
        Action::BackToList => {
            app.view = View::List;
            app.detail = None;
            // The cursor belongs to the detail page it was shown on
            app.reveal = app.reveal.reinitialize();
            app.reveal_owner = None;
            app.form_error = None;
            app.error = None;
            Effect::None
        }
        Action::SubmitReview { name, review } => {
            if app.is_submitting {
                return Effect::None;
            }
            let draft = ReviewDraft {
                name,
                review,
                ..ReviewDraft::new(app.current_detail_id().unwrap_or_default())
            };
            match draft.validate() {
                Ok(new_review) => {
                    app.form_error = None;
                    app.is_submitting = true;
                    app.status_message = String::from("Submitting review...");
                    Effect::PostReview(new_review)
                }
                Err(e) => {
                    debug!("Review form rejected: {}", e);
                    app.form_error = Some(e);
                    Effect::None
                }
            }
        }
        Action::ReviewPosted { id, result } => {
            app.is_submitting = false;
            match result {
                Ok(reviews) => {
                    info!("Review posted for {} ({} reviews now)", id, reviews.len());
                    app.detail_cache.invalidate(&id);
                    app.status_message = String::from(REVIEW_ADDED_MESSAGE);
                    if app.current_detail_id() != Some(id.as_str()) {
                        return Effect::None;
                    }
                    if let Some(detail) = app.detail.as_mut() {
                        detail.customer_reviews = reviews;
                    }
                    Effect::FetchDetail(id)
                }
                Err(e) => {
                    warn!("Failed to post review for {}: {}", id, e);
                    app.status_message = format!("Failed to add review: {e}");
                    Effect::None
                }
            }
        }
        Action::Quit => Effect::Quit,
    }
}

/// Shows a detail view with a fresh reveal cursor. A cursor already owned by
/// this restaurant is kept, which only happens while its page is still open.
fn open_detail(app: &mut App, id: String) -> Effect {
    if app.reveal_owner.as_deref() != Some(id.as_str()) {
        app.reveal = app.reveal.reinitialize();
        app.reveal_owner = Some(id.clone());
    }
    app.view = View::Detail { id: id.clone() };
    app.form_error = None;
    app.error = None;

    if let Some(cached) = app.detail_cache.get(&id) {
        debug!("Serving detail {} from cache", id);
        app.status_message = cached.name.clone();
        app.detail = Some(cached.clone());
        return Effect::None;
    }

    app.detail = None;
    app.is_loading = true;
    app.status_message = String::from("Loading restaurant...");
    Effect::FetchDetail(id)
}

fn announce_filters(app: &mut App) {
    let shown = app.visible_restaurants().len();
    app.status_message = format!(
        "City: {} | Sort: {} | {} shown",
        app.selection.city_label(),
        app.selection.sort.label(),
        shown
    );
}
