//! # Restaurant API
//!
//! Everything that touches the network lives here. The core never calls
//! into this module's I/O; it only uses the wire types.

pub mod cache;
pub mod client;
pub mod types;

pub use cache::DetailCache;
pub use client::{ApiError, HttpRestaurantApi, RestaurantApi, picture_url};
pub use types::{
    Category, Menus, MenuItem, NewReview, Restaurant, RestaurantDetail, Review,
};
