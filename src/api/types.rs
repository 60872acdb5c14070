//! # Wire Types
//!
//! JSON shapes of the restaurant REST API. Field names follow the API's
//! camelCase; Rust code sees snake_case.
//!
//! ```text
//! GET  /list         → ListResponse   { error, message, count, restaurants }
//! GET  /detail/{id}  → DetailResponse { error, message, restaurant }
//! POST /review       → ReviewResponse { error, message, customerReviews }
//! ```

use serde::{Deserialize, Serialize};

/// A restaurant as it appears in the list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture_id: String,
    pub city: String,
    #[serde(default)]
    pub rating: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Menus {
    #[serde(default)]
    pub foods: Vec<MenuItem>,
    #[serde(default)]
    pub drinks: Vec<MenuItem>,
}

/// A customer review. `date` is preformatted by the server ("13 November 2019").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub name: String,
    pub review: String,
    #[serde(default)]
    pub date: String,
}

/// Full restaurant payload from the detail endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub picture_id: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub menus: Menus,
    #[serde(default)]
    pub customer_reviews: Vec<Review>,
}

/// Body of `POST /review`. Built only through `ReviewDraft::validate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub id: String,
    pub name: String,
    pub review: String,
}

#[derive(Deserialize, Debug)]
pub struct ListResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

#[derive(Deserialize, Debug)]
pub struct DetailResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    pub restaurant: Option<RestaurantDetail>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub customer_reviews: Vec<Review>,
}
