//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::{Category, MenuItem, Menus, Restaurant, RestaurantDetail, Review};
use crate::core::reveal::DEFAULT_PAGE_SIZE;
use crate::core::state::App;

/// A list entry with just the fields filtering looks at filled in.
pub fn restaurant(id: &str, name: &str, city: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        picture_id: String::new(),
        city: city.to_string(),
        rating: 4.0,
    }
}

/// A detail payload with `reviews` numbered customer reviews.
pub fn sample_detail(id: &str, reviews: usize) -> RestaurantDetail {
    RestaurantDetail {
        id: id.to_string(),
        name: format!("Restaurant {id}"),
        description: "A cozy place.".to_string(),
        city: "Bali".to_string(),
        address: "Jln. Pandeglang no 19".to_string(),
        picture_id: String::new(),
        rating: 4.2,
        categories: vec![Category {
            name: "Italia".to_string(),
        }],
        menus: Menus {
            foods: vec![MenuItem {
                name: "Paket rosemary".to_string(),
            }],
            drinks: vec![MenuItem {
                name: "Es teh".to_string(),
            }],
        },
        customer_reviews: (0..reviews)
            .map(|i| Review {
                name: format!("Reviewer {i}"),
                review: format!("Review number {i}"),
                date: "13 November 2019".to_string(),
            })
            .collect(),
    }
}

/// Creates a test App with the default page size.
pub fn test_app() -> App {
    App::new(DEFAULT_PAGE_SIZE, "http://images.test/medium".to_string())
}
