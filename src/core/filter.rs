//! # List Filtering
//!
//! Two independent axes over the restaurant list: city and alphabetical
//! order. `apply()` derives the displayed view from the raw list and the
//! current `FilterSelection`; it holds no state of its own.
//!
//! ```text
//! restaurants ──► city filter ──► name sort ──► view
//!                 (if Some)       (if not None)
//! ```
//!
//! Names sort by case-sensitive code-point order (`str::cmp`), so uppercase
//! letters come before lowercase: `"Zeta" < "alpha"`.

use std::fmt;

use crate::api::Restaurant;

/// Cities offered by the city picker, in display order.
pub const KNOWN_CITIES: &[&str] = &[
    "Gorontalo",
    "Aceh",
    "Medan",
    "Bali",
    "Bandung",
    "Balikpapan",
    "Malang",
    "Ternate",
    "Surabaya",
];

/// Alphabetical ordering of the list by restaurant name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the API's order.
    #[default]
    None,
    AToZ,
    ZToA,
}

impl SortOrder {
    /// Parses the wire/config form. Anything unrecognized means no sort.
    pub fn parse(value: &str) -> SortOrder {
        match value.trim().to_ascii_lowercase().as_str() {
            "a-z" => SortOrder::AToZ,
            "z-a" => SortOrder::ZToA,
            _ => SortOrder::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "",
            SortOrder::AToZ => "a-z",
            SortOrder::ZToA => "z-a",
        }
    }

    /// Cycles None → A-Z → Z-A → None.
    pub fn next(self) -> SortOrder {
        match self {
            SortOrder::None => SortOrder::AToZ,
            SortOrder::AToZ => SortOrder::ZToA,
            SortOrder::ZToA => SortOrder::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::None => "Alphabetical",
            SortOrder::AToZ => "A-Z",
            SortOrder::ZToA => "Z-A",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two filter axes. `None` on either axis means it is inactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    city: Option<String>,
    pub sort: SortOrder,
}

impl FilterSelection {
    pub fn new(city: Option<&str>, sort: SortOrder) -> Self {
        Self::default().with_city(city).with_sort(sort)
    }

    /// Sets the city axis. Blank input clears it; anything else is stored lowercase.
    pub fn with_city(mut self, city: Option<&str>) -> Self {
        self.city = normalize_city(city);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// True when at least one axis is active.
    pub fn is_active(&self) -> bool {
        self.city.is_some() || self.sort != SortOrder::None
    }

    /// Both axes reset.
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Steps the city axis through `KNOWN_CITIES`, then back to inactive.
    pub fn next_city(self) -> Self {
        let next = match self.city() {
            None => KNOWN_CITIES.first().copied(),
            Some(current) => KNOWN_CITIES
                .iter()
                .position(|c| c.eq_ignore_ascii_case(current))
                .and_then(|i| KNOWN_CITIES.get(i + 1))
                .copied(),
        };
        self.with_city(next)
    }

    /// Display name of the active city ("Bali" rather than "bali").
    pub fn city_label(&self) -> &str {
        match self.city() {
            Some(city) => KNOWN_CITIES
                .iter()
                .find(|c| c.eq_ignore_ascii_case(city))
                .copied()
                .unwrap_or(city),
            None => "City",
        }
    }
}

fn normalize_city(city: Option<&str>) -> Option<String> {
    city.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
}

/// Filters by city, then orders by name. Never reorders when no sort is set;
/// sorting is stable so equal names keep their input order.
pub fn apply<'a>(restaurants: &'a [Restaurant], selection: &FilterSelection) -> Vec<&'a Restaurant> {
    let mut view: Vec<&Restaurant> = match selection.city() {
        Some(city) => restaurants
            .iter()
            .filter(|r| r.city.to_lowercase() == city)
            .collect(),
        None => restaurants.iter().collect(),
    };

    match selection.sort {
        SortOrder::AToZ => view.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::ZToA => view.sort_by(|a, b| b.name.cmp(&a.name)),
        SortOrder::None => {}
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::restaurant;

    fn names<'a>(view: &[&'a Restaurant]) -> Vec<&'a str> {
        view.iter().map(|r| r.name.as_str()).collect()
    }

    fn ids<'a>(view: &[&'a Restaurant]) -> Vec<&'a str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_city_filter_keeps_relative_order() {
        let list = vec![
            restaurant("1", "One", "Bali"),
            restaurant("2", "Two", "Aceh"),
            restaurant("3", "Three", "Bali"),
        ];
        let selection = FilterSelection::new(Some("bali"), SortOrder::None);
        assert_eq!(ids(&apply(&list, &selection)), vec!["1", "3"]);
    }

    #[test]
    fn test_sort_a_to_z() {
        let list = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Bali"),
        ];
        let selection = FilterSelection::new(None, SortOrder::AToZ);
        assert_eq!(names(&apply(&list, &selection)), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_sort_z_to_a() {
        let list = vec![
            restaurant("1", "Bravo", "Bali"),
            restaurant("2", "Alpha", "Bali"),
            restaurant("3", "Charlie", "Bali"),
        ];
        let selection = FilterSelection::new(None, SortOrder::ZToA);
        assert_eq!(
            names(&apply(&list, &selection)),
            vec!["Charlie", "Bravo", "Alpha"]
        );
    }

    #[test]
    fn test_sort_is_case_sensitive_code_point_order() {
        let list = vec![
            restaurant("1", "alpha", "Bali"),
            restaurant("2", "Zeta", "Bali"),
            restaurant("3", "Beta", "Bali"),
        ];
        let selection = FilterSelection::new(None, SortOrder::AToZ);
        assert_eq!(
            names(&apply(&list, &selection)),
            vec!["Beta", "Zeta", "alpha"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let list = vec![
            restaurant("1", "Same", "Bali"),
            restaurant("2", "Other", "Bali"),
            restaurant("3", "Same", "Bali"),
        ];
        let az = apply(&list, &FilterSelection::new(None, SortOrder::AToZ));
        assert_eq!(ids(&az), vec!["2", "1", "3"]);

        let za = apply(&list, &FilterSelection::new(None, SortOrder::ZToA));
        assert_eq!(ids(&za), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_no_selection_returns_input_order() {
        let list = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Aceh"),
            restaurant("3", "Mid", "Medan"),
        ];
        let view = apply(&list, &FilterSelection::default());
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_city_and_sort_combine() {
        let list = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Aceh"),
            restaurant("3", "Beta", "Bali"),
        ];
        let selection = FilterSelection::new(Some("Bali"), SortOrder::AToZ);
        assert_eq!(names(&apply(&list, &selection)), vec!["Beta", "Zeta"]);
    }

    #[test]
    fn test_city_match_ignores_case_of_data() {
        let list = vec![restaurant("1", "One", "BALI"), restaurant("2", "Two", "bali")];
        let selection = FilterSelection::new(Some("bali"), SortOrder::None);
        assert_eq!(apply(&list, &selection).len(), 2);
    }

    #[test]
    fn test_unknown_city_yields_empty_view() {
        let list = vec![restaurant("1", "One", "Bali")];
        let selection = FilterSelection::new(Some("atlantis"), SortOrder::None);
        assert!(apply(&list, &selection).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let selection = FilterSelection::new(Some("bali"), SortOrder::AToZ);
        assert!(apply(&[], &selection).is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_and_is_repeatable() {
        let list = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Bali"),
        ];
        let before = list.clone();
        let selection = FilterSelection::new(Some("bali"), SortOrder::AToZ);
        let first = ids(&apply(&list, &selection));
        let second = ids(&apply(&list, &selection));
        assert_eq!(first, second);
        assert_eq!(list, before);
    }

    #[test]
    fn test_clear_filters_restores_original_order() {
        let list = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Aceh"),
        ];
        let selection = FilterSelection::new(Some("bali"), SortOrder::AToZ);
        assert!(selection.is_active());

        let cleared = selection.clear();
        assert_eq!(cleared.city(), None);
        assert_eq!(cleared.sort, SortOrder::None);
        assert!(!cleared.is_active());
        assert_eq!(ids(&apply(&list, &cleared)), vec!["1", "2"]);
    }

    #[test]
    fn test_blank_city_is_inactive() {
        assert_eq!(FilterSelection::new(Some(""), SortOrder::None).city(), None);
        assert_eq!(FilterSelection::new(Some("  "), SortOrder::None).city(), None);
        assert!(!FilterSelection::new(Some(""), SortOrder::None).is_active());
    }

    #[test]
    fn test_city_is_stored_lowercase() {
        let selection = FilterSelection::new(Some(" Balikpapan "), SortOrder::None);
        assert_eq!(selection.city(), Some("balikpapan"));
        assert_eq!(selection.city_label(), "Balikpapan");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("a-z"), SortOrder::AToZ);
        assert_eq!(SortOrder::parse("Z-A"), SortOrder::ZToA);
        assert_eq!(SortOrder::parse(""), SortOrder::None);
        assert_eq!(SortOrder::parse("newest"), SortOrder::None);
    }

    #[test]
    fn test_sort_order_cycle() {
        assert_eq!(SortOrder::None.next(), SortOrder::AToZ);
        assert_eq!(SortOrder::AToZ.next(), SortOrder::ZToA);
        assert_eq!(SortOrder::ZToA.next(), SortOrder::None);
    }

    #[test]
    fn test_next_city_walks_known_cities_then_clears() {
        let mut selection = FilterSelection::default();
        for expected in KNOWN_CITIES {
            selection = selection.next_city();
            assert_eq!(selection.city(), Some(expected.to_lowercase().as_str()));
        }
        selection = selection.next_city();
        assert_eq!(selection.city(), None);
    }

    #[test]
    fn test_next_city_from_unknown_city_clears() {
        let selection = FilterSelection::new(Some("atlantis"), SortOrder::None);
        assert_eq!(selection.next_city().city(), None);
    }
}
