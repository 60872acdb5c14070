//! # Restaurant List Component
//!
//! The list page body: one row per restaurant in the filtered view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RestaurantListState` lives in `TuiState`
//! - `RestaurantList` is created each frame with borrowed state and the
//!   current view as props
//!
//! Selection is an index into the *filtered* view, so it is clamped
//! whenever the view shrinks (a filter was applied).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Restaurant;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent state for the list page.
#[derive(Default)]
pub struct RestaurantListState {
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the restaurant at this index of the filtered view.
    Open(usize),
}

impl RestaurantListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the selection inside a view of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle a key event against a view of `len` rows.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<ListEvent> {
        if len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp(len);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(len - 1);
                self.clamp(len);
                None
            }
            TuiEvent::ScrollToTop => {
                self.selected = 0;
                self.clamp(len);
                None
            }
            TuiEvent::ScrollToBottom => {
                self.selected = len - 1;
                self.clamp(len);
                None
            }
            TuiEvent::Submit => {
                self.clamp(len);
                Some(ListEvent::Open(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the list.
pub struct RestaurantList<'a> {
    state: &'a mut RestaurantListState,
    restaurants: &'a [&'a Restaurant],
    is_loading: bool,
}

impl<'a> RestaurantList<'a> {
    pub fn new(
        state: &'a mut RestaurantListState,
        restaurants: &'a [&'a Restaurant],
        is_loading: bool,
    ) -> Self {
        Self {
            state,
            restaurants,
            is_loading,
        }
    }
}

impl Component for RestaurantList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  r Reload  q Quit ").centered())
            .padding(Padding::horizontal(1));

        if self.restaurants.is_empty() {
            let message = if self.is_loading {
                "Loading restaurants..."
            } else {
                "No restaurants match the current filters."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.restaurants.len());
        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .restaurants
            .iter()
            .enumerate()
            .map(|(i, restaurant)| {
                row(restaurant, inner_width, i == self.state.selected)
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.state.list_state);
    }
}

fn row(restaurant: &Restaurant, width: usize, selected: bool) -> ListItem<'static> {
    let stars = rating_stars(restaurant.rating);
    let city = format!("  {}", restaurant.city);
    let fixed = stars.width() + city.width() + 2;
    let name_width = width.saturating_sub(fixed);
    let name = truncate_to_width(&restaurant.name, name_width);
    let padded = format!("{}{}", name, " ".repeat(name_width.saturating_sub(name.width())));

    let base = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let accent = |color: Color| if selected { base } else { Style::default().fg(color) };

    ListItem::new(Line::from(vec![
        Span::styled(padded, base),
        Span::styled(city, accent(Color::Cyan)),
        Span::styled("  ", base),
        Span::styled(stars, accent(Color::Yellow)),
    ]))
}

/// Five-star rating text with the numeric value, e.g. `★★★★☆ 4.2`.
pub fn rating_stars(rating: f32) -> String {
    let clamped = rating.clamp(0.0, 5.0);
    let filled = clamped.round() as usize;
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), clamped)
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.2), "★★★★☆ 4.2");
        assert_eq!(rating_stars(4.6), "★★★★★ 4.6");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆ 0.0");
        assert_eq!(rating_stars(9.0), "★★★★★ 5.0");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Kafe Kita", 20), "Kafe Kita");
        assert_eq!(truncate_to_width("Kafe Kita", 7), "Kafe...");
        assert_eq!(truncate_to_width("Kafe Kita", 2), "..");
        // Wide characters count as two columns
        assert_eq!(truncate_to_width("寿司寿司寿司", 7), "寿司...");
    }

    #[test]
    fn test_navigation_clamps_to_view() {
        let mut state = RestaurantListState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, 3), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, 3), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, 3), None);
        assert_eq!(state.selected, 2);
        assert_eq!(state.handle_event(&TuiEvent::Submit, 3), Some(ListEvent::Open(2)));

        // View shrank after a filter was applied
        state.clamp(1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_view_ignores_input() {
        let mut state = RestaurantListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, 0), None);
        state.clamp(0);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_home_end() {
        let mut state = RestaurantListState::new();
        state.handle_event(&TuiEvent::ScrollToBottom, 5);
        assert_eq!(state.selected, 4);
        state.handle_event(&TuiEvent::ScrollToTop, 5);
        assert_eq!(state.selected, 0);
    }
}
