//! # FilterBar Component
//!
//! Page header for the restaurant list: title, blurb and the filter row.
//!
//! ```text
//! Restaurants
//! Explore restaurants, find the perfect spot, ...
//! ─────────────────────────────────────────────
//! Filter by : [c] Bali   [s] A-Z                 [x] Clear All
//! ```
//!
//! The city/sort controls are dimmed while there are no restaurants, and
//! "Clear All" is dimmed while no filter is active.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::filter::{FilterSelection, SortOrder};
use crate::tui::component::Component;

pub const BLURB: &str = "Explore restaurants, find the perfect spot, stay updated on food trends, \
    and connect with fellow foodies. Join us on a flavorful journey celebrating the art of dining!";

/// Rows the header needs: title, blurb (2), separator, filter row.
pub const FILTER_BAR_HEIGHT: u16 = 5;

pub struct FilterBar<'a> {
    pub selection: &'a FilterSelection,
    pub filters_enabled: bool,
    pub can_clear: bool,
}

impl FilterBar<'_> {
    fn control_style(&self, active: bool) -> Style {
        if !self.filters_enabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn filter_line(&self) -> Line<'static> {
        let city_active = self.selection.city().is_some();
        let sort_active = self.selection.sort != SortOrder::None;
        Line::from(vec![
            Span::styled("Filter by : ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("[c] {}", self.selection.city_label()),
                self.control_style(city_active),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[s] {}", self.selection.sort.label()),
                self.control_style(sort_active),
            ),
        ])
    }

    pub fn clear_line(&self) -> Line<'static> {
        let style = if self.can_clear {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        Line::from(Span::styled("[x] Clear All", style)).right_aligned()
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, blurb_area, rule_area, filter_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(
                "Restaurants",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(BLURB)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            blurb_area,
        );
        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
            rule_area,
        );

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(filter_area);
        frame.render_widget(self.filter_line(), left);
        frame.render_widget(self.clear_line(), right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_filter_line_shows_placeholders_when_inactive() {
        let selection = FilterSelection::default();
        let bar = FilterBar {
            selection: &selection,
            filters_enabled: true,
            can_clear: false,
        };
        assert_eq!(
            line_text(&bar.filter_line()),
            "Filter by : [c] City   [s] Alphabetical"
        );
    }

    #[test]
    fn test_filter_line_shows_active_values() {
        let selection = FilterSelection::new(Some("balikpapan"), SortOrder::ZToA);
        let bar = FilterBar {
            selection: &selection,
            filters_enabled: true,
            can_clear: true,
        };
        assert_eq!(
            line_text(&bar.filter_line()),
            "Filter by : [c] Balikpapan   [s] Z-A"
        );
    }

    #[test]
    fn test_clear_control_dimmed_without_filters() {
        let selection = FilterSelection::default();
        let bar = FilterBar {
            selection: &selection,
            filters_enabled: true,
            can_clear: false,
        };
        let line = bar.clear_line();
        assert!(line.spans[0].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_controls_dimmed_when_list_empty() {
        let selection = FilterSelection::default();
        let bar = FilterBar {
            selection: &selection,
            filters_enabled: false,
            can_clear: false,
        };
        let line = bar.filter_line();
        assert!(line.spans[1].style.add_modifier.contains(Modifier::DIM));
    }
}
