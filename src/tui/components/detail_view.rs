//! # DetailView Component
//!
//! Scrollable body of the restaurant detail page.
//!
//! ```text
//! Kafe Kita                               ★★★★☆ 4.0
//! Jln. Pandeglang no 19, Gorontalo
//! Image: https://.../images/medium/25
//!
//! Description ...
//! Categories: Italia · Modern
//! Foods / Drinks
//!
//! Reviews (7)
//! ┌ Ahmad · 13 November 2019 ┐
//! │ Tidak rekomendasi...     │
//! └──────────────────────────┘
//! [m] Load More (2 remaining)
//! ```
//!
//! Every section is a `Paragraph` measured with `line_count` and stacked into
//! a `ScrollView` canvas, the same way conversation segments are.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{MenuItem, RestaurantDetail, Review};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::restaurant_list::rating_stars;
use crate::tui::event::TuiEvent;

/// Scroll state for the detail page. Persisted in `TuiState`.
#[derive(Default)]
pub struct DetailViewState {
    pub scroll_state: ScrollViewState,
    /// Last measured canvas height (for clamping between frames)
    pub content_height: u16,
    /// Last known viewport height
    pub viewport_height: u16,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used whenever a detail page is opened.
    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for DetailViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

struct Section {
    paragraph: Paragraph<'static>,
    height: u16,
}

impl Section {
    fn new(paragraph: Paragraph<'static>, width: u16) -> Self {
        let height = paragraph.line_count(width) as u16;
        Self { paragraph, height }
    }

    fn blank() -> Self {
        Self {
            paragraph: Paragraph::new(""),
            height: 1,
        }
    }
}

/// Label of the "Load More" control, or `None` once every review is shown.
pub fn load_more_label(remaining: usize) -> Option<String> {
    (remaining > 0).then(|| format!("[m] Load More ({remaining} remaining)"))
}

pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    detail: Option<&'a RestaurantDetail>,
    reviews: &'a [Review],
    remaining: usize,
    picture_url: Option<String>,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailViewState,
        detail: Option<&'a RestaurantDetail>,
        reviews: &'a [Review],
        remaining: usize,
        picture_url: Option<String>,
    ) -> Self {
        Self {
            state,
            detail,
            reviews,
            remaining,
            picture_url,
        }
    }
}

fn heading(text: impl Into<String>) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
}

fn menu_paragraph(title: &str, items: &[MenuItem]) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "  -",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend(items.iter().map(|item| Line::from(format!("  • {}", item.name))));
    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false })
}

fn review_paragraph(review: &Review) -> Paragraph<'static> {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", review.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", review.date),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(review.review.trim().to_string())
        .block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true })
}

fn sections(
    detail: &RestaurantDetail,
    reviews: &[Review],
    remaining: usize,
    picture_url: Option<&str>,
    width: u16,
) -> Vec<Section> {
    let mut out = Vec::new();

    out.push(Section::new(
        Paragraph::new(Line::from(vec![
            Span::styled(
                detail.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(rating_stars(detail.rating), Style::default().fg(Color::Yellow)),
        ]))
        .wrap(Wrap { trim: true }),
        width,
    ));
    out.push(Section::new(
        Paragraph::new(format!("{}, {}", detail.address, detail.city))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        width,
    ));
    if let Some(url) = picture_url {
        out.push(Section::new(
            Paragraph::new(format!("Image: {url}"))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            width,
        ));
    }
    out.push(Section::blank());

    out.push(Section::new(
        Paragraph::new(detail.description.trim().to_string()).wrap(Wrap { trim: true }),
        width,
    ));
    out.push(Section::blank());

    let categories: Vec<&str> = detail.categories.iter().map(|c| c.name.as_str()).collect();
    out.push(Section::new(
        Paragraph::new(Line::from(vec![
            Span::styled("Categories: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(categories.join(" · "), Style::default().fg(Color::Magenta)),
        ]))
        .wrap(Wrap { trim: true }),
        width,
    ));
    out.push(Section::blank());
    out.push(Section::new(menu_paragraph("Foods", &detail.menus.foods), width));
    out.push(Section::new(menu_paragraph("Drinks", &detail.menus.drinks), width));
    out.push(Section::blank());

    out.push(Section::new(
        heading(format!("Reviews ({})", detail.customer_reviews.len())),
        width,
    ));
    if reviews.is_empty() {
        out.push(Section::new(
            Paragraph::new("No reviews yet. Be the first!")
                .style(Style::default().fg(Color::DarkGray)),
            width,
        ));
    }
    for review in reviews {
        // Bordered: inner width is two columns narrower
        let paragraph = review_paragraph(review);
        let height = paragraph.line_count(width.saturating_sub(2)) as u16;
        out.push(Section { paragraph, height });
    }
    if let Some(label) = load_more_label(remaining) {
        out.push(Section::new(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            width,
        ));
    }
    out
}

/// Sum of section heights, capped at what a `u16` canvas can hold.
fn canvas_height(sections: &[Section]) -> u16 {
    sections
        .iter()
        .fold(0u16, |total, s| total.saturating_add(s.height))
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(detail) = self.detail else {
            frame.render_widget(
                Paragraph::new("Loading restaurant...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        };

        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let sections = sections(
            detail,
            self.reviews,
            self.remaining,
            self.picture_url.as_deref(),
            content_width,
        );
        let total_height = canvas_height(&sections);

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for section in sections {
            let rect = Rect::new(0, y_offset, content_width, section.height);
            scroll_view.render_widget(section.paragraph, rect);
            y_offset = y_offset.saturating_add(section.height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
