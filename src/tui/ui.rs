use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DetailView, FILTER_BAR_HEIGHT, FilterBar, RestaurantList, ReviewForm, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let page_title = page_title(app);
    TitleBar {
        page_title: &page_title,
        status_message: &app.status_message,
        is_busy: app.is_loading || app.is_submitting,
        spinner_frame,
    }
    .render(frame, title_area);

    match &app.view {
        View::List => draw_list_page(frame, main_area, app, tui),
        View::Detail { .. } => draw_detail_page(frame, main_area, app, tui),
    }
}

fn page_title(app: &App) -> String {
    match &app.view {
        View::List => String::from("Restaurants"),
        View::Detail { .. } => app
            .detail
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| String::from("Restaurant")),
    }
}

fn draw_list_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [header_area, list_area] =
        Layout::vertical([Length(FILTER_BAR_HEIGHT), Min(0)]).areas(area);

    FilterBar {
        selection: &app.selection,
        filters_enabled: app.filters_enabled(),
        can_clear: app.can_clear_filters(),
    }
    .render(frame, header_area);

    if let Some(error_msg) = &app.error {
        draw_error_view(frame, list_area, error_msg, "r Retry  q Quit");
        return;
    }

    let visible = app.visible_restaurants();
    RestaurantList::new(&mut tui.restaurant_list, &visible, app.is_loading)
        .render(frame, list_area);
}

fn draw_detail_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let form_height = tui.review_form.calculate_height(area.width);
    let [body_area, form_area] = Layout::vertical([Min(0), Length(form_height)]).areas(area);

    if let Some(error_msg) = &app.error {
        draw_error_view(frame, body_area, error_msg, "Esc Back");
    } else {
        DetailView::new(
            &mut tui.detail_view,
            app.detail.as_ref(),
            app.visible_reviews(),
            app.reveal.remaining(app.reviews()),
            app.detail_picture_url(),
        )
        .render(frame, body_area);
    }

    // Reviews can only be written once the restaurant is there
    if app.detail.is_some() {
        ReviewForm::new(&tui.review_form, app.form_error, app.is_submitting)
            .render(frame, form_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, hint: &'static str) {
    let error_paragraph = Paragraph::new(error_msg.to_string())
        .block(
            Block::bordered()
                .title("ERROR")
                .title_bottom(Line::from(format!(" {hint} ")).centered())
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{FilterSelection, SortOrder};
    use crate::core::review::ReviewFormError;
    use crate::test_support::{restaurant, sample_detail, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_app() -> App {
        let mut app = test_app();
        app.restaurants = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Aceh"),
            restaurant("3", "Beta", "Bali"),
        ];
        app
    }

    #[test]
    fn test_draw_ui_empty_app() {
        let app = test_app();
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);
        assert!(screen.contains("Dine | Restaurants | Welcome to Dine!"));
        assert!(screen.contains("No restaurants match the current filters."));
    }

    #[test]
    fn test_list_page_renders_filtered_view_in_order() {
        let mut app = list_app();
        app.selection = FilterSelection::new(Some("Bali"), SortOrder::ZToA);
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);

        assert!(screen.contains("[c] Bali"));
        assert!(screen.contains("[s] Z-A"));
        assert!(!screen.contains("Alpha"));
        let zeta = screen.find("Zeta").unwrap();
        let beta = screen.find("Beta").unwrap();
        assert!(zeta < beta);
    }

    #[test]
    fn test_list_error_shows_retry_hint() {
        let mut app = test_app();
        app.error = Some("Network error: connection refused".to_string());
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);
        assert!(screen.contains("ERROR"));
        assert!(screen.contains("r Retry"));
    }

    #[test]
    fn test_detail_page_shows_form_and_title() {
        let mut app = test_app();
        app.view = View::Detail {
            id: "abc".to_string(),
        };
        app.detail = Some(sample_detail("abc", 2));
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 40);
        assert!(screen.contains("Dine | Restaurant abc"));
        assert!(screen.contains(" Name "));
        assert!(screen.contains(" Review "));
        assert!(screen.contains("Reviewer 1"));
        assert!(!screen.contains("Load More"));
    }

    #[test]
    fn test_detail_page_shows_form_error() {
        let mut app = test_app();
        app.view = View::Detail {
            id: "abc".to_string(),
        };
        app.detail = Some(sample_detail("abc", 0));
        app.form_error = Some(ReviewFormError::EmptyName);
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 40);
        assert!(screen.contains(&ReviewFormError::EmptyName.to_string()));
    }

    #[test]
    fn test_detail_page_loading_hides_form() {
        let mut app = test_app();
        app.view = View::Detail {
            id: "abc".to_string(),
        };
        app.is_loading = true;
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 80, 24);
        assert!(screen.contains("Loading restaurant..."));
        assert!(!screen.contains(" Name "));
    }
}
