//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Key Routing
//!
//! - **List page**: ↑/↓ move, Enter opens, `c` city, `s` sort, `x` clear,
//!   `r` reload, `q` quit.
//! - **Detail page**: Esc/Backspace back, `m` load more reviews, Tab focuses
//!   the review form, ↑/↓/PgUp/PgDn scroll. While the form has focus every
//!   key goes to it until Esc releases it.
//!
//! Ctrl+C quits from anywhere.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (request in flight): draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events or finished requests.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{HttpRestaurantApi, RestaurantApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::review::ReviewField;
use crate::core::state::{App, View};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailViewState, FormEvent, ListEvent, RestaurantListState, ReviewFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub restaurant_list: RestaurantListState,
    pub detail_view: DetailViewState,
    pub review_form: ReviewFormState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            restaurant_list: RestaurantListState::new(),
            detail_view: DetailViewState::new(),
            review_form: ReviewFormState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets Shift+Tab and Ctrl+J arrive unambiguously;
        // terminals without the protocol ignore it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Show
        );
    }
}

/// Build the REST client from the resolved config.
pub fn build_api(config: &ResolvedConfig) -> std::io::Result<Arc<dyn RestaurantApi>> {
    let api = HttpRestaurantApi::new(
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .map_err(std::io::Error::other)?;
    info!("Using API at {}", api.base_url());
    Ok(Arc::new(api))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api = build_api(&config)?;
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    dispatch(&mut app, &mut tui, Action::LoadRestaurants, &api, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let busy = app.is_loading || app.is_submitting;
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };
            if dispatch(&mut app, &mut tui, action, &api, &tx) {
                break 'main;
            }
        }

        // Handle finished requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &api, &tx) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Turn a key event into an action for the current page, or handle it
/// locally (scrolling, form editing) and return `None`.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match &app.view {
        View::List => route_list_event(app, tui, event),
        View::Detail { id } => route_detail_event(app, tui, id, event),
    }
}

fn route_list_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let visible = app.visible_restaurants();
    if let Some(ListEvent::Open(index)) = tui.restaurant_list.handle_event(event, visible.len()) {
        return visible
            .get(index)
            .map(|restaurant| Action::OpenDetail(restaurant.id.clone()));
    }
    match event {
        TuiEvent::InputChar('c') => Some(Action::CycleCity),
        TuiEvent::InputChar('s') => Some(Action::CycleSort),
        TuiEvent::InputChar('x') => Some(Action::ClearFilters),
        TuiEvent::InputChar('r') => Some(Action::LoadRestaurants),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

fn route_detail_event(
    app: &App,
    tui: &mut TuiState,
    id: &str,
    event: &TuiEvent,
) -> Option<Action> {
    if tui.review_form.is_focused() {
        return match tui.review_form.handle_event(event)? {
            FormEvent::Submit { name, review } => Some(Action::SubmitReview { name, review }),
            FormEvent::Blurred => None,
        };
    }
    match event {
        TuiEvent::Escape | TuiEvent::Backspace => Some(Action::BackToList),
        TuiEvent::InputChar('m') => Some(Action::LoadMoreReviews),
        TuiEvent::InputChar('r') if app.error.is_some() => Some(Action::OpenDetail(id.to_string())),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::Tab | TuiEvent::BackTab if app.detail.is_some() => {
            tui.review_form.focus(ReviewField::Name);
            None
        }
        _ => {
            tui.detail_view.handle_event(event);
            None
        }
    }
}

/// What an action means for presentation state, captured before `update`
/// consumes it.
#[derive(Debug, Default)]
struct PresentationSync {
    opening: bool,
    leaving: bool,
    /// Restaurant whose review was just saved.
    review_saved_for: Option<String>,
}

impl PresentationSync {
    fn of(action: &Action) -> Self {
        match action {
            Action::OpenDetail(_) => Self {
                opening: true,
                ..Self::default()
            },
            Action::BackToList => Self {
                leaving: true,
                ..Self::default()
            },
            Action::ReviewPosted { id, result: Ok(_) } => Self {
                review_saved_for: Some(id.clone()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Runs after `update`, so `app` already reflects the action.
    fn apply(self, app: &App, tui: &mut TuiState) {
        if self.opening {
            tui.detail_view.reset();
            tui.review_form = ReviewFormState::new();
        }
        if self.leaving {
            tui.review_form.focus = None;
        }
        // A draft typed for another restaurant meanwhile is left alone
        if let Some(id) = self.review_saved_for
            && app.current_detail_id() == Some(id.as_str())
        {
            tui.review_form.reset();
        }
    }
}

/// Apply an action, sync presentation state, and start any requested I/O.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    api: &Arc<dyn RestaurantApi>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let sync = PresentationSync::of(&action);
    let effect = update(app, action);
    sync.apply(app, tui);

    match effect {
        Effect::Quit => return true,
        Effect::None => {}
        effect => spawn_effect(effect, api.clone(), tx.clone()),
    }
    false
}

fn spawn_effect(effect: Effect, api: Arc<dyn RestaurantApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning request for {:?}", effect);
    tokio::spawn(async move {
        let action = match effect {
            Effect::FetchList => Action::RestaurantsLoaded(api.list_restaurants().await),
            Effect::FetchDetail(id) => {
                let result = api.restaurant_detail(&id).await;
                Action::DetailLoaded { id, result }
            }
            Effect::PostReview(review) => {
                let result = api.post_review(&review).await;
                Action::ReviewPosted {
                    id: review.id,
                    result,
                }
            }
            Effect::None | Effect::Quit => return,
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver request result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{restaurant, sample_detail, test_app};

    fn list_app() -> App {
        let mut app = test_app();
        app.restaurants = vec![
            restaurant("1", "Zeta", "Bali"),
            restaurant("2", "Alpha", "Aceh"),
        ];
        app
    }

    fn detail_app() -> App {
        let mut app = test_app();
        app.view = View::Detail {
            id: "abc".to_string(),
        };
        app.detail = Some(sample_detail("abc", 7));
        app
    }

    #[test]
    fn test_list_keys_map_to_filter_actions() {
        let app = list_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('c')),
            Some(Action::CycleCity)
        ));
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('s')),
            Some(Action::CycleSort)
        ));
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('x')),
            Some(Action::ClearFilters)
        ));
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_enter_opens_selected_restaurant_of_filtered_view() {
        let mut app = list_app();
        app.selection = app.selection.clone().with_sort(crate::core::filter::SortOrder::AToZ);
        let mut tui = TuiState::new();
        // Row 0 of the sorted view is "Alpha"
        match route_event(&app, &mut tui, &TuiEvent::Submit) {
            Some(Action::OpenDetail(id)) => assert_eq!(id, "2"),
            other => panic!("expected OpenDetail, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_keys() {
        let app = detail_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('m')),
            Some(Action::LoadMoreReviews)
        ));
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::BackToList)
        ));
        // No error, so `r` does nothing here
        assert!(route_event(&app, &mut tui, &TuiEvent::InputChar('r')).is_none());
    }

    #[test]
    fn test_focused_form_captures_letters() {
        let app = detail_app();
        let mut tui = TuiState::new();
        assert!(route_event(&app, &mut tui, &TuiEvent::Tab).is_none());
        assert!(tui.review_form.is_focused());

        // `m` is typed, not "load more"
        assert!(route_event(&app, &mut tui, &TuiEvent::InputChar('m')).is_none());
        assert_eq!(tui.review_form.name, "m");

        match route_event(&app, &mut tui, &TuiEvent::Submit) {
            Some(Action::SubmitReview { name, review }) => {
                assert_eq!(name, "m");
                assert_eq!(review, "");
            }
            other => panic!("expected SubmitReview, got {:?}", other),
        }

        // Esc leaves the form, the next Esc leaves the page
        assert!(route_event(&app, &mut tui, &TuiEvent::Escape).is_none());
        assert!(matches!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::BackToList)
        ));
    }

    #[test]
    fn test_saved_review_clears_form_only_for_open_restaurant() {
        let app = detail_app();
        let mut tui = TuiState::new();
        tui.review_form.name = "Dewi".to_string();

        let elsewhere = Action::ReviewPosted {
            id: "other".to_string(),
            result: Ok(Vec::new()),
        };
        PresentationSync::of(&elsewhere).apply(&app, &mut tui);
        assert_eq!(tui.review_form.name, "Dewi");

        let here = Action::ReviewPosted {
            id: "abc".to_string(),
            result: Ok(Vec::new()),
        };
        PresentationSync::of(&here).apply(&app, &mut tui);
        assert!(tui.review_form.name.is_empty());
    }

    #[test]
    fn test_opening_detail_starts_with_blank_form() {
        let app = detail_app();
        let mut tui = TuiState::new();
        tui.review_form.name = "Dewi".to_string();
        tui.review_form.focus(ReviewField::Review);

        PresentationSync::of(&Action::OpenDetail("abc".to_string())).apply(&app, &mut tui);
        assert!(tui.review_form.name.is_empty());
        assert!(!tui.review_form.is_focused());
    }

    #[test]
    fn test_form_not_focusable_while_loading() {
        let mut app = detail_app();
        app.detail = None;
        let mut tui = TuiState::new();
        route_event(&app, &mut tui, &TuiEvent::Tab);
        assert!(!tui.review_form.is_focused());
    }
}
