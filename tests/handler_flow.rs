//! Event handler flows as driven by the plugin shim.

use photoseek::app::NO_RESULTS_MESSAGE;
use photoseek::{handle_event, Action, AppState, Event, FetchRequest, Image, SearchPage, Theme};

fn state() -> AppState {
    AppState::new(Theme::default())
}

fn single_fetch(actions: Vec<Action>) -> FetchRequest {
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

fn page(ids: &[&str], total: u64, total_pages: u32) -> SearchPage {
    SearchPage {
        results: ids.iter().map(|id| Image::new(*id, *id)).collect(),
        total,
        total_pages,
    }
}

fn deliver(state: &mut AppState, request: &FetchRequest, page: SearchPage) -> (bool, Vec<Action>) {
    handle_event(
        state,
        &Event::PageLoaded {
            ticket: request.ticket,
            page,
        },
    )
    .unwrap()
}

#[test]
fn first_page_emits_no_scroll_signal() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("cats".into())).unwrap();
    let request = single_fetch(actions);

    let (render, actions) = deliver(&mut state, &request, page(&["img1", "img2"], 2, 1));

    assert!(render);
    assert!(actions.is_empty());
}

#[test]
fn later_pages_emit_one_scroll_signal() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("dogs".into())).unwrap();
    let first = single_fetch(actions);
    deliver(&mut state, &first, page(&["a", "b"], 6, 3));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let second = single_fetch(actions);
    assert_eq!(second.page, 2);

    let (_, actions) = deliver(&mut state, &second, page(&["c", "d"], 6, 3));
    assert_eq!(actions, vec![Action::ScrollToLatest { first_new: 2 }]);
}

#[test]
fn failed_and_empty_later_pages_still_scroll() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("dogs".into())).unwrap();
    let first = single_fetch(actions);
    deliver(&mut state, &first, page(&["a", "b"], 6, 3));

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let second = single_fetch(actions);
    let (render, actions) = handle_event(
        &mut state,
        &Event::PageFailed {
            ticket: second.ticket,
            error: "HTTP error: status 503".into(),
        },
    )
    .unwrap();
    assert!(render);
    assert_eq!(actions, vec![Action::ScrollToLatest { first_new: 2 }]);

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let third = single_fetch(actions);
    assert_eq!(third.page, 3);

    let (_, actions) = deliver(&mut state, &third, page(&[], 0, 0));
    assert_eq!(
        actions,
        vec![
            Action::Notify {
                message: NO_RESULTS_MESSAGE.to_string()
            },
            Action::ScrollToLatest { first_new: 2 },
        ]
    );
    assert!(!state.session.has_more());
}

#[test]
fn load_more_while_fetching_is_ignored() {
    let mut state = state();
    handle_event(&mut state, &Event::Search("dogs".into())).unwrap();

    let (render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn empty_results_notify_once() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("zzzz123".into())).unwrap();
    let request = single_fetch(actions);

    let (_, actions) = deliver(&mut state, &request, page(&[], 0, 0));

    assert_eq!(
        actions,
        vec![Action::Notify {
            message: NO_RESULTS_MESSAGE.to_string()
        }]
    );
    assert!(!state.session.has_error());
}

#[test]
fn failure_renders_error_status() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("owls".into())).unwrap();
    let request = single_fetch(actions);

    let (render, actions) = handle_event(
        &mut state,
        &Event::PageFailed {
            ticket: request.ticket,
            error: "HTTP error: status 401".into(),
        },
    )
    .unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert!(state.session.has_error());
    assert!(!state.session.is_loading());

    let vm = state.compute_viewmodel(24, 80);
    assert!(matches!(vm.status, photoseek::ui::StatusLine::Error { .. }));
}

#[test]
fn stale_completion_does_not_render() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("old".into())).unwrap();
    let stale = single_fetch(actions);
    handle_event(&mut state, &Event::Search("new".into())).unwrap();

    let (render, actions) = deliver(&mut state, &stale, page(&["x"], 1, 1));
    assert!(!render);
    assert!(actions.is_empty());

    let (render, _) = handle_event(
        &mut state,
        &Event::PageFailed {
            ticket: stale.ticket,
            error: "timeout".into(),
        },
    )
    .unwrap();
    assert!(!render);
    assert!(!state.session.has_error());
}

#[test]
fn clearing_the_query_stops_pagination() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("sun".into())).unwrap();
    let request = single_fetch(actions);
    deliver(&mut state, &request, page(&["a"], 24, 2));

    let (_, actions) = handle_event(&mut state, &Event::Search(String::new())).unwrap();

    assert!(actions.is_empty());
    assert!(!state.session.has_more());
    assert!(!state.session.is_loading());
    assert!(state.session.images().is_empty());
}

#[test]
fn toast_clears_after_its_timer() {
    let mut state = state();
    state.show_toast(NO_RESULTS_MESSAGE);

    let (render, _) = handle_event(&mut state, &Event::ToastExpired).unwrap();
    assert!(render);
    assert!(state.toast.is_none());

    let (render, _) = handle_event(&mut state, &Event::ToastExpired).unwrap();
    assert!(!render);
}

#[test]
fn reveal_moves_cursor_to_new_page() {
    let mut state = state();
    let (_, actions) = handle_event(&mut state, &Event::Search("hills".into())).unwrap();
    let first = single_fetch(actions);
    deliver(&mut state, &first, page(&["a", "b"], 4, 2));
    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let second = single_fetch(actions);

    let (_, actions) = deliver(&mut state, &second, page(&["c", "d"], 4, 2));
    for action in actions {
        if let Action::ScrollToLatest { first_new } = action {
            state.reveal(first_new);
        }
    }

    assert_eq!(state.selected_image().map(|i| i.id.as_str()), Some("c"));
}
