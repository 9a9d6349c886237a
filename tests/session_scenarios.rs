//! End-to-end behavior of the search session controller.

use photoseek::{FetchOutcome, FetchRequest, Image, SearchPage, SearchSession, SessionPhase};

fn images(ids: &[&str]) -> Vec<Image> {
    ids.iter().map(|id| Image::new(*id, format!("photo {id}"))).collect()
}

fn page(ids: &[&str], total: u64, total_pages: u32) -> SearchPage {
    SearchPage {
        results: images(ids),
        total,
        total_pages,
    }
}

fn ids(session: &SearchSession) -> Vec<&str> {
    session.images().iter().map(|i| i.id.as_str()).collect()
}

fn start(session: &mut SearchSession, query: &str) -> FetchRequest {
    session.set_query(query).expect("non-empty query dispatches a fetch")
}

#[test]
fn single_page_search_exhausts_pagination() {
    let mut session = SearchSession::new();
    let request = start(&mut session, "cats");
    assert_eq!((request.query.as_str(), request.page), ("cats", 1));

    let outcome = session.apply_page(request.ticket, page(&["img1", "img2"], 2, 1));

    assert_eq!(outcome, FetchOutcome::Appended { page: 1, first_new: 0, count: 2 });
    assert_eq!(ids(&session), ["img1", "img2"]);
    assert!(!session.has_more());
    assert!(!session.is_loading());
    assert!(!session.show_load_more());
}

#[test]
fn load_more_appends_second_page() {
    let mut session = SearchSession::new();
    let first = start(&mut session, "dogs");
    session.apply_page(first.ticket, page(&["a", "b"], 6, 3));
    assert!(session.show_load_more());

    let second = session.request_next_page().expect("more pages remain");
    assert_eq!((second.query.as_str(), second.page), ("dogs", 2));
    assert!(session.is_loading());
    assert!(!session.show_load_more());

    let outcome = session.apply_page(second.ticket, page(&["c", "d"], 6, 3));

    assert_eq!(outcome, FetchOutcome::Appended { page: 2, first_new: 2, count: 2 });
    assert_eq!(ids(&session), ["a", "b", "c", "d"]);
    assert!(session.has_more());
    assert_eq!(session.page(), 2);
}

#[test]
fn zero_total_reports_no_results() {
    let mut session = SearchSession::new();
    let request = start(&mut session, "zzzz123");

    let outcome = session.apply_page(request.ticket, page(&[], 0, 0));

    assert_eq!(outcome, FetchOutcome::NoResults);
    assert!(session.images().is_empty());
    assert!(!session.has_more());
    assert!(!session.has_error());
    assert!(!session.is_loading());
}

#[test]
fn failure_keeps_results_and_clears_loading() {
    let mut session = SearchSession::new();
    let first = start(&mut session, "birds");
    session.apply_page(first.ticket, page(&["a", "b"], 24, 2));
    let second = session.request_next_page().unwrap();

    assert_eq!(session.apply_failure(second.ticket), FetchOutcome::Failed);

    assert!(session.has_error());
    assert!(!session.is_loading());
    assert_eq!(ids(&session), ["a", "b"]);
}

#[test]
fn empty_query_goes_idle_without_fetching() {
    let mut session = SearchSession::new();
    let request = start(&mut session, "owls");
    session.apply_page(request.ticket, page(&["a"], 24, 2));

    assert!(session.set_query("").is_none());

    assert_eq!(session.phase(), &SessionPhase::Idle);
    assert!(!session.has_more());
    assert!(!session.is_loading());
    assert!(session.images().is_empty());
    assert_eq!(session.page(), 1);
}

#[test]
fn new_query_resets_results_before_fetching() {
    let mut session = SearchSession::new();
    let first = start(&mut session, "red");
    session.apply_page(first.ticket, page(&["a", "b"], 36, 3));
    let second = session.request_next_page().unwrap();
    session.apply_page(second.ticket, page(&["c"], 36, 3));

    let request = start(&mut session, "blue");

    assert_eq!(request.page, 1);
    assert_eq!(session.page(), 1);
    assert!(session.images().is_empty());
    assert!(!session.has_more());
}

#[test]
fn response_for_superseded_query_is_discarded() {
    let mut session = SearchSession::new();
    let stale = start(&mut session, "old");
    let current = start(&mut session, "new");

    assert_eq!(session.apply_page(stale.ticket, page(&["x"], 1, 1)), FetchOutcome::Stale);
    assert!(session.images().is_empty());
    assert!(session.is_loading());
    assert_eq!(session.outstanding(), Some(current.ticket));

    session.apply_page(current.ticket, page(&["y"], 1, 1));
    assert_eq!(ids(&session), ["y"]);
}

#[test]
fn duplicate_delivery_appends_once() {
    let mut session = SearchSession::new();
    let request = start(&mut session, "tree");
    session.apply_page(request.ticket, page(&["a"], 24, 2));

    assert_eq!(session.apply_page(request.ticket, page(&["a"], 24, 2)), FetchOutcome::Stale);
    assert_eq!(ids(&session), ["a"]);
}

#[test]
fn next_page_while_fetching_dispatches_nothing() {
    let mut session = SearchSession::new();
    let request = start(&mut session, "sea");
    assert!(session.request_next_page().is_none());

    session.apply_page(request.ticket, page(&["a"], 24, 2));
    let second = session.request_next_page().unwrap();
    assert!(session.request_next_page().is_none());

    session.apply_page(second.ticket, page(&["b"], 24, 2));
    assert_eq!(ids(&session), ["a", "b"]);
    assert!(!session.has_more());
}

#[test]
fn duplicates_across_pages_are_kept() {
    let mut session = SearchSession::new();
    let first = start(&mut session, "sky");
    session.apply_page(first.ticket, page(&["a", "b"], 4, 2));
    let second = session.request_next_page().unwrap();
    session.apply_page(second.ticket, page(&["b", "c"], 4, 2));

    assert_eq!(ids(&session), ["a", "b", "b", "c"]);
}

#[test]
fn new_query_after_failure_clears_error() {
    let mut session = SearchSession::new();
    let failed = start(&mut session, "storm");
    session.apply_failure(failed.ticket);
    assert!(session.has_error());

    let request = start(&mut session, "calm");

    assert!(!session.has_error());
    assert!(session.is_loading());
    assert_eq!(session.outstanding(), Some(request.ticket));
}

#[test]
fn exhausted_pagination_returns_only_with_new_query() {
    let mut session = SearchSession::new();
    let first = start(&mut session, "moss");
    session.apply_page(first.ticket, page(&["a"], 1, 1));
    assert!(!session.has_more());

    assert!(session.request_next_page().is_none());
    assert!(!session.is_loading());
    assert_eq!(session.page(), 1);

    let request = start(&mut session, "fern");
    session.apply_page(request.ticket, page(&["b", "c"], 24, 2));

    assert!(session.has_more());
    assert!(session.show_load_more());
    assert_eq!(session.request_next_page().map(|r| r.page), Some(2));
}
