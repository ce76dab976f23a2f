use roleping::suggestions::{SuggestionDispatch, SuggestionReply};
use roleping::wizard::{RoleEntryForm, RoleList};

#[derive(Default)]
struct RecordingDispatcher {
    dispatched: Vec<(u64, String)>,
}

impl SuggestionDispatch for RecordingDispatcher {
    fn dispatch(&mut self, seq: u64, query: String) {
        self.dispatched.push((seq, query));
    }
}

fn reply(seq: u64, query: &str, suggestions: &[&str]) -> SuggestionReply {
    SuggestionReply {
        seq,
        query: query.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn role_entry_module_debounce_dispatches_only_last_query() {
    let mut form = RoleEntryForm::new(RoleList::new(), 500, 1);
    let mut dispatcher = RecordingDispatcher::default();

    form.set_input("a", 0);
    assert_eq!(form.tick(100, &mut dispatcher), None);
    form.set_input("ab", 200);
    assert_eq!(form.tick(600, &mut dispatcher), None);
    form.set_input("abc", 650);
    assert_eq!(form.tick(1_149, &mut dispatcher), None);
    assert!(dispatcher.dispatched.is_empty());

    assert_eq!(form.tick(1_150, &mut dispatcher), Some(1));
    assert_eq!(dispatcher.dispatched, vec![(1, "abc".to_string())]);
    assert!(form.is_loading());

    // the timer is one-shot
    assert_eq!(form.tick(5_000, &mut dispatcher), None);
    assert_eq!(dispatcher.dispatched.len(), 1);
}

#[test]
fn role_entry_module_default_threshold_skips_short_queries() {
    let mut form = RoleEntryForm::with_defaults(RoleList::new());
    let mut dispatcher = RecordingDispatcher::default();
    form.set_input("a", 0);
    form.set_input("ab", 100);
    form.set_input("abc", 200);
    form.tick(10_000, &mut dispatcher);
    assert_eq!(dispatcher.dispatched, vec![(1, "abc".to_string())]);
}

#[test]
fn role_entry_module_discards_stale_replies() {
    let mut form = RoleEntryForm::with_defaults(RoleList::new());
    let mut dispatcher = RecordingDispatcher::default();

    form.set_input("abc", 0);
    let first = form.tick(500, &mut dispatcher).expect("first dispatch");
    form.set_input("abcd", 600);
    let second = form.tick(1_100, &mut dispatcher).expect("second dispatch");
    assert!(second > first);

    // older request resolves last: never applied
    assert!(form.accept(reply(second, "abcd", &["ABCD Lead"])));
    assert!(!form.accept(reply(first, "abc", &["ABC Lead"])));
    assert_eq!(form.suggestions(), ["ABCD Lead"]);

    // older request resolves first: still never applied
    let mut form = RoleEntryForm::with_defaults(RoleList::new());
    form.set_input("abc", 0);
    let first = form.tick(500, &mut dispatcher).expect("first dispatch");
    form.set_input("abcd", 600);
    form.tick(1_100, &mut dispatcher).expect("second dispatch");
    assert!(!form.accept(reply(first, "abc", &["ABC Lead"])));
    assert!(form.suggestions().is_empty());
    assert!(form.is_loading());
}

#[test]
fn role_entry_module_filters_known_roles_case_insensitively() {
    let roles: RoleList = ["Data Scientist"].into_iter().collect();
    let mut form = RoleEntryForm::with_defaults(roles);
    let mut dispatcher = RecordingDispatcher::default();
    form.set_input("data", 0);
    let seq = form.tick(500, &mut dispatcher).expect("dispatch");
    assert!(form.accept(reply(
        seq,
        "data",
        &["data scientist", "Data Analyst", "ML Engineer"]
    )));
    assert_eq!(form.suggestions(), ["Data Analyst", "ML Engineer"]);
    assert!(!form.is_loading());

    assert!(form.add_suggestion("Data Analyst"));
    assert!(form.suggestions().is_empty());
    assert!(!form.add_suggestion("DATA ANALYST"));
    assert_eq!(form.roles().as_slice(), ["Data Scientist", "Data Analyst"]);
}

#[test]
fn role_entry_module_teardown_cancels_timer_and_ignores_replies() {
    let mut form = RoleEntryForm::with_defaults(RoleList::new());
    let mut dispatcher = RecordingDispatcher::default();

    form.set_input("abc", 0);
    let seq = form.tick(500, &mut dispatcher).expect("dispatch");
    form.set_input("abcde", 600);
    assert!(form.next_deadline().is_some());

    form.teardown();
    assert_eq!(form.next_deadline(), None);
    assert_eq!(form.tick(10_000, &mut dispatcher), None);
    assert_eq!(dispatcher.dispatched.len(), 1);
    assert!(!form.accept(reply(seq, "abc", &["Late"])));
    assert!(form.suggestions().is_empty());

    form.set_input("ignored", 20_000);
    assert_eq!(form.next_deadline(), None);
}
