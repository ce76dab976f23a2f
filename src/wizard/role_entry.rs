use super::state::RoleList;
use crate::suggestions::{SuggestionDispatch, SuggestionReply};

pub const SUGGESTION_DEBOUNCE_MS: u64 = 500;
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingQuery {
    query: String,
    due_at_ms: u64,
}

/// Free-text role entry with debounced suggestion lookups.
///
/// Every dispatched lookup gets the next value of `latest_seq`; a reply is
/// applied only while its sequence is still the latest, so replies to
/// superseded queries are dropped no matter when they arrive.
#[derive(Debug, Clone)]
pub struct RoleEntryForm {
    input: String,
    roles: RoleList,
    suggestions: Vec<String>,
    loading: bool,
    pending: Option<PendingQuery>,
    latest_seq: u64,
    debounce_ms: u64,
    min_query_chars: usize,
    torn_down: bool,
}

impl RoleEntryForm {
    pub fn new(initial_roles: RoleList, debounce_ms: u64, min_query_chars: usize) -> Self {
        Self {
            input: String::new(),
            roles: initial_roles,
            suggestions: Vec::new(),
            loading: false,
            pending: None,
            latest_seq: 0,
            debounce_ms,
            min_query_chars,
            torn_down: false,
        }
    }

    pub fn with_defaults(initial_roles: RoleList) -> Self {
        Self::new(initial_roles, SUGGESTION_DEBOUNCE_MS, MIN_QUERY_CHARS)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn roles(&self) -> &RoleList {
        &self.roles
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.due_at_ms)
    }

    pub fn set_input(&mut self, text: &str, now_ms: u64) {
        if self.torn_down {
            return;
        }
        self.input = text.to_string();
        self.pending = None;
        if self.input.chars().count() >= self.min_query_chars {
            self.pending = Some(PendingQuery {
                query: self.input.clone(),
                due_at_ms: now_ms.saturating_add(self.debounce_ms),
            });
        } else {
            self.invalidate_lookups();
        }
    }

    /// Fires the debounced lookup once its deadline passes. Returns the
    /// sequence number of the dispatched query.
    pub fn tick(&mut self, now_ms: u64, dispatcher: &mut dyn SuggestionDispatch) -> Option<u64> {
        if self.torn_down {
            return None;
        }
        let due = self.pending.as_ref()?.due_at_ms;
        if now_ms < due {
            return None;
        }
        let pending = self.pending.take()?;
        self.latest_seq += 1;
        self.loading = true;
        dispatcher.dispatch(self.latest_seq, pending.query);
        Some(self.latest_seq)
    }

    /// Returns `true` when the reply was applied.
    pub fn accept(&mut self, reply: SuggestionReply) -> bool {
        if self.torn_down || reply.seq != self.latest_seq {
            return false;
        }
        self.suggestions = reply
            .suggestions
            .into_iter()
            .filter(|suggestion| !self.roles.contains_ignore_case(suggestion))
            .collect();
        self.loading = false;
        true
    }

    pub fn add_current(&mut self) -> bool {
        if !self.roles.insert(&self.input) {
            return false;
        }
        self.input.clear();
        self.pending = None;
        self.invalidate_lookups();
        true
    }

    pub fn add_suggestion(&mut self, suggestion: &str) -> bool {
        let added = self.roles.insert(suggestion);
        self.suggestions.clear();
        added
    }

    pub fn remove_role(&mut self, role: &str) -> bool {
        self.roles.remove(role)
    }

    /// Committed role list, offered only when at least one role is present.
    pub fn submit(&self) -> Option<RoleList> {
        if self.roles.is_empty() {
            None
        } else {
            Some(self.roles.clone())
        }
    }

    /// Cancels the debounce timer; nothing fires or applies afterwards.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.loading = false;
        self.torn_down = true;
    }

    fn invalidate_lookups(&mut self) {
        if self.loading {
            self.latest_seq += 1;
        }
        self.loading = false;
        self.suggestions.clear();
    }
}
