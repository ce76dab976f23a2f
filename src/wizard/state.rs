use std::fmt;

pub const HANDLE_MARKER: char = '@';
pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

pub const PREDEFINED_ROLES: [&str; 9] = [
    "ML intern",
    "AI intern",
    "Clinical data analyst",
    "clinical programmer",
    "statistical programmer",
    "computational biology intern",
    "computational biologist",
    "genomic data analyst",
    "transcriptomic data analyst",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Handle,
    Interval,
    Confirm,
    Activating,
    Done,
}

pub const ALL_WIZARD_STEPS: [WizardStep; 5] = [
    WizardStep::Handle,
    WizardStep::Interval,
    WizardStep::Confirm,
    WizardStep::Activating,
    WizardStep::Done,
];

impl WizardStep {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Handle => "handle",
            WizardStep::Interval => "interval",
            WizardStep::Confirm => "confirm",
            WizardStep::Activating => "activating",
            WizardStep::Done => "done",
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            WizardStep::Handle => 0,
            WizardStep::Interval => 1,
            WizardStep::Confirm => 2,
            WizardStep::Activating => 3,
            WizardStep::Done => 4,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery handle that always carries the leading marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Returns `None` when nothing but whitespace or the marker was supplied.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix(HANDLE_MARKER).unwrap_or(trimmed);
        if body.trim().is_empty() {
            return None;
        }
        if trimmed.starts_with(HANDLE_MARKER) {
            Some(Self(trimmed.to_string()))
        } else {
            Some(Self(format!("{HANDLE_MARKER}{trimmed}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalOption {
    pub label: &'static str,
    pub minutes: u32,
}

pub const INTERVAL_OPTIONS: [IntervalOption; 6] = [
    IntervalOption {
        label: "30 Mins",
        minutes: 30,
    },
    IntervalOption {
        label: "1 Hour",
        minutes: 60,
    },
    IntervalOption {
        label: "2 Hours",
        minutes: 120,
    },
    IntervalOption {
        label: "4 Hours",
        minutes: 240,
    },
    IntervalOption {
        label: "8 Hours",
        minutes: 480,
    },
    IntervalOption {
        label: "Daily",
        minutes: 1440,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalMinutes(u32);

impl IntervalMinutes {
    /// Accepts only values offered by the selector.
    pub fn from_option(minutes: u32) -> Option<Self> {
        INTERVAL_OPTIONS
            .iter()
            .any(|option| option.minutes == minutes)
            .then_some(Self(minutes))
    }

    /// Escape hatch for programmatic initialization with a free value.
    pub fn custom(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn option_index(self) -> Option<usize> {
        INTERVAL_OPTIONS
            .iter()
            .position(|option| option.minutes == self.0)
    }
}

impl Default for IntervalMinutes {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MINUTES)
    }
}

impl fmt::Display for IntervalMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_interval(self.0))
    }
}

pub fn format_interval(minutes: u32) -> String {
    if minutes == 1440 {
        return "Every Day".to_string();
    }
    if minutes >= 60 {
        let hours = f64::from(minutes) / 60.0;
        let unit = if minutes == 60 { "Hour" } else { "Hours" };
        return format!("Every {hours} {unit}");
    }
    format!("Every {minutes} Minutes")
}

/// Insertion-ordered role titles, unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleList {
    roles: Vec<String>,
}

impl RoleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predefined() -> Self {
        Self::from_iter(PREDEFINED_ROLES)
    }

    pub fn contains_ignore_case(&self, role: &str) -> bool {
        let needle = role.trim().to_lowercase();
        self.roles.iter().any(|r| r.to_lowercase() == needle)
    }

    /// Returns `true` when the trimmed role was appended.
    pub fn insert(&mut self, role: &str) -> bool {
        let trimmed = role.trim();
        if trimmed.is_empty() || self.contains_ignore_case(trimmed) {
            return false;
        }
        self.roles.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, role: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r != role);
        before != self.roles.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.roles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RoleList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = RoleList::new();
        for role in iter {
            list.insert(role.as_ref());
        }
        list
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub handle: Option<Handle>,
    pub interval: IntervalMinutes,
    pub roles: RoleList,
}

impl WizardState {
    pub fn initial(roles: RoleList) -> Self {
        Self {
            step: WizardStep::Handle,
            handle: None,
            interval: IntervalMinutes::default(),
            roles,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial(RoleList::predefined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_marker_and_is_idempotent() {
        for raw in ["alice", "@alice", "  bob_99 ", "@x"] {
            let once = Handle::normalize(raw).expect("non-empty handle");
            assert!(once.as_str().starts_with(HANDLE_MARKER));
            let twice = Handle::normalize(once.as_str()).expect("still non-empty");
            assert_eq!(once, twice);
        }
        assert_eq!(Handle::normalize("alice").unwrap().as_str(), "@alice");
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert_eq!(Handle::normalize(""), None);
        assert_eq!(Handle::normalize("   "), None);
        assert_eq!(Handle::normalize("@"), None);
        assert_eq!(Handle::normalize(" @  "), None);
    }

    #[test]
    fn format_interval_matches_selector_labels() {
        assert_eq!(format_interval(30), "Every 30 Minutes");
        assert_eq!(format_interval(60), "Every 1 Hour");
        assert_eq!(format_interval(120), "Every 2 Hours");
        assert_eq!(format_interval(480), "Every 8 Hours");
        assert_eq!(format_interval(90), "Every 1.5 Hours");
        assert_eq!(format_interval(1440), "Every Day");
    }

    #[test]
    fn interval_from_option_only_accepts_enumerated_values() {
        assert_eq!(IntervalMinutes::from_option(240).map(|i| i.minutes()), Some(240));
        assert_eq!(IntervalMinutes::from_option(45), None);
        assert_eq!(IntervalMinutes::custom(45).option_index(), None);
        assert_eq!(IntervalMinutes::default().option_index(), Some(1));
    }

    #[test]
    fn role_list_ignores_case_insensitive_duplicates() {
        let mut roles = RoleList::predefined();
        let before = roles.clone();
        assert!(!roles.insert("ml INTERN"));
        assert!(!roles.insert("  Clinical Programmer "));
        assert!(!roles.insert("   "));
        assert_eq!(roles, before);

        assert!(roles.insert("Bioinformatics engineer"));
        assert_eq!(
            roles.as_slice().last().map(String::as_str),
            Some("Bioinformatics engineer")
        );
    }

    #[test]
    fn role_list_from_iter_dedupes_in_insertion_order() {
        let roles: RoleList = ["Data Scientist", "data scientist", "Analyst"]
            .into_iter()
            .collect();
        assert_eq!(roles.as_slice(), ["Data Scientist", "Analyst"]);
    }
}
