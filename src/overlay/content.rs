//! Payload models for the built-in overlay kinds.

/// Find-in-page bar state: the query, how many times it occurs in the page,
/// and which occurrence is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindInPageState {
    pub query: String,
    /// Page text the query is matched against.
    page_text: String,
    total_matches: usize,
    /// 0-based index of the selected match; meaningless when there are none.
    current_match: usize,
}

impl FindInPageState {
    pub fn new(page_text: impl Into<String>) -> Self {
        Self {
            page_text: page_text.into(),
            ..Self::default()
        }
    }

    /// Replace the query and recount. Selection goes back to the first match.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.recount();
    }

    /// Recount after `query` was edited in place (e.g. by a text field).
    pub fn recount(&mut self) {
        self.total_matches = count_matches(&self.page_text, &self.query);
        self.current_match = 0;
    }

    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// 1-based index for display, 0 when nothing matches.
    pub fn current_match(&self) -> usize {
        if self.total_matches == 0 {
            0
        } else {
            self.current_match + 1
        }
    }

    pub fn next(&mut self) {
        if self.total_matches > 0 {
            self.current_match = (self.current_match + 1) % self.total_matches;
        }
    }

    pub fn previous(&mut self) {
        if self.total_matches > 0 {
            self.current_match = (self.current_match + self.total_matches - 1) % self.total_matches;
        }
    }

    /// "3/7" style status label.
    pub fn status(&self) -> String {
        format!("{}/{}", self.current_match(), self.total_matches)
    }
}

/// Count non-overlapping, case-insensitive occurrences of `query` in `text`.
pub fn count_matches(text: &str, query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    text.to_lowercase()
        .matches(query.to_lowercase().as_str())
        .count()
}

/// Truncate `s` to at most `max_chars` characters, appending `"..."` if cut.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// A notification banner slid in from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRow {
    pub title: String,
    pub body: String,
    /// Opened when the banner is tapped.
    pub url: Option<String>,
}

impl NotificationRow {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Snapshot of the tab's navigation history shown above the toolbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackForwardList {
    pub entries: Vec<String>,
    /// Index of the page currently displayed.
    pub current: usize,
}

impl BackForwardList {
    pub fn new(entries: Vec<String>, current: usize) -> Self {
        let current = current.min(entries.len().saturating_sub(1));
        Self { entries, current }
    }

    /// Entries before the current page, most recent first.
    pub fn back_entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries[..self.current.min(self.entries.len())]
            .iter()
            .enumerate()
            .rev()
            .map(|(i, s)| (i, s.as_str()))
    }

    /// Entries after the current page, nearest first.
    pub fn forward_entries(&self) -> impl Iterator<Item = (usize, &str)> {
        let start = (self.current + 1).min(self.entries.len());
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(i, s)| (start + i, s.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_case_insensitive() {
        assert_eq!(count_matches("Rust rust RUST", "rust"), 3);
        assert_eq!(count_matches("aaaa", "aa"), 2);
        assert_eq!(count_matches("anything", ""), 0);
    }

    #[test]
    fn test_find_wraps_around() {
        let mut find = FindInPageState::new("one fish two fish red fish");
        find.search("fish");
        assert_eq!(find.total_matches(), 3);
        assert_eq!(find.current_match(), 1);
        find.next();
        find.next();
        assert_eq!(find.current_match(), 3);
        find.next();
        assert_eq!(find.current_match(), 1);
        find.previous();
        assert_eq!(find.status(), "3/3");
    }

    #[test]
    fn test_find_no_matches() {
        let mut find = FindInPageState::new("hello");
        find.search("xyz");
        find.next();
        find.previous();
        assert_eq!(find.current_match(), 0);
        assert_eq!(find.status(), "0/0");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("https://example.com/long/path", 12), "https://e...");
        assert_eq!(truncate_str("日本語のテキスト", 5), "日本...");
    }

    #[test]
    fn test_back_forward_split() {
        let list = BackForwardList::new(
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            2,
        );
        let back: Vec<_> = list.back_entries().collect();
        assert_eq!(back, vec![(1, "b"), (0, "a")]);
        let fwd: Vec<_> = list.forward_entries().collect();
        assert_eq!(fwd, vec![(3, "d")]);
    }

    #[test]
    fn test_back_forward_clamps_index() {
        let list = BackForwardList::new(vec!["a".into()], 5);
        assert_eq!(list.current, 0);
        assert_eq!(list.back_entries().count(), 0);
        assert_eq!(list.forward_entries().count(), 0);
    }
}
