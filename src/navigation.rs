use crate::compat::{String, ToString, Vec, format, vec};
use crate::error::Result;
use crate::helpers::split_path_and_search;

/// Address bar and history the synchronizer commits to.
///
/// Browser hosts wrap `window.location`/`window.history`; everything else can
/// use [`MemoryHistory`].
pub trait NavigationContext {
    /// Current pathname, e.g. `"/men/shirts"`
    fn pathname(&self) -> &str;

    /// Current search string, including the leading `?` (empty if none)
    fn search(&self) -> &str;

    /// Add a history entry for the current pathname with a new search string
    fn push(&mut self, search: &str) -> Result<()>;

    /// Replace the current entry with `url` (pathname plus optional search)
    /// without adding a history entry
    fn replace_silently(&mut self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    pathname: String,
    search: String,
}

impl Entry {
    fn parse(url: &str) -> Self {
        let (pathname, search) = split_path_and_search(url);
        Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
        }
    }
}

/// In-memory navigation history with a back/forward cursor
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Entry>,
    current_index: usize,
}

impl MemoryHistory {
    /// Start a history at `url`, e.g. `"/men?page=2"`
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![Entry::parse(url)],
            current_index: 0,
        }
    }

    fn current_entry(&self) -> &Entry {
        // The cursor always points at an existing entry
        &self.entries[self.current_index]
    }

    /// Current location as `pathname` + `search`
    pub fn current(&self) -> String {
        let entry = self.current_entry();
        format!("{}{}", entry.pathname, entry.search)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    pub fn go_back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.current_index -= 1;
        Some(self.current())
    }

    pub fn go_forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.current_index += 1;
        Some(self.current())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationContext for MemoryHistory {
    fn pathname(&self) -> &str {
        &self.current_entry().pathname
    }

    fn search(&self) -> &str {
        &self.current_entry().search
    }

    fn push(&mut self, search: &str) -> Result<()> {
        let entry = Entry {
            pathname: self.current_entry().pathname.clone(),
            search: search.to_string(),
        };
        self.entries.truncate(self.current_index + 1);
        self.entries.push(entry);
        self.current_index = self.entries.len() - 1;
        tracing::debug!(search, entries = self.entries.len(), "Pushed history entry");
        Ok(())
    }

    fn replace_silently(&mut self, url: &str) -> Result<()> {
        self.entries[self.current_index] = Entry::parse(url);
        tracing::debug!(url, "Replaced current history entry");
        Ok(())
    }
}
