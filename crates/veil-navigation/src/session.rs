//! Back/forward list mirrored from page-load notifications
//!
//! Some web view hosts only report "page committed at URL" and offer no
//! `canGoBack`/`canGoForward` query. `SessionHistory` rebuilds that answer
//! from the commits it sees and the traversals it was asked to perform.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
}

#[derive(Debug, Default, Clone)]
pub struct SessionHistory {
    entries: Vec<String>,
    /// Index of the current entry; meaningless while `entries` is empty
    index: usize,
    pending: Option<Traversal>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Mark a back traversal as requested. Returns false if there is nothing to go back to.
    pub fn begin_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.pending = Some(Traversal::Back);
        true
    }

    /// Mark a forward traversal as requested. Returns false if there is nothing ahead.
    pub fn begin_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.pending = Some(Traversal::Forward);
        true
    }

    /// Record that the view started loading `url`. Returns true when the current URL changed.
    ///
    /// A pending traversal only applies if `url` is the entry it was heading
    /// for; otherwise it is abandoned and `url` is treated as a new page.
    pub fn commit(&mut self, url: &str) -> bool {
        if let Some(traversal) = self.pending.take() {
            let target = match traversal {
                Traversal::Back => self.index.checked_sub(1),
                Traversal::Forward => Some(self.index + 1),
            };
            match target {
                Some(target) if self.entries.get(target).map(String::as_str) == Some(url) => {
                    self.index = target;
                    return true;
                }
                _ => {
                    tracing::debug!(url = %url, traversal = ?traversal, "Pending traversal abandoned");
                }
            }
        }

        if self.current() == Some(url) {
            return false;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        true
    }

    /// Record the URL the current page finished at, which differs from the
    /// one it started at after a redirect. Returns true when the current URL changed.
    pub fn finish(&mut self, url: &str) -> bool {
        match self.entries.get_mut(self.index) {
            Some(entry) if entry.as_str() == url => false,
            Some(entry) => {
                *entry = url.to_string();
                true
            }
            None => {
                self.entries.push(url.to_string());
                self.index = 0;
                true
            }
        }
    }
}
