//! Command history with cursor-based recall.

/// Outcome of moving the history cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Put this entry in the input buffer.
    Entry(&'a str),
    /// Moved past the newest entry; empty the input buffer.
    Cleared,
    /// Nothing to do; leave the input buffer alone.
    Unchanged,
}

/// Accepted command lines, oldest first, plus a recall cursor.
///
/// Recall only moves the cursor; entries are never edited or removed.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted line and reset the cursor.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = None;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step towards older entries, stopping at the oldest.
    pub fn previous(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Entry(&self.entries[index])
    }

    /// Step towards newer entries; past the newest the cursor is released.
    pub fn next(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                Recall::Entry(&self.entries[i + 1])
            }
            Some(_) => {
                self.cursor = None;
                Recall::Cleared
            }
        }
    }
}
