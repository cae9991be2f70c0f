use std::io::{BufRead, Write};

use indexmap::IndexMap;

use crate::error::Result;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Collects free-form entries until the user submits an empty line.
    ///
    /// Prompts `<label> <N>: ` with the counter starting at 1 and advancing
    /// on every submission, the terminating empty one included. Entries are
    /// returned in submission order.
    pub fn collect_list(&mut self, label: &str) -> Result<Vec<String>> {
        self.line(&format!(
            "Add {}s below, or leave blank to end",
            label.to_lowercase()
        ))?;
        let mut entries = Vec::new();
        let mut counter = 1;
        loop {
            let entry = self.prompt_line(&format!("{label} {counter}: "))?;
            counter += 1;
            if entry.is_empty() {
                break;
            }
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Collects key/value pairs until the user submits an empty key.
    ///
    /// Every non-empty key is followed by a `<value_label>: ` prompt whose
    /// response is stored as given, even when empty. Re-entering a key
    /// overwrites its previous value.
    pub fn collect_map(
        &mut self,
        key_label: &str,
        value_label: &str,
    ) -> Result<IndexMap<String, String>> {
        self.line(&format!(
            "Add {}s below, or leave blank to end",
            key_label.to_lowercase()
        ))?;
        let mut entries = IndexMap::new();
        let mut counter = 1;
        loop {
            let key = self.prompt_line(&format!("{key_label} {counter}: "))?;
            counter += 1;
            if key.is_empty() {
                break;
            }
            let value = self.prompt_line(&format!("{value_label}: "))?;
            entries.insert(key, value);
        }
        Ok(entries)
    }
}
