use std::collections::HashMap;

/// Raw `key: value` fields of a single figure block.
///
/// Keys and values are trimmed. When a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureRecord {
    fields: HashMap<String, String>,
}

impl FigureRecord {
    /// Builds a record from the retained lines of one block.
    ///
    /// Each line is split on its first colon. Lines without a colon, or whose
    /// colon is the first character, carry no field and are ignored.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut fields = HashMap::new();
        for line in lines {
            let line = line.as_ref();
            match line.split_once(':') {
                Some((key, value)) if !key.is_empty() => {
                    fields.insert(key.trim().to_owned(), value.trim().to_owned());
                }
                _ => tracing::trace!(line, "ignoring line without a field name"),
            }
        }
        Self { fields }
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
