use serde::{Deserialize, Serialize};

/// Ordered multi-selection of position codes with an optional primary.
///
/// `selected` keeps insertion order and never holds duplicates. `primary`,
/// when set, is always a member of `selected`: the transitions preserve
/// that by construction and [`Selection::parse`] re-establishes it for
/// arbitrary external input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: Vec<String>,
    primary: Option<String>,
}

/// Placeholder shown in the summary displays when there is nothing to show.
pub const EMPTY_PLACEHOLDER: &str = "None";

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized comma-separated value (e.g. a bound form field's
    /// contents). Tokens are trimmed, empty tokens dropped, and duplicates
    /// collapsed keeping the first occurrence. A non-empty result makes its
    /// first element the primary.
    pub fn parse(value: &str) -> Self {
        let mut selected: Vec<String> = Vec::new();
        for token in value.split(',') {
            let token = token.trim();
            if token.is_empty() || selected.iter().any(|s| s == token) {
                continue;
            }
            selected.push(token.to_string());
        }
        let primary = selected.first().cloned();
        Self { selected, primary }
    }

    /// Primary-click transition.
    ///
    /// Unselected codes are appended (and promoted if nothing is primary
    /// yet). An already-primary code is demoted but stays selected; any
    /// other selected code is promoted without changing membership order.
    pub fn toggle(&mut self, code: &str) {
        if !self.is_selected(code) {
            self.selected.push(code.to_string());
            if self.primary.is_none() {
                self.primary = Some(code.to_string());
            }
        } else if self.is_primary(code) {
            self.primary = None;
        } else {
            self.primary = Some(code.to_string());
        }
    }

    /// Secondary-click (context menu) transition: deselect the code.
    ///
    /// If it was primary, the first remaining selection is promoted, or
    /// primary clears when nothing is left.
    pub fn remove(&mut self, code: &str) {
        self.selected.retain(|s| s != code);
        if self.primary.as_deref() == Some(code) {
            self.primary = self.selected.first().cloned();
        }
    }

    /// Output order: primary first (when present), then the remaining
    /// selections in insertion order.
    pub fn ordered(&self) -> Vec<&str> {
        match &self.primary {
            Some(primary) => {
                let mut out = vec![primary.as_str()];
                out.extend(
                    self.selected
                        .iter()
                        .filter(|s| *s != primary)
                        .map(String::as_str),
                );
                out
            }
            None => self.selected.iter().map(String::as_str).collect(),
        }
    }

    /// The comma-joined form-field value.
    pub fn serialized(&self) -> String {
        self.ordered().join(",")
    }

    /// Human-readable list of selections in insertion order.
    pub fn selected_summary(&self) -> String {
        if self.selected.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            self.selected.join(", ")
        }
    }

    /// Human-readable primary code.
    pub fn primary_summary(&self) -> String {
        self.primary
            .clone()
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.iter().any(|s| s == code)
    }

    pub fn is_primary(&self, code: &str) -> bool {
        self.primary.as_deref() == Some(code)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}
