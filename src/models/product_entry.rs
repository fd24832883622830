use serde::Serialize;

/// One labelled line on a card, e.g. `IP` / `10.0.0.12`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProductEntry {
    pub term: String,
    pub value: String,
}

impl ProductEntry {
    pub fn new(term: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            value: value.into(),
        }
    }
}
