/// Case-insensitive substring query over a record's search fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Fields are OR'd; the empty query matches everything.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.into_iter().any(|field| self.matches(field))
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive() {
        let query = SearchQuery::new("MaTh");
        assert!(query.matches("Math Club"));
        assert!(query.matches("applied mathematics"));
        assert!(!query.matches("Art Club"));
    }

    #[test]
    fn empty_matches_all() {
        let query = SearchQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches_any(["anything"]));
        assert!(query.matches_any(Vec::<&str>::new()));
    }

    #[test]
    fn any_field() {
        let query = SearchQuery::from("cs");
        assert!(query.matches_any(["Alice", "CS-101", "Physics"]));
        assert!(!query.matches_any(["Alice", "PH-101", "Physics"]));
    }
}
