//! Case-insensitive search over the text fields of a record.

/// Records that can be matched against a free-form search query.
pub trait Searchable {
    /// Text fields the query is matched against. A record matches when any
    /// of them contains the query.
    fn search_fields(&self) -> Vec<&str>;
}

/// Returns `true` when any searchable field of `record` contains `query`,
/// ignoring case. An empty or whitespace-only query matches every record.
pub fn matches_search<R>(record: &R, query: &str) -> bool
where
    R: Searchable + ?Sized,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        german: &'static str,
        english: &'static str,
    }

    impl Searchable for Entry {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.german, self.english]
        }
    }

    const HOUSE: Entry = Entry {
        german: "das Haus",
        english: "house",
    };

    #[test]
    fn matches_any_field_ignoring_case() {
        assert!(matches_search(&HOUSE, "HAUS"));
        assert!(matches_search(&HOUSE, "Hou"));
        assert!(!matches_search(&HOUSE, "katze"));
    }

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_search(&HOUSE, ""));
        assert!(matches_search(&HOUSE, "   "));
    }

    #[test]
    fn query_is_trimmed() {
        assert!(matches_search(&HOUSE, "  haus  "));
    }
}
