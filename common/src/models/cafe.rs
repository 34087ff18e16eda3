//! Cafe query models.

use utoipa::IntoParams;

/// Query string of `GET /cafe`.
///
/// Every field is kept as raw text: `count` is validated by the service so
/// that a malformed value maps to `incorrect count` rather than a generic
/// decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CafeQuery {
    /// City name, a case-sensitive catalog key.
    pub city: Option<String>,

    /// Maximum number of cafés to return. Absent means no limit.
    #[param(value_type = Option<u32>)]
    pub count: Option<String>,

    /// Case-insensitive substring filter on café names.
    pub search: Option<String>,
}

impl CafeQuery {
    /// Builds a query from decoded `key=value` pairs.
    ///
    /// The first occurrence of a key wins; later repeats and unknown keys
    /// are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_reads_known_keys() {
        let query = CafeQuery::from_pairs([("city", "tula"), ("count", "2"), ("search", "дом")]);
        assert_eq!(query.city.as_deref(), Some("tula"));
        assert_eq!(query.count.as_deref(), Some("2"));
        assert_eq!(query.search.as_deref(), Some("дом"));
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let query = CafeQuery::from_pairs([
            ("city", "tula"),
            ("count", "1"),
            ("city", "moscow"),
            ("count", "2"),
        ]);
        assert_eq!(query.city.as_deref(), Some("tula"));
        assert_eq!(query.count.as_deref(), Some("1"));
        assert!(query.search.is_none());
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let query = CafeQuery::from_pairs([("town", "tula"), ("limit", "3")]);
        assert_eq!(query, CafeQuery::default());
    }

    #[test]
    fn test_empty_value_is_present() {
        let query = CafeQuery::from_pairs([("city", ""), ("city", "tula")]);
        assert_eq!(query.city.as_deref(), Some(""));
    }
}
