//! Page envelope shared by paginated JSON resources.
//!
//! Paginated endpoints wrap their records in the same envelope:
//!
//! ```json
//! { "page": 1, "per_page": 6, "total": 12, "total_pages": 2, "data": [] }
//! ```
//!
//! [`Paged`] models that envelope once so each resource only declares its
//! record type.

use serde::{Deserialize, Serialize};

/// One page of records plus the paging counters reported by the server.
///
/// # Examples
///
/// ```
/// use pagination::Paged;
///
/// let page: Paged<u32> = serde_json::from_str(
///     r#"{"page":1,"per_page":2,"total":3,"total_pages":2,"data":[7,8]}"#,
/// )
/// .expect("valid envelope");
/// assert_eq!(page.len(), 2);
/// assert!(!page.is_last_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// One-based index of this page.
    pub page: u32,
    /// Page size requested by the server.
    pub per_page: u32,
    /// Total number of records across all pages.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Records on this page, in server order.
    pub data: Vec<T>,
}

impl<T> Paged<T> {
    /// Number of records carried by this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether this page carries no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return whether no page follows this one.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Iterate over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a Paged<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    //! Envelope decoding and paging counters.

    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Colour {
        id: i64,
        name: String,
    }

    fn colours_fixture() -> Value {
        json!({
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [
                { "id": 7, "name": "sand dollar" },
                { "id": 8, "name": "chili pepper" }
            ]
        })
    }

    #[test]
    fn decodes_envelope_and_records_in_order() {
        let page: Paged<Colour> =
            serde_json::from_value(colours_fixture()).expect("fixture should decode");

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 12);
        let names: Vec<_> = page.iter().map(|colour| colour.name.as_str()).collect();
        assert_eq!(names, ["sand dollar", "chili pepper"]);
    }

    #[test]
    fn re_encoding_preserves_every_field() {
        let page: Paged<Colour> =
            serde_json::from_value(colours_fixture()).expect("fixture should decode");
        let encoded = serde_json::to_value(&page).expect("page should encode");

        assert_eq!(encoded, colours_fixture());
    }

    #[test]
    fn rejects_envelope_without_data() {
        let body = json!({ "page": 1, "per_page": 6, "total": 0, "total_pages": 0 });
        let result = serde_json::from_value::<Paged<Colour>>(body);

        assert!(result.is_err(), "data is required");
    }

    #[rstest]
    #[case::first_of_two(1, 2, false)]
    #[case::last_of_two(2, 2, true)]
    #[case::empty_collection(1, 0, true)]
    fn reports_last_page(#[case] page: u32, #[case] total_pages: u32, #[case] expected: bool) {
        let paged = Paged::<Colour> {
            page,
            per_page: 6,
            total: 0,
            total_pages,
            data: Vec::new(),
        };

        assert_eq!(paged.is_last_page(), expected);
        assert!(paged.is_empty());
    }
}
