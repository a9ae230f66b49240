//! Query options for list endpoints.
//!
//! The intra API filters, paginates, sorts and ranges list responses through
//! bracketed query parameters:
//!
//! ```text
//! ?filter[pool_year]=2019&page[size]=100&page[number]=3&sort=-created_at
//! ```
//!
//! Values are inserted as given, without percent-encoding.

use std::collections::BTreeMap;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: u32,
    /// 1-based page number. Advanced after every successful GET.
    pub number: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            number: 1,
        }
    }
}

/// Filtering, pagination, sorting and range options for one request handle.
///
/// ## Examples
///
/// ```
/// use intra_client::QueryOptions;
///
/// let options = QueryOptions::default()
///     .filter("pool_year", "2019")
///     .sort("-created_at");
///
/// assert_eq!(
///     options.query_string(),
///     "?filter[pool_year]=2019&page[size]=100&page[number]=1&sort=-created_at"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub filter: BTreeMap<String, String>,
    /// `None` sends no pagination parameters.
    pub page: Option<Page>,
    pub sort: Option<String>,
    pub range: BTreeMap<String, String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            filter: BTreeMap::new(),
            page: Some(Page::default()),
            sort: None,
            range: BTreeMap::new(),
        }
    }
}

impl QueryOptions {
    /// Options that add nothing to the URL.
    pub fn none() -> Self {
        Self {
            page: None,
            ..Self::default()
        }
    }

    /// Adds `filter[key]=value`.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    /// Sets the page size, keeping the current page number.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page.get_or_insert_with(Page::default).size = size;
        self
    }

    /// Sets the page number, keeping the current page size.
    pub fn page_number(mut self, number: u32) -> Self {
        self.page.get_or_insert_with(Page::default).number = number;
        self
    }

    /// Sets `sort=...`; prefix a field with `-` for descending order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Adds `range[key]=min,max`.
    pub fn range(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.range.insert(key.into(), value.into());
        self
    }

    /// Renders the query without the leading `?`.
    ///
    /// Groups come in the order filter, page, range, then `sort`.
    pub fn query(&self) -> String {
        let filter = self.filter.iter().map(|(k, v)| format!("filter[{k}]={v}"));
        let page = self
            .page
            .iter()
            .flat_map(|p| [format!("page[size]={}", p.size), format!("page[number]={}", p.number)]);
        let range = self.range.iter().map(|(k, v)| format!("range[{k}]={v}"));
        let sort = self.sort.iter().map(|s| format!("sort={s}"));

        filter
            .chain(page)
            .chain(range)
            .chain(sort)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders the query with a leading `?`, or an empty string when there is
    /// nothing to send.
    pub fn query_string(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }

    /// Moves to the next page, if paginating.
    pub(crate) fn advance_page(&mut self) {
        if let Some(page) = &mut self.page {
            page.number += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paginates_by_hundred() {
        assert_eq!(
            QueryOptions::default().query_string(),
            "?page[size]=100&page[number]=1"
        );
    }

    #[test]
    fn none_renders_nothing() {
        assert_eq!(QueryOptions::none().query_string(), "");
    }

    #[test]
    fn groups_are_ordered() {
        let options = QueryOptions::default()
            .range("created_at", "2019-01-01,2019-02-01")
            .sort("login")
            .filter("campus_id", "1")
            .filter("cursus_id", "21");

        assert_eq!(
            options.query_string(),
            "?filter[campus_id]=1&filter[cursus_id]=21&page[size]=100&page[number]=1\
             &range[created_at]=2019-01-01,2019-02-01&sort=login"
        );
    }

    #[test]
    fn sort_alone_has_no_leading_ampersand() {
        assert_eq!(QueryOptions::none().sort("-id").query_string(), "?sort=-id");
    }

    #[test]
    fn page_setters_keep_the_other_field() {
        let options = QueryOptions::none().page_number(3).page_size(30);
        assert_eq!(options.page, Some(Page { size: 30, number: 3 }));
    }

    #[test]
    fn advance_page_increments_number() {
        let mut options = QueryOptions::default();
        options.advance_page();
        options.advance_page();
        assert_eq!(options.page.map(|p| p.number), Some(3));

        let mut unpaged = QueryOptions::none();
        unpaged.advance_page();
        assert_eq!(unpaged.page, None);
    }
}
