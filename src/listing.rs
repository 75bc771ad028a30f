//! Resolution of the list endpoint's query string into an effective page
//! request. Every parameter is optional and out-of-range values fall back to
//! defaults instead of failing the request.

use sea_orm::Order;
use serde::Deserialize;

use crate::entities::movie;

pub const DEFAULT_PER_PAGE: u64 = 5;
pub const MAX_PER_PAGE: u64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub order: Option<String>,
    pub sort: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortColumn {
    Id,
    Price,
    Duration,
}

impl SortColumn {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price") => SortColumn::Price,
            Some("duration") => SortColumn::Duration,
            _ => SortColumn::Id,
        }
    }

    pub fn as_column(self) -> movie::Column {
        match self {
            SortColumn::Id => movie::Column::Id,
            SortColumn::Price => movie::Column::Price,
            SortColumn::Duration => movie::Column::Duration,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListParams {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub order: SortOrder,
    pub sort: SortColumn,
}

impl ListParams {
    pub fn from_query(q: &ListQuery) -> Self {
        let page = q
            .page
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        let limit = q
            .per_page
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| (1..=MAX_PER_PAGE).contains(n))
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            page,
            limit,
            order: SortOrder::parse(q.order.as_deref()),
            sort: SortColumn::parse(q.sort.as_deref()),
        }
    }

    /// Row offset of the page, or `None` when it lies beyond anything the
    /// store can address. Such a page is always empty.
    pub fn offset(&self) -> Option<u64> {
        offset_of(self.page, self.limit)
    }

    /// Whether at least one row exists after the current page.
    pub fn has_next(&self, total: u64) -> bool {
        self.offset().and_then(|o| o.checked_add(self.limit)).is_some_and(|end| total > end)
    }

    /// Whether the previous page holds any row. Page 1 never has one.
    pub fn has_previous(&self, total: u64) -> bool {
        self.page > 1 && offset_of(self.page - 1, self.limit).is_some_and(|o| total > o)
    }

    pub fn link(&self, base_url: &str, page: u64) -> String {
        format!("{base_url}/movies?page={page}&per_page={}", self.limit)
    }
}

fn offset_of(page: u64, limit: u64) -> Option<u64> {
    (page - 1).checked_mul(limit).filter(|o| i64::try_from(*o).is_ok())
}
