//! Browse controls: which unit, year and page the user is looking at.
//!
//! Every page transition produces a new state with a higher `seq`. Filter
//! changes come in through the form, which always carries the next `seq` and
//! never a page, so they start over at page 1.

use serde::Deserialize;

use crate::pagination::{filter_value, PageParams};

/// Query string of the browse routes.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub unit: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub seq: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    unit: Option<String>,
    year: Option<String>,
    page: i64,
    seq: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            unit: None,
            year: None,
            page: 1,
            seq: 0,
        }
    }
}

/// An immutable snapshot of the query a state asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub seq: u64,
    pub unit: String,
    pub year: String,
    pub params: PageParams,
}

impl FilterState {
    pub fn from_query(query: &BrowseQuery) -> Self {
        let params = PageParams::clamped(query.page.as_deref(), None);
        Self {
            unit: filter_value(query.unit.as_deref()).map(str::to_string),
            year: filter_value(query.year.as_deref()).map(str::to_string),
            page: params.page,
            seq: query
                .seq
                .as_deref()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_ready(&self) -> bool {
        self.unit.is_some() && self.year.is_some()
    }

    /// `None` on the last page.
    pub fn next_page(&self, total_pages: i64) -> Option<Self> {
        (self.page < total_pages).then(|| self.with_page(self.page + 1))
    }

    /// `None` on the first page.
    pub fn previous_page(&self) -> Option<Self> {
        (self.page > 1).then(|| self.with_page(self.page - 1))
    }

    fn with_page(&self, page: i64) -> Self {
        Self {
            unit: self.unit.clone(),
            year: self.year.clone(),
            page,
            seq: self.seq.saturating_add(1),
        }
    }

    /// The query to issue, if both filters are set.
    pub fn request(&self, limit: i64) -> Option<QuestionRequest> {
        let (Some(unit), Some(year)) = (&self.unit, &self.year) else {
            return None;
        };
        Some(QuestionRequest {
            seq: self.seq,
            unit: unit.clone(),
            year: year.clone(),
            params: PageParams::new(self.page, limit),
        })
    }

    pub fn query_string(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(unit) = &self.unit {
            parts.push(format!("unit={}", urlencoding::encode(unit)));
        }
        if let Some(year) = &self.year {
            parts.push(format!("year={}", urlencoding::encode(year)));
        }
        parts.push(format!("page={}", self.page));
        parts.push(format!("seq={}", self.seq));
        parts.join("&")
    }
}
