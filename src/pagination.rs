use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::{db::QuestionBank, models::Question, names};

/// Raw query string of `GET /questions`. Numbers stay strings so malformed
/// values can fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    pub unit: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl QuestionsQuery {
    pub fn params(&self) -> PageParams {
        PageParams::clamped(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: names::DEFAULT_PAGE,
            limit: names::DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Missing or unparsable values take the defaults; everything is then
    /// raised to at least 1.
    pub fn clamped(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_leading_int).unwrap_or(names::DEFAULT_PAGE),
            limit.and_then(parse_leading_int).unwrap_or(names::DEFAULT_LIMIT),
        )
    }

    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Parse the leading integer of `s`, ignoring anything after the digits
/// (`"3abc"` is 3). Returns `None` when there are no digits.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // overlong digit runs saturate instead of failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let limit = limit.max(1);
    total / limit + i64::from(total % limit != 0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl QuestionPage {
    pub fn empty(params: PageParams) -> Self {
        Self {
            questions: Vec::new(),
            page: params.page,
            limit: params.limit,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Treat empty strings like missing filters.
pub fn filter_value(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Fetch one page of questions for `(unit, year)`. Without both filters no
/// query is issued and an empty page comes back.
pub async fn fetch_page(
    bank: &dyn QuestionBank,
    unit: Option<&str>,
    year: Option<&str>,
    params: PageParams,
) -> Result<QuestionPage> {
    let (Some(unit), Some(year)) = (filter_value(unit), filter_value(year)) else {
        return Ok(QuestionPage::empty(params));
    };

    let (total, questions) = tokio::try_join!(
        bank.count_questions(unit, year),
        bank.fetch_questions(unit, year, params.limit, params.offset()),
    )?;

    Ok(QuestionPage {
        questions,
        page: params.page,
        limit: params.limit,
        total,
        total_pages: total_pages(total, params.limit),
    })
}
