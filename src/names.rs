use crate::filter::FilterState;

pub const HOME_URL: &str = "/";
pub const BROWSE_URL: &str = "/browse";
pub const METADATA_URL: &str = "/metadata";
pub const QUESTIONS_URL: &str = "/questions";

pub const RESULTS_TARGET: &str = "#results";
pub const SEQ_INPUT_ID: &str = "seq";
// one queue for the form and the pager, a newer request aborts the older one
pub const BROWSE_SYNC: &str = "#browse:replace";

pub fn browse_url(state: &FilterState) -> String {
    format!("{BROWSE_URL}?{}", state.query_string())
}

pub fn select_option_url(question_id: &str, option: usize) -> String {
    format!(
        "/question/{}/select?option={option}",
        urlencoding::encode(question_id)
    )
}

pub fn options_element_id(question_id: &str) -> String {
    // hex keeps distinct ids distinct and valid as a CSS selector
    let hex: String = question_id.bytes().map(|b| format!("{b:02x}")).collect();
    format!("options-{hex}")
}

// Pagination defaults
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 25;

// API error messages
pub const METADATA_ERROR: &str = "Failed to fetch metadata";
pub const QUESTIONS_ERROR: &str = "Failed to fetch questions";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
