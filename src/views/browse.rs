use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    filter::FilterState,
    models::Metadata,
    names,
    pagination::QuestionPage,
    selection::Selections,
    views::{components, question},
};

pub fn browse_page(
    metadata: &Metadata,
    state: &FilterState,
    page: &QuestionPage,
    locale: &str,
) -> Markup {
    html! {
        div id="browse" {
            (filter_form(metadata, state, locale))
            (results(state, page, locale))
        }
    }
}

/// What an htmx browse request swaps in: the results plus the form's next
/// `seq`, replaced out of band.
pub fn results_fragment(state: &FilterState, page: &QuestionPage, locale: &str) -> Markup {
    html! {
        (results(state, page, locale))
        (seq_input(state, true))
    }
}

fn seq_input(state: &FilterState, out_of_band: bool) -> Markup {
    html! {
        input type="hidden"
              id=(names::SEQ_INPUT_ID)
              name="seq"
              value=(state.seq().saturating_add(1))
              hx-swap-oob=[out_of_band.then_some("true")];
    }
}

/// Changing either select re-queries from page 1. The form and the pager
/// share one `hx-sync` queue, so a request still in flight is aborted when a
/// newer one starts.
fn filter_form(metadata: &Metadata, state: &FilterState, locale: &str) -> Markup {
    html! {
        form.controls
            hx-get=(names::BROWSE_URL)
            hx-target=(names::RESULTS_TARGET)
            hx-swap="outerHTML"
            hx-trigger="change"
            hx-push-url="true"
            hx-sync=(names::BROWSE_SYNC) {
            (seq_input(state, false))
            div.control-group {
                label for="unit" { (t!("browse.unit", locale = locale)) }
                select id="unit" name="unit" {
                    option value="" { (t!("browse.select_unit", locale = locale)) }
                    @for unit in &metadata.units {
                        option value=(unit) selected[state.unit() == Some(unit.as_str())] { (unit) }
                    }
                }
            }
            div.control-group {
                label for="year" { (t!("browse.year", locale = locale)) }
                select id="year" name="year" {
                    option value="" { (t!("browse.select_year", locale = locale)) }
                    @for year in &metadata.years {
                        option value=(year) selected[state.year() == Some(year.as_str())] { (year) }
                    }
                }
            }
        }
    }
}

/// The results region. Without both filters it only asks for a selection.
pub fn results(state: &FilterState, page: &QuestionPage, locale: &str) -> Markup {
    let selections = Selections::default();
    html! {
        section id="results" data-seq=(state.seq()) {
            @if !state.is_ready() {
                p.status-msg { (t!("browse.select_prompt", locale = locale)) }
            } @else {
                div.table-container {
                    table.questions {
                        thead {
                            tr {
                                th { (t!("browse.col_id", locale = locale)) }
                                th { (t!("browse.col_type", locale = locale)) }
                                th { (t!("browse.col_question", locale = locale)) }
                            }
                        }
                        tbody {
                            @if page.questions.is_empty() {
                                tr {
                                    td.status-msg colspan="3" { (t!("browse.no_questions", locale = locale)) }
                                }
                            }
                            @for q in &page.questions {
                                (question::question_row(q, &selections, locale))
                            }
                        }
                    }
                }
                (pager(state, page, locale))
            }
        }
    }
}

fn pager(state: &FilterState, page: &QuestionPage, locale: &str) -> Markup {
    let previous = state.previous_page().map(|s| names::browse_url(&s));
    let next = state.next_page(page.total_pages).map(|s| names::browse_url(&s));
    html! {
        nav.pager {
            small {
                (t!("browse.total", locale = locale, total = page.total))
                " · "
                (t!("browse.page_of", locale = locale, page = page.page, total = page.total_pages))
            }
            (components::page_button(&t!("browse.previous", locale = locale), previous.as_deref()))
            (components::page_button(&t!("browse.next", locale = locale), next.as_deref()))
        }
    }
}
