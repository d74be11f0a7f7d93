use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{ListItem, Question},
    names,
    selection::{MarkedOption, OptionMark, Selections},
    views::context,
};

/// One table row: id, type and the question body with its context.
pub fn question_row(question: &Question, selections: &Selections, locale: &str) -> Markup {
    html! {
        tr {
            td { span.id-badge { (question.question_id) } }
            td { span.type-badge { (question.question_type.as_str()) } }
            td { (question_body(question, selections, locale)) }
        }
    }
}

pub fn question_body(question: &Question, selections: &Selections, locale: &str) -> Markup {
    html! {
        (context::context(&question.context_content))
        span.question-text { (question.question.prompt) }
        @if let Some(statements) = &question.question.statements {
            ul.statements {
                @for item in statements {
                    li { (labelled(item)) }
                }
            }
        }
        @if let Some((list_i, list_ii)) = question.match_lists() {
            div.match-lists {
                (match_column(&t!("question.list_i", locale = locale), list_i))
                (match_column(&t!("question.list_ii", locale = locale), list_ii))
            }
        }
        (options(question, selections, locale))
    }
}

fn labelled(item: &ListItem) -> String {
    format!("{}. {}", item.id, item.text)
}

fn match_column(label: &str, items: &[ListItem]) -> Markup {
    html! {
        div.match-column {
            h4 { (label) }
            ul {
                @for item in items {
                    li { (labelled(item)) }
                }
            }
        }
    }
}

/// The option block. Each option re-renders this block with itself selected,
/// so the swapped-in markup carries the selection for this question only.
pub fn options(question: &Question, selections: &Selections, locale: &str) -> Markup {
    let element_id = names::options_element_id(&question.question_id);
    let target = format!("#{element_id}");
    html! {
        div.options-grid id=(element_id) {
            @for option in selections.marks(question) {
                button type="button"
                       class=(option_class(&option))
                       data-option=(option.index)
                       hx-get=(names::select_option_url(&question.question_id, option.index))
                       hx-target=(target)
                       hx-swap="outerHTML" {
                    span.option-index { "(" (option.index) ")" }
                    (option.text)
                    @match option.mark {
                        OptionMark::Correct => {
                            " " span.badge-correct { (t!("question.correct", locale = locale)) }
                        }
                        OptionMark::Wrong => {
                            " " span.badge-incorrect { (t!("question.incorrect", locale = locale)) }
                        }
                        OptionMark::Neutral => {}
                    }
                }
            }
        }
    }
}

fn option_class(option: &MarkedOption<'_>) -> String {
    let mut class = format!("option-box {}", option.mark.css_class());
    if option.selected {
        class.push_str(" option-selected");
    }
    class
}
