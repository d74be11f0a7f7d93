use std::collections::HashMap;

use crate::models::Question;

/// Display state of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Wrong,
}

impl OptionMark {
    pub fn css_class(self) -> &'static str {
        match self {
            OptionMark::Neutral => "option-neutral",
            OptionMark::Correct => "option-correct",
            OptionMark::Wrong => "option-incorrect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedOption<'a> {
    /// 1-based position, the option's identity for the answer key.
    pub index: usize,
    pub text: &'a str,
    pub mark: OptionMark,
    pub selected: bool,
}

/// The chosen option per question. One selection per question; choosing again
/// replaces it.
#[derive(Debug, Clone, Default)]
pub struct Selections {
    chosen: HashMap<String, usize>,
}

impl Selections {
    pub fn select(&mut self, question_id: &str, index: usize) {
        self.chosen.insert(question_id.to_string(), index);
    }

    pub fn selected(&self, question_id: &str) -> Option<usize> {
        self.chosen.get(question_id).copied()
    }

    /// Options of `question` marked for the current selection.
    pub fn marks<'a>(&self, question: &'a Question) -> Vec<MarkedOption<'a>> {
        mark_options(question, self.selected(&question.question_id))
    }
}

/// Nothing is marked before a selection. After one, every keyed option is
/// correct and the selected option is wrong unless it is keyed. Without an
/// answer key the selection is shown but never judged.
pub fn mark_options(question: &Question, selected: Option<usize>) -> Vec<MarkedOption<'_>> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let index = i + 1;
            let is_selected = selected == Some(index);
            let mark = match selected {
                None => OptionMark::Neutral,
                Some(_) if question.is_correct(index) => OptionMark::Correct,
                Some(_) if is_selected && question.has_answer_key() => OptionMark::Wrong,
                Some(_) => OptionMark::Neutral,
            };
            MarkedOption {
                index,
                text: text.as_str(),
                mark,
                selected: is_selected,
            }
        })
        .collect()
}
