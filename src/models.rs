use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Kind of question payload. The set is open: unknown kinds are kept verbatim
/// and rendered like a plain question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    #[default]
    Plain,
    Statements,
    Match,
    Other(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Plain => "plain",
            QuestionType::Statements => "statements",
            QuestionType::Match => "match",
            QuestionType::Other(kind) => kind,
        }
    }
}

impl From<String> for QuestionType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "plain" => QuestionType::Plain,
            "statements" => QuestionType::Statements,
            "match" => QuestionType::Match,
            _ => QuestionType::Other(kind),
        }
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        match kind {
            QuestionType::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

/// One labelled line of a statement list or a match list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// The JSON payload stored in `questions.question`.
///
/// Serializes as the stored value when there is one, so API clients see the
/// payload exactly as written. The decoded fields drive rendering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionBody {
    #[serde(default, alias = "question_text")]
    pub prompt: String,
    #[serde(default, deserialize_with = "lenient")]
    pub statements: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "lenient")]
    pub list_i: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "lenient")]
    pub list_ii: Option<Vec<ListItem>>,
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Serialize)]
struct DecodedBody<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    statements: Option<&'a [ListItem]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_i: Option<&'a [ListItem]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ii: Option<&'a [ListItem]>,
}

impl Serialize for QuestionBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(raw) = &self.raw {
            return raw.serialize(serializer);
        }
        DecodedBody {
            prompt: &self.prompt,
            statements: self.statements.as_deref(),
            list_i: self.list_i.as_deref(),
            list_ii: self.list_ii.as_deref(),
        }
        .serialize(serializer)
    }
}

impl QuestionBody {
    /// Decode a stored payload. A bare string is taken as the prompt; anything
    /// that is not an object yields an empty body. The value itself is kept.
    pub fn from_json(value: Value) -> Self {
        let decoded = match &value {
            Value::String(prompt) => QuestionBody {
                prompt: prompt.clone(),
                ..Default::default()
            },
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => QuestionBody::default(),
        };
        QuestionBody {
            raw: Some(value),
            ..decoded
        }
    }
}

/// A question joined with its optional context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub question_id: String,
    pub unit: Option<String>,
    pub year: Option<String>,
    pub question_type: QuestionType,
    pub question: QuestionBody,
    pub options: Vec<String>,
    pub correct_answer: Option<Vec<String>>,
    pub context_id: Option<String>,
    pub context_type: Option<String>,
    pub context_content: ContextContent,
}

impl Question {
    /// Both match lists, only for match-type questions carrying both of them.
    pub fn match_lists(&self) -> Option<(&[ListItem], &[ListItem])> {
        if self.question_type != QuestionType::Match {
            return None;
        }
        match (&self.question.list_i, &self.question.list_ii) {
            (Some(list_i), Some(list_ii)) => Some((list_i, list_ii)),
            _ => None,
        }
    }

    pub fn has_answer_key(&self) -> bool {
        self.correct_answer.is_some()
    }

    /// Whether the 1-based option `index` is listed in the answer key.
    pub fn is_correct(&self, index: usize) -> bool {
        let index = index.to_string();
        self.correct_answer
            .iter()
            .flatten()
            .any(|answer| answer.trim() == index)
    }
}

/// Reading passage or data table shared by one or more questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextContent {
    #[default]
    None,
    Text(String),
    Table(DataTable),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ContextContent {
    /// Dispatch on the shape of the stored content: a string is a passage, an
    /// object with array `headers` and `rows` is a table, anything else is
    /// no context at all.
    pub fn from_json(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(text)) => ContextContent::Text(text),
            Some(Value::Object(mut map)) => {
                let (Some(Value::Array(headers)), Some(Value::Array(rows))) =
                    (map.remove("headers"), map.remove("rows"))
                else {
                    return ContextContent::None;
                };
                let caption = match map.remove("caption") {
                    Some(Value::String(caption)) => Some(caption),
                    _ => None,
                };
                ContextContent::Table(DataTable {
                    headers: headers.iter().map(cell_text).collect(),
                    rows: rows
                        .into_iter()
                        .map(|row| match row {
                            Value::Array(cells) => cells,
                            cell => vec![cell],
                        })
                        .collect(),
                    caption,
                })
            }
            _ => ContextContent::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ContextContent::None)
    }
}

/// Text shown for a scalar table cell or option.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Flatten a stored JSON list into strings. A lone scalar becomes a
/// one-element list.
pub fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(cell_text).collect(),
        scalar => vec![cell_text(&scalar)],
    }
}

/// Distinct filter values for populating the unit and year selects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub units: Vec<String>,
    pub years: Vec<String>,
}

/// Deserialize a value that may be either a JSON number or a string.
fn deserialize_string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Malformed sub-shapes decode as absent instead of failing the whole payload.
fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}
