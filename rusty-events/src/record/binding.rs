use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    Uri,
    Literal,
    Bnode,
    /// Pre-1.1 endpoints still emit this for literals with a datatype.
    TypedLiteral,
}

/// One term of a SPARQL JSON result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BindingKind>,
    pub value: String,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Binding {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: Some(BindingKind::Literal),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            kind: Some(BindingKind::Uri),
            ..Self::literal(value)
        }
    }
}
