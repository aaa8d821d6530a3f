use crate::value::Value;
use thiserror::Error;

pub type ElementResult<T> = Result<T, ElementError>;

#[derive(Error, Debug)]
pub enum ElementError {
    /// A value expected to be an element is neither an element nor a known leaf
    #[error("Invalid element: {value:?}")]
    InvalidElement { value: Value },

    #[error("Malformed component '{component}': {reason}")]
    MalformedComponent { component: String, reason: String },

    #[error("Component '{component}' failed: {source}")]
    ComponentFailed {
        component: String,
        #[source]
        source: Box<ElementError>,
    },

    #[error("Missing prop '{name}'")]
    MissingProp { name: String },

    #[error("Invalid prop '{name}': expected {expected}, found {found}")]
    InvalidProp {
        name: String,
        expected: String,
        found: String,
    },

    #[error("Number {value} cannot be represented exactly")]
    InexactNumber { value: String },

    #[error("Failed to decode props: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl ElementError {
    pub fn invalid_element(value: impl Into<Value>) -> Self {
        Self::InvalidElement {
            value: value.into(),
        }
    }

    pub fn malformed(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedComponent {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_prop(name: impl Into<String>) -> Self {
        Self::MissingProp { name: name.into() }
    }

    pub fn invalid_prop(name: impl Into<String>, expected: impl Into<String>, found: &Value) -> Self {
        Self::InvalidProp {
            name: name.into(),
            expected: expected.into(),
            found: found.type_name().to_string(),
        }
    }
}

impl From<String> for ElementError {
    fn from(s: String) -> Self {
        ElementError::Generic(s)
    }
}

impl From<&str> for ElementError {
    fn from(s: &str) -> Self {
        ElementError::Generic(s.to_string())
    }
}
