use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::AppError;

/// Chart specification as produced by the backend: Plotly traces plus layout.
///
/// Contents are passed through to the chart library untouched; only the
/// outer shape is checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPayload {
    pub data: Vec<Value>,
    pub layout: Map<String, Value>,
}

impl PlotPayload {
    pub fn new(data: Vec<Value>, layout: Map<String, Value>) -> Self {
        Self { data, layout }
    }

    /// Parse a response body into a payload.
    ///
    /// Accepts the figure object itself or a JSON string holding the
    /// serialized figure (the backend double-encodes its responses).
    pub fn parse(body: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body.trim())
            .map_err(|e| AppError::ParseError(format!("response is not JSON: {e}")))?;

        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner)
                .map_err(|e| AppError::ParseError(format!("embedded figure is not JSON: {e}")))?,
            other => other,
        };

        Self::from_value(value)
    }

    /// Validate an already decoded figure.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let Value::Object(mut figure) = value else {
            return Err(AppError::ParseError(format!(
                "expected a figure object, got {}",
                kind(&value)
            )));
        };

        let data = match figure.remove("data") {
            Some(Value::Array(traces)) => traces,
            Some(other) => {
                return Err(AppError::ParseError(format!(
                    "`data` must be an array of traces, got {}",
                    kind(&other)
                )));
            }
            None => return Err(AppError::ParseError("missing `data` field".to_string())),
        };

        if let Some(index) = data.iter().position(|trace| !trace.is_object()) {
            return Err(AppError::ParseError(format!("trace {index} is not an object")));
        }

        let layout = match figure.remove("layout") {
            Some(Value::Object(layout)) => layout,
            Some(Value::Null) | None => Map::new(),
            Some(other) => {
                return Err(AppError::ParseError(format!(
                    "`layout` must be an object, got {}",
                    kind(&other)
                )));
            }
        };

        Ok(Self { data, layout })
    }

    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    /// `layout.title` as plain text, whether given as a string or `{ text }`.
    pub fn title(&self) -> Option<&str> {
        match self.layout.get("title")? {
            Value::String(text) => Some(text),
            Value::Object(title) => title.get("text").and_then(Value::as_str),
            _ => None,
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_accepts_string_and_object_forms() {
        let plain = PlotPayload::from_value(json!({"data": [], "layout": {"title": "Prices"}})).unwrap();
        assert_eq!(plain.title(), Some("Prices"));

        let nested =
            PlotPayload::from_value(json!({"data": [], "layout": {"title": {"text": "Prices"}}})).unwrap();
        assert_eq!(nested.title(), Some("Prices"));
    }

    #[test]
    fn double_encoded_string_must_hold_json() {
        let err = PlotPayload::parse(r#""not a figure""#).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }
}
