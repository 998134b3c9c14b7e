//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of the language model used for every stage (Value Object)
///
/// Any OpenAI-compatible model id is accepted; the id is passed to the
/// provider verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    /// Model used when the configuration does not name one
    pub const DEFAULT_ID: &'static str = "gpt-4o-mini";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(Self::DEFAULT_ID)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s.trim()))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::new(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let model: Model = "gpt-4.1".parse().unwrap();
        assert_eq!(model.to_string(), "gpt-4.1");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::new("gpt-4o")).unwrap();
        assert_eq!(json, "\"gpt-4o\"");
        let parsed: Model = serde_json::from_str("\" gpt-4o \"").unwrap();
        assert_eq!(parsed, Model::new("gpt-4o"));
    }
}
