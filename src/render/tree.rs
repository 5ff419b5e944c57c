use serde_json::Value;

/// Untyped configuration tree as returned by the remote side.
///
/// Mapping entries keep the order they were built in; the renderer sorts
/// them, so that order never reaches the output.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigTree {
    /// Text scalar
    String(String),
    /// Whole-number scalar, wide enough for any JSON integer
    Integer(i128),
    /// Fractional scalar
    Float(f64),
    /// Keyed children, keys unique
    Mapping(Vec<(String, ConfigTree)>),
    /// Ordered children
    Sequence(Vec<ConfigTree>),
    /// Explicit null
    Null,
    /// A value that fits none of the variants above
    Unknown {
        /// Raw textual form of the value
        raw: String,
        /// Name of the value's type
        type_name: &'static str,
    },
}

impl ConfigTree {
    /// Builds a mapping from `(key, value)` pairs. A repeated key replaces the
    /// earlier entry in place.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, ConfigTree)>) -> Self {
        let mut mapping: Vec<(String, ConfigTree)> = Vec::new();

        for (key, value) in entries {
            let key = key.into();
            match mapping.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => mapping.push((key, value)),
            }
        }

        ConfigTree::Mapping(mapping)
    }

    /// Shorthand for a string scalar.
    pub fn string(value: impl Into<String>) -> Self {
        ConfigTree::String(value.into())
    }

    /// Textual form of a scalar, as used inside inline lists.
    ///
    /// Floats keep their fraction here; only keyed float lines truncate.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            ConfigTree::String(s) => Some(s.clone()),
            ConfigTree::Integer(i) => Some(i.to_string()),
            ConfigTree::Float(f) => Some(f.to_string()),
            ConfigTree::Null => Some("null".to_string()),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn type_str(&self) -> &'static str {
        match self {
            ConfigTree::String(_) => "string",
            ConfigTree::Integer(_) => "integer",
            ConfigTree::Float(_) => "float",
            ConfigTree::Mapping(_) => "mapping",
            ConfigTree::Sequence(_) => "sequence",
            ConfigTree::Null => "null",
            ConfigTree::Unknown { type_name, .. } => *type_name,
        }
    }
}

impl From<&Value> for ConfigTree {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ConfigTree::Null,
            Value::String(s) => ConfigTree::String(s.clone()),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => ConfigTree::Integer(i128::from(i)),
                (None, Some(u), _) => ConfigTree::Integer(i128::from(u)),
                (None, None, Some(f)) => ConfigTree::Float(f),
                (None, None, None) => ConfigTree::Unknown {
                    raw: n.to_string(),
                    type_name: "number",
                },
            },
            Value::Array(items) => ConfigTree::Sequence(items.iter().map(ConfigTree::from).collect()),
            Value::Object(map) => ConfigTree::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), ConfigTree::from(v)))
                    .collect(),
            ),
            Value::Bool(b) => ConfigTree::Unknown {
                raw: b.to_string(),
                type_name: "bool",
            },
        }
    }
}

impl From<Value> for ConfigTree {
    fn from(value: Value) -> Self {
        ConfigTree::from(&value)
    }
}
