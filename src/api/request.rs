use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, json};

use crate::{GantryError, Result};

/// Whether an operation reads or changes remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Read-only operation
    Query,
    /// State-changing operation
    Mutation,
}

impl OperationKind {
    /// Infers the kind from the leading keyword of an operation document.
    pub fn of_document(document: &str) -> Self {
        if document.trim_start().starts_with("mutation") {
            OperationKind::Mutation
        } else {
            OperationKind::Query
        }
    }

    /// Lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// A named operation document with its bound variables.
///
/// Built through [`OperationRequest::new`] and [`OperationRequest::var`];
/// once handed to a transport it is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    document: String,
    kind: OperationKind,
    variables: BTreeMap<String, Value>,
}

impl OperationRequest {
    /// Creates a request for the given document with no variables bound.
    pub fn new(document: impl Into<String>) -> Self {
        let document = document.into();
        let kind = OperationKind::of_document(&document);

        Self {
            document,
            kind,
            variables: BTreeMap::new(),
        }
    }

    /// Binds a variable. Binding the same name twice keeps the last value.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Binds a variable from any serializable input type.
    ///
    /// # Errors
    /// Returns `GantryError::Decode` if the value cannot be represented as JSON.
    pub fn serialized_var(self, name: &str, value: &impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| GantryError::Decode {
            path: format!("variables.{name}"),
            details: e.to_string(),
        })?;

        Ok(self.var(name, value))
    }

    /// The operation document text.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Query or mutation.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Variables keyed by name.
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }

    /// Serializes the request into the JSON body sent to the endpoint.
    pub fn to_body(&self) -> Value {
        json!({
            "query": self.document,
            "variables": self.variables,
        })
    }
}
