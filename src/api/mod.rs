//! Typed remote-operation client layer.
//!
//! An [`OperationRequest`] is executed by a [`Transport`], which yields a
//! [`RemoteEnvelope`]. [`unwrap`] pulls the field a caller expects out of
//! the envelope and decodes it. [`ApiClient`] wires the three together for
//! each control-plane operation.

mod client;
mod envelope;
pub mod operations;
mod request;
mod transport;
mod types;
mod unwrap;

#[cfg(test)]
pub(crate) mod tests;

pub use client::ApiClient;
pub use envelope::{RemoteEnvelope, RemoteErrorEntry};
pub use request::{OperationKind, OperationRequest};
pub use transport::{HttpTransport, Transport};
pub use types::{
    App, AppConfig, AttachPostgresClusterInput, AttachPostgresClusterPayload,
    PostgresClusterDatabase, PostgresClusterUser, TemplateDeployment,
};
pub use unwrap::{FieldPath, navigate, unwrap, unwrap_value};
