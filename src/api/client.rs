use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::Result;

use super::{
    App, AppConfig, AttachPostgresClusterInput, AttachPostgresClusterPayload, FieldPath,
    OperationRequest, PostgresClusterDatabase, PostgresClusterUser, RemoteEnvelope,
    TemplateDeployment, Transport, operations, unwrap, unwrap_value,
};

/// Typed client for the control-plane operations.
///
/// Every method builds one [`OperationRequest`], executes it on the
/// transport and unwraps the field the caller asked for. Errors from the
/// transport and the unwrapper are passed through untouched.
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client on top of `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes `request` and returns the raw envelope.
    ///
    /// # Errors
    /// Returns whatever the transport returns.
    pub fn run(&self, request: &OperationRequest) -> Result<RemoteEnvelope> {
        self.transport.execute(request)
    }

    fn run_at<R: DeserializeOwned>(&self, request: &OperationRequest, path: &str) -> Result<R> {
        let envelope = self.run(request)?;
        debug!(path, "unwrapping response");
        unwrap(&envelope, &FieldPath::parse(path))
    }

    /// Creates a postgres cluster in an organization.
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    #[instrument(skip(self))]
    pub fn create_postgres_cluster(
        &self,
        organization_id: &str,
        name: &str,
        region: &str,
    ) -> Result<TemplateDeployment> {
        let request = OperationRequest::new(operations::CREATE_POSTGRES_CLUSTER).var(
            "input",
            json!({
                "organizationId": organization_id,
                "name": name,
                "region": region,
            }),
        );

        self.run_at(&request, "createPostgresCluster.templateDeployment")
    }

    /// Fetches a template deployment by id.
    ///
    /// # Errors
    /// Returns `MissingField` if the id does not resolve to a deployment.
    #[instrument(skip(self))]
    pub fn get_template_deployment(&self, id: &str) -> Result<TemplateDeployment> {
        let request = OperationRequest::new(operations::GET_TEMPLATE_DEPLOYMENT).var("id", id);

        self.run_at(&request, "templateDeploymentNode")
    }

    /// Attaches a postgres cluster to an app, returning `(app, cluster_app)`.
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    #[instrument(skip(self))]
    pub fn attach_postgres_cluster(&self, input: &AttachPostgresClusterInput) -> Result<(App, App)> {
        let request =
            OperationRequest::new(operations::ATTACH_POSTGRES_CLUSTER).serialized_var("input", input)?;

        let payload: AttachPostgresClusterPayload =
            self.run_at(&request, "attachPostgresCluster")?;

        Ok((payload.app, payload.postgres_cluster_app))
    }

    /// Detaches a postgres cluster from an app.
    ///
    /// Only the acknowledgement is checked; the payload carries nothing.
    ///
    /// # Errors
    /// Returns transport, remote or missing-field errors.
    #[instrument(skip(self))]
    pub fn detach_postgres_cluster(&self, postgres_app_id: &str, app_id: &str) -> Result<()> {
        let request = OperationRequest::new(operations::DETACH_POSTGRES_CLUSTER).var(
            "input",
            json!({
                "postgresClusterAppId": postgres_app_id,
                "appId": app_id,
            }),
        );

        let envelope = self.run(&request)?;
        unwrap_value(&envelope, &FieldPath::parse("detachPostgresCluster"))?;
        Ok(())
    }

    /// Lists databases of a postgres cluster app.
    ///
    /// # Errors
    /// Returns `MissingField` if the app's role is not a postgres cluster.
    #[instrument(skip(self))]
    pub fn list_postgres_databases(&self, app_name: &str) -> Result<Vec<PostgresClusterDatabase>> {
        let request =
            OperationRequest::new(operations::LIST_POSTGRES_DATABASES).var("appName", app_name);

        self.run_at(&request, "app.postgresAppRole.databases")
    }

    /// Lists users of a postgres cluster app.
    ///
    /// # Errors
    /// Returns `MissingField` if the app's role is not a postgres cluster.
    #[instrument(skip(self))]
    pub fn list_postgres_users(&self, app_name: &str) -> Result<Vec<PostgresClusterUser>> {
        let request =
            OperationRequest::new(operations::LIST_POSTGRES_USERS).var("appName", app_name);

        self.run_at(&request, "app.postgresAppRole.users")
    }

    /// Fetches the server-side configuration of an app.
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    #[instrument(skip(self))]
    pub fn get_config(&self, app_name: &str) -> Result<AppConfig> {
        let request = OperationRequest::new(operations::GET_CONFIG).var("appName", app_name);

        self.run_at(&request, "app.config")
    }

    /// Sends a definition to the server-side validator.
    ///
    /// An invalid definition is a successful call: inspect
    /// [`AppConfig::valid`].
    ///
    /// # Errors
    /// Returns transport, remote, missing-field or decode errors.
    #[instrument(skip(self, definition))]
    pub fn parse_config(&self, app_name: &str, definition: &Value) -> Result<AppConfig> {
        let request = OperationRequest::new(operations::PARSE_CONFIG)
            .var("appName", app_name)
            .var("definition", definition.clone());

        self.run_at(&request, "app.parseConfig")
    }
}
