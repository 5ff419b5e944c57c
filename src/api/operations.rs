//! Operation documents sent by [`ApiClient`](super::ApiClient).

/// Creates a postgres cluster deployment in an organization.
pub const CREATE_POSTGRES_CLUSTER: &str = r#"
mutation($input: CreatePostgresClusterInput!) {
  createPostgresCluster(input: $input) {
    templateDeployment {
      id
      status
      apps {
        nodes {
          name
          state
          status
        }
      }
    }
  }
}
"#;

/// Looks up a template deployment by node id.
pub const GET_TEMPLATE_DEPLOYMENT: &str = r#"
query($id: ID!) {
  templateDeploymentNode: node(id: $id) {
    ... on TemplateDeployment {
      id
      status
      apps {
        nodes {
          name
          state
          status
        }
      }
    }
  }
}
"#;

/// Attaches a postgres cluster app to a consuming app.
pub const ATTACH_POSTGRES_CLUSTER: &str = r#"
mutation($input: AttachPostgresClusterInput!) {
  attachPostgresCluster(input: $input) {
    app {
      name
    }
    postgresClusterApp {
      name
    }
  }
}
"#;

/// Detaches a postgres cluster app from a consuming app.
pub const DETACH_POSTGRES_CLUSTER: &str = r#"
mutation($input: DetachPostgresClusterInput!) {
  detachPostgresCluster(input: $input) {
    clientMutationId
  }
}
"#;

/// Lists databases of a postgres cluster app.
pub const LIST_POSTGRES_DATABASES: &str = r#"
query($appName: String!) {
  app(name: $appName) {
    postgresAppRole: role {
      name
      ... on PostgresClusterAppRole {
        databases {
          name
          users
        }
      }
    }
  }
}
"#;

/// Lists users of a postgres cluster app.
pub const LIST_POSTGRES_USERS: &str = r#"
query($appName: String!) {
  app(name: $appName) {
    postgresAppRole: role {
      name
      ... on PostgresClusterAppRole {
        users {
          username
          isSuperuser
          databases
        }
      }
    }
  }
}
"#;

/// Fetches the service definition of an app.
pub const GET_CONFIG: &str = r#"
query($appName: String!) {
  app(name: $appName) {
    config {
      definition
    }
  }
}
"#;

/// Asks the server to validate a service definition.
pub const PARSE_CONFIG: &str = r#"
query($appName: String!, $definition: JSON!) {
  app(name: $appName) {
    parseConfig(definition: $definition) {
      definition
      valid
      errors
    }
  }
}
"#;
