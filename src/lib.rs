pub mod config;
pub mod error;
pub mod reconciler;
pub mod resource;
pub mod server;
pub mod shutdown;
pub mod telemetry;
pub mod types;

pub use config::{ReconcilerConfig, ServerConfig};
pub use error::{Error, Result};
pub use reconciler::{DesiredChildren, Reconciler, SECRET_ENV_BINDINGS};
pub use resource::{
    ObservedChildren, ParentObject, ParentSpec, ParentStatus, StatefulMeshService, SyncRequest,
    SyncResponse,
};
pub use server::{sync_router, SyncState};
pub use types::*;

pub mod prelude {
    pub use crate::config::{ReconcilerConfig, ServerConfig};
    pub use crate::error::{Error, Result};
    pub use crate::reconciler::{DesiredChildren, Reconciler};
    pub use crate::resource::{ObservedChildren, ParentSpec, ParentStatus, SyncRequest, SyncResponse};

    pub use crate::types::{
        ChildKind, ChildResource, Container, Deployment, DesiredChild, IngressRoute, Labels,
        Namespace, RouteRule, Selector, Service, StorageBinding, StorageInstance,
    };

    pub use kube::CustomResource;
    pub use schemars::JsonSchema;
    pub use serde::{Deserialize, Serialize};
}
