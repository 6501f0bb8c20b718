//! Maps a parent spec onto the full set of children that should exist for it.
//!
//! The mapping is pure: no I/O, no retained state, and the observed children
//! are never consulted. Diffing and applying the result, along with ordering
//! and retrying, belongs to the caller.

use crate::config::ReconcilerConfig;
use crate::error::{Error, Result};
use crate::resource::{ObservedChildren, ParentSpec, ParentStatus, SyncRequest, SyncResponse};
use crate::types::{
    ChildResource, Container, Deployment, DesiredChild, IngressRoute, Labels, Namespace,
    RouteRule, Selector, Service, ServiceBinding, ServiceInstance, StorageBinding,
    StorageInstance, VirtualService,
};
use k8s_openapi::api::apps::v1 as appsv1;
use k8s_openapi::api::core::v1 as corev1;
use tracing::debug;

/// Environment variables wired into the workload, paired with the key they
/// read from the credentials secret produced by the storage binding.
pub const SECRET_ENV_BINDINGS: [(&str, &str); 4] = [
    ("DB_USERNAME", "username"),
    ("DB_PASSWORD", "password"),
    ("DB_HOST", "host"),
    ("DB_PORT", "port"),
];

/// The desired children of one parent, one field per kind.
#[derive(Clone, Debug, PartialEq)]
pub struct DesiredChildren {
    pub namespace: corev1::Namespace,
    pub storage_instance: ServiceInstance,
    pub storage_binding: ServiceBinding,
    pub deployment: appsv1::Deployment,
    pub service: corev1::Service,
    pub ingress_route: VirtualService,
}

impl DesiredChildren {
    /// Flattens into wire order: namespace, storage, workload, routing.
    pub fn into_vec(self) -> Vec<DesiredChild> {
        vec![
            self.namespace.into(),
            self.storage_instance.into(),
            self.storage_binding.into(),
            self.deployment.into(),
            self.service.into(),
            self.ingress_route.into(),
        ]
    }
}

impl IntoIterator for DesiredChildren {
    type Item = DesiredChild;
    type IntoIter = std::vec::IntoIter<DesiredChild>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    config: ReconcilerConfig,
}

impl Reconciler {
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Computes the status and desired children for `parent`.
    ///
    /// Every child is named after `parent.name` and, apart from the namespace
    /// itself, lives in the namespace of that name. `observed` is accepted for
    /// the hook contract but does not influence the result.
    pub fn sync(
        &self,
        parent: &ParentSpec,
        observed: &ObservedChildren,
    ) -> (ParentStatus, DesiredChildren) {
        let name = parent.name.as_str();
        debug!(
            "Syncing {} with {} observed children",
            name,
            observed.len()
        );

        let app = Labels::app(name);
        let port = self.config.port;

        let container = SECRET_ENV_BINDINGS.iter().fold(
            Container::new(name, self.image_for(&parent.image)).port(i32::from(port)),
            |container, (var, key)| container.env_from_secret(*var, name, *key),
        );

        let deployment = Deployment::new(name)
            .labels(app.clone())
            .selector(Selector::from(&app))
            .container(container);

        let children = DesiredChildren {
            namespace: Namespace::new(name).istio_injection().into_k8s(name),
            storage_instance: StorageInstance::new(name)
                .class(&parent.volume_class)
                .plan(&parent.volume_plan)
                .into_k8s(name),
            storage_binding: StorageBinding::new(name)
                .instance(name)
                .secret_name(name)
                .into_k8s(name),
            deployment: deployment.into_k8s(name),
            service: Service::new(name)
                .labels(app.clone())
                .selector(Selector::from(&app))
                .port(i32::from(port))
                .into_k8s(name),
            ingress_route: IngressRoute::new(name)
                .labels(app)
                .host("*")
                .gateway(&self.config.gateway)
                .rule(
                    RouteRule::new()
                        .prefix(format!("/{}", name))
                        .destination(name, u32::from(port)),
                )
                .into_k8s(name),
        };

        // Status is left for the hook caller to fill from live observations.
        (ParentStatus::default(), children)
    }

    /// The tag is appended unconditionally, even to an already tagged image.
    pub fn image_for(&self, image: &str) -> String {
        format!("{}:{}", image, self.config.image_tag)
    }

    pub fn handle(&self, request: &SyncRequest) -> SyncResponse {
        let (status, children) = self.sync(&request.parent.spec, &request.children);
        SyncResponse {
            status,
            children: children.into_vec(),
        }
    }

    pub fn decode(body: &[u8]) -> Result<SyncRequest> {
        serde_json::from_slice(body).map_err(Error::Decode)
    }

    /// Decodes a JSON sync request and answers it. Fails only when the body
    /// does not decode; any decoded parent yields the complete child set.
    pub fn sync_json(&self, body: &[u8]) -> Result<SyncResponse> {
        let request = Self::decode(body)?;
        Ok(self.handle(&request))
    }
}
