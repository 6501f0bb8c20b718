use super::{ServiceBinding, ServiceInstance, VirtualService};
use k8s_openapi::api::apps::v1 as appsv1;
use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Every kind of child a parent can own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildKind {
    Namespace,
    StorageInstance,
    StorageBinding,
    Deployment,
    Service,
    IngressRoute,
}

impl ChildKind {
    /// In the order children are emitted.
    pub const ALL: [ChildKind; 6] = [
        ChildKind::Namespace,
        ChildKind::StorageInstance,
        ChildKind::StorageBinding,
        ChildKind::Deployment,
        ChildKind::Service,
        ChildKind::IngressRoute,
    ];

    pub fn api_version(self) -> Cow<'static, str> {
        match self {
            ChildKind::Namespace => corev1::Namespace::api_version(&()),
            ChildKind::StorageInstance => ServiceInstance::api_version(&()),
            ChildKind::StorageBinding => ServiceBinding::api_version(&()),
            ChildKind::Deployment => appsv1::Deployment::api_version(&()),
            ChildKind::Service => corev1::Service::api_version(&()),
            ChildKind::IngressRoute => VirtualService::api_version(&()),
        }
    }

    /// The wire `kind`, which differs from the variant name for the
    /// storage and routing children.
    pub fn kind(self) -> Cow<'static, str> {
        match self {
            ChildKind::Namespace => corev1::Namespace::kind(&()),
            ChildKind::StorageInstance => ServiceInstance::kind(&()),
            ChildKind::StorageBinding => ServiceBinding::kind(&()),
            ChildKind::Deployment => appsv1::Deployment::kind(&()),
            ChildKind::Service => corev1::Service::kind(&()),
            ChildKind::IngressRoute => VirtualService::kind(&()),
        }
    }

    /// Key under which observed children of this kind are grouped,
    /// e.g. `Deployment.apps/v1`.
    pub fn observed_key(self) -> String {
        format!("{}.{}", self.kind(), self.api_version())
    }
}

/// A fully rendered child object. Each variant already serializes its own
/// `apiVersion` and `kind`, so the enum is untagged on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DesiredChild {
    Namespace(corev1::Namespace),
    StorageInstance(ServiceInstance),
    StorageBinding(ServiceBinding),
    Deployment(appsv1::Deployment),
    Service(corev1::Service),
    IngressRoute(VirtualService),
}

impl DesiredChild {
    pub fn kind(&self) -> ChildKind {
        match self {
            DesiredChild::Namespace(_) => ChildKind::Namespace,
            DesiredChild::StorageInstance(_) => ChildKind::StorageInstance,
            DesiredChild::StorageBinding(_) => ChildKind::StorageBinding,
            DesiredChild::Deployment(_) => ChildKind::Deployment,
            DesiredChild::Service(_) => ChildKind::Service,
            DesiredChild::IngressRoute(_) => ChildKind::IngressRoute,
        }
    }

    pub fn meta(&self) -> &ObjectMeta {
        match self {
            DesiredChild::Namespace(r) => r.meta(),
            DesiredChild::StorageInstance(r) => r.meta(),
            DesiredChild::StorageBinding(r) => r.meta(),
            DesiredChild::Deployment(r) => r.meta(),
            DesiredChild::Service(r) => r.meta(),
            DesiredChild::IngressRoute(r) => r.meta(),
        }
    }

    pub fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }

    /// `None` for the cluster-scoped namespace itself.
    pub fn namespace(&self) -> Option<&str> {
        self.meta().namespace.as_deref()
    }

    pub fn labels(&self) -> Option<&BTreeMap<String, String>> {
        self.meta().labels.as_ref()
    }
}

impl From<corev1::Namespace> for DesiredChild {
    fn from(r: corev1::Namespace) -> Self {
        DesiredChild::Namespace(r)
    }
}

impl From<ServiceInstance> for DesiredChild {
    fn from(r: ServiceInstance) -> Self {
        DesiredChild::StorageInstance(r)
    }
}

impl From<ServiceBinding> for DesiredChild {
    fn from(r: ServiceBinding) -> Self {
        DesiredChild::StorageBinding(r)
    }
}

impl From<appsv1::Deployment> for DesiredChild {
    fn from(r: appsv1::Deployment) -> Self {
        DesiredChild::Deployment(r)
    }
}

impl From<corev1::Service> for DesiredChild {
    fn from(r: corev1::Service) -> Self {
        DesiredChild::Service(r)
    }
}

impl From<VirtualService> for DesiredChild {
    fn from(r: VirtualService) -> Self {
        DesiredChild::IngressRoute(r)
    }
}
