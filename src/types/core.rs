use super::{Labels, Selector};
use crate::types::ChildResource;
use k8s_openapi::api::core::v1 as k8s;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Cluster-scoped, so `into_k8s` ignores its namespace argument.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub name: String,
    pub labels: Labels,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Labels::new(),
        }
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels = self.labels.insert(key, value);
        self
    }

    /// Opts every pod in the namespace into Istio sidecar injection.
    pub fn istio_injection(self) -> Self {
        self.label("istio-injection", "enabled")
    }
}

impl ChildResource for Namespace {
    type K8sType = k8s::Namespace;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, _namespace: &str) -> Self::K8sType {
        k8s::Namespace {
            metadata: ObjectMeta {
                name: Some(self.name),
                labels: self.labels.into_option(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Service {
    pub name: String,
    pub labels: Labels,
    pub selector: Selector,
    pub ports: Vec<i32>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: name.clone(),
            labels: Labels::app(&name),
            selector: Selector::new().match_labels("app", &name),
            ports: Vec::new(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn port(mut self, port: i32) -> Self {
        self.ports.push(port);
        self
    }
}

impl ChildResource for Service {
    type K8sType = k8s::Service;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, namespace: &str) -> Self::K8sType {
        k8s::Service {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: Some(namespace.to_string()),
                labels: Some(self.labels.into_inner()),
                ..Default::default()
            },
            spec: Some(k8s::ServiceSpec {
                selector: Some(self.selector.into_inner()),
                ports: if self.ports.is_empty() {
                    None
                } else {
                    Some(
                        self.ports
                            .into_iter()
                            .map(|port| k8s::ServicePort {
                                port,
                                ..Default::default()
                            })
                            .collect(),
                    )
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
