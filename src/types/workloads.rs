use super::{Container, Labels, Selector};
use crate::types::ChildResource;
use k8s_openapi::api::apps::v1 as apps;
use k8s_openapi::api::core::v1 as core;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

/// Deployment builder. Replicas are never set, leaving the count to the
/// API server default and any autoscaler.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub name: String,
    pub labels: Labels,
    pub selector: Selector,
    pub containers: Vec<Container>,
}

impl Deployment {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: name.clone(),
            labels: Labels::app(&name),
            selector: Selector::new().match_labels("app", &name),
            containers: Vec::new(),
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

    pub fn container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }
}

impl ChildResource for Deployment {
    type K8sType = apps::Deployment;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, namespace: &str) -> Self::K8sType {
        let labels_map = self.labels.into_inner();
        apps::Deployment {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: Some(namespace.to_string()),
                labels: Some(labels_map.clone()),
                ..Default::default()
            },
            spec: Some(apps::DeploymentSpec {
                selector: LabelSelector {
                    match_labels: Some(self.selector.into_inner()),
                    match_expressions: None,
                },
                template: core::PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels_map),
                        ..Default::default()
                    }),
                    spec: Some(core::PodSpec {
                        containers: self.containers.into_iter().map(|c| c.into_k8s()).collect(),
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
