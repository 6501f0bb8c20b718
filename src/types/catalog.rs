//! Service Catalog children: the request that provisions a managed data
//! store and the binding that materializes its credentials into a secret.

use crate::types::ChildResource;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ServiceInstance",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstanceSpec {
    #[serde(flatten)]
    pub plan_reference: PlanReference,
}

/// Selects a broker offering by its external class and plan names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_service_class_external_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_service_plan_external_name: Option<String>,
}

#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ServiceBinding",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingSpec {
    pub instance_ref: LocalObjectReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocalObjectReference {
    pub name: String,
}

/// Builder for a [`ServiceInstance`]. Class and plan are passed through
/// untouched; the broker rejects names it does not know.
#[derive(Clone, Debug)]
pub struct StorageInstance {
    pub name: String,
    pub class: String,
    pub plan: String,
}

impl StorageInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
            plan: String::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }
}

impl ChildResource for StorageInstance {
    type K8sType = ServiceInstance;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, namespace: &str) -> Self::K8sType {
        let mut instance = ServiceInstance::new(
            &self.name,
            ServiceInstanceSpec {
                plan_reference: PlanReference {
                    cluster_service_class_external_name: Some(self.class),
                    cluster_service_plan_external_name: Some(self.plan),
                },
            },
        );
        instance.metadata.namespace = Some(namespace.to_string());
        instance
    }
}

/// Builder for a [`ServiceBinding`]. The instance reference and target
/// secret both default to the binding's own name.
#[derive(Clone, Debug)]
pub struct StorageBinding {
    pub name: String,
    pub instance: String,
    pub secret_name: String,
}

impl StorageBinding {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            instance: name.clone(),
            secret_name: name.clone(),
            name,
        }
    }

    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    pub fn secret_name(mut self, secret_name: impl Into<String>) -> Self {
        self.secret_name = secret_name.into();
        self
    }
}

impl ChildResource for StorageBinding {
    type K8sType = ServiceBinding;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, namespace: &str) -> Self::K8sType {
        let mut binding = ServiceBinding::new(
            &self.name,
            ServiceBindingSpec {
                instance_ref: LocalObjectReference {
                    name: self.instance,
                },
                secret_name: Some(self.secret_name),
            },
        );
        binding.metadata.namespace = Some(namespace.to_string());
        binding
    }
}
