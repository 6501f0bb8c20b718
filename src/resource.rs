//! The parent custom resource and the request/response documents exchanged
//! with the sync hook caller.

use crate::types::{ChildKind, DesiredChild};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declared intent for one application instance.
///
/// The parent is cluster-scoped: its children span a namespace it creates,
/// and owner references cannot cross namespaces.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "statefulmesh.io",
    version = "v1alpha1",
    kind = "StatefulMeshService",
    plural = "statefulmeshservices",
    shortname = "sms",
    status = "ParentStatus",
    derive = "PartialEq"
)]
pub struct ParentSpec {
    /// Name and namespace of every derived child.
    pub name: String,
    /// Image reference without a tag.
    pub image: String,
    #[serde(default, rename = "volumeClass", alias = "volumeclass")]
    pub volume_class: String,
    #[serde(default, rename = "volumePlan", alias = "volumeplan")]
    pub volume_plan: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParentStatus {
    pub replicas: i32,
    pub succeeded: i32,
}

/// The parent as delivered inside a sync request. Only `spec` is required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: ParentSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ParentStatus>,
}

/// Last-known children grouped by `<Kind>.<apiVersion>` and then by name.
///
/// Decoding never fails on shape: a kind whose entry is not an object
/// (a `null` from a nil map, or anything else) is kept as an empty group.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObservedChildren(pub BTreeMap<String, BTreeMap<String, Value>>);

impl<'de> Deserialize<'de> for ObservedChildren {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let groups = match Value::deserialize(deserializer)? {
            Value::Object(groups) => groups
                .into_iter()
                .map(|(kind, group)| {
                    let children = match group {
                        Value::Object(children) => children.into_iter().collect(),
                        _ => BTreeMap::new(),
                    };
                    (kind, children)
                })
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(Self(groups))
    }
}

impl ObservedChildren {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(mut self, kind: ChildKind, name: impl Into<String>, object: Value) -> Self {
        self.0
            .entry(kind.observed_key())
            .or_default()
            .insert(name.into(), object);
        self
    }

    pub fn of_kind(&self, kind: ChildKind) -> Option<&BTreeMap<String, Value>> {
        self.0.get(&kind.observed_key())
    }

    pub fn get(&self, kind: ChildKind, name: &str) -> Option<&Value> {
        self.of_kind(kind).and_then(|children| children.get(name))
    }

    /// Total number of observed objects across all kinds.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub parent: ParentObject,
    #[serde(default)]
    pub children: ObservedChildren,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SyncResponse {
    pub status: ParentStatus,
    pub children: Vec<DesiredChild>,
}
