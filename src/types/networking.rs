use super::Labels;
use crate::types::ChildResource;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The subset of Istio's `VirtualService` this controller emits.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "networking.istio.io",
    version = "v1alpha3",
    kind = "VirtualService",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gateways: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http: Vec<HttpRoute>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HttpRoute {
    #[serde(rename = "match", default, skip_serializing_if = "Vec::is_empty")]
    pub match_: Vec<HttpMatchRequest>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub route: Vec<HttpRouteDestination>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HttpMatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<StringMatch>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StringMatch {
    Prefix(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HttpRouteDestination {
    pub destination: Destination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Destination {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortSelector>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PortSelector {
    pub number: u32,
}

/// Path-based HTTP route builder rendered as an Istio `VirtualService`.
#[derive(Clone, Debug)]
pub struct IngressRoute {
    pub name: String,
    pub labels: Labels,
    pub hosts: Vec<String>,
    pub gateways: Vec<String>,
    pub rules: Vec<RouteRule>,
}

impl IngressRoute {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            labels: Labels::app(&name),
            name,
            hosts: Vec::new(),
            gateways: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(host.into());
        self
    }

    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateways.push(gateway.into());
        self
    }

    pub fn rule(mut self, rule: RouteRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl ChildResource for IngressRoute {
    type K8sType = VirtualService;

    fn name(&self) -> &str {
        &self.name
    }

    fn into_k8s(self, namespace: &str) -> Self::K8sType {
        let mut route = VirtualService::new(
            &self.name,
            VirtualServiceSpec {
                hosts: self.hosts,
                gateways: self.gateways,
                http: self.rules.into_iter().map(|r| r.into_k8s()).collect(),
            },
        );
        route.metadata.namespace = Some(namespace.to_string());
        route.metadata.labels = self.labels.into_option();
        route
    }
}

#[derive(Clone, Debug, Default)]
pub struct RouteRule {
    pub matches: Vec<StringMatch>,
    pub destinations: Vec<Destination>,
}

impl RouteRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.matches.push(StringMatch::Prefix(prefix.into()));
        self
    }

    pub fn destination(mut self, host: impl Into<String>, port: u32) -> Self {
        self.destinations.push(Destination {
            host: host.into(),
            port: Some(PortSelector { number: port }),
        });
        self
    }

    pub fn into_k8s(self) -> HttpRoute {
        HttpRoute {
            match_: self
                .matches
                .into_iter()
                .map(|uri| HttpMatchRequest { uri: Some(uri) })
                .collect(),
            route: self
                .destinations
                .into_iter()
                .map(|destination| HttpRouteDestination { destination })
                .collect(),
        }
    }
}
