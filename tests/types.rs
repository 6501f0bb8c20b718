use kube::CustomResourceExt;
use statefulmesh_controller::prelude::*;
use statefulmesh_controller::{StatefulMeshService, StringMatch};

#[test]
fn child_kinds_know_their_wire_identity() {
    let keys: Vec<String> = ChildKind::ALL.iter().map(|k| k.observed_key()).collect();
    assert_eq!(
        keys,
        vec![
            "Namespace.v1",
            "ServiceInstance.servicecatalog.k8s.io/v1beta1",
            "ServiceBinding.servicecatalog.k8s.io/v1beta1",
            "Deployment.apps/v1",
            "Service.v1",
            "VirtualService.networking.istio.io/v1alpha3",
        ]
    );
    assert_eq!(ChildKind::IngressRoute.kind(), "VirtualService");
    assert_eq!(ChildKind::StorageBinding.api_version(), "servicecatalog.k8s.io/v1beta1");
}

#[test]
fn namespace_ignores_namespace_argument() {
    let ns = Namespace::new("catalog").istio_injection().into_k8s("elsewhere");
    assert_eq!(ns.metadata.name.as_deref(), Some("catalog"));
    assert_eq!(ns.metadata.namespace, None);
}

#[test]
fn namespace_without_labels_omits_them() {
    let ns = Namespace::new("catalog").into_k8s("catalog");
    assert!(ns.metadata.labels.is_none());
}

#[test]
fn into_child_wraps_the_matching_variant() {
    let child = Service::new("orders").port(80).into_child("orders");
    assert_eq!(child.kind(), ChildKind::Service);
    assert_eq!(child.name(), "orders");
    assert_eq!(child.namespace(), Some("orders"));
    assert_eq!(
        child.labels().and_then(|l| l.get("app")).map(String::as_str),
        Some("orders")
    );

    let child = StorageBinding::new("orders").into_child("orders");
    assert!(matches!(child, DesiredChild::StorageBinding(_)));
}

#[test]
fn storage_binding_defaults_to_its_own_name() {
    let binding = StorageBinding::new("orders").into_k8s("orders");
    assert_eq!(binding.spec.instance_ref.name, "orders");
    assert_eq!(binding.spec.secret_name.as_deref(), Some("orders"));
    assert!(binding.metadata.labels.is_none());
}

#[test]
fn storage_instance_carries_class_and_plan() {
    let instance = StorageInstance::new("orders")
        .class("postgres")
        .plan("large")
        .into_k8s("orders");
    assert!(instance.metadata.labels.is_none());
    assert_eq!(instance.metadata.namespace.as_deref(), Some("orders"));
    assert_eq!(
        instance.spec.plan_reference.cluster_service_plan_external_name.as_deref(),
        Some("large")
    );
}

#[test]
fn container_reads_env_from_secret_keys() {
    let container = Container::new("web", "nginx:1.27")
        .port(80)
        .env_from_secret("TOKEN", "creds", "token")
        .into_k8s();

    let ports = container.ports.unwrap();
    assert_eq!(ports[0].container_port, 80);
    assert!(ports[0].name.is_none());

    let env = container.env.unwrap();
    assert_eq!(env[0].name, "TOKEN");
    assert!(env[0].value.is_none());
    let secret = env[0]
        .value_from
        .as_ref()
        .and_then(|s| s.secret_key_ref.as_ref())
        .unwrap();
    assert_eq!(secret.name, "creds");
    assert_eq!(secret.key, "token");
}

#[test]
fn container_without_ports_or_env_omits_them() {
    let container = Container::new("web", "nginx").into_k8s();
    assert!(container.ports.is_none());
    assert!(container.env.is_none());
}

#[test]
fn deployment_defaults_select_app_label() {
    let deployment = Deployment::new("web")
        .container(Container::new("web", "nginx"))
        .into_k8s("web");
    let spec = deployment.spec.unwrap();
    assert_eq!(spec.replicas, None);
    assert_eq!(
        spec.selector.match_labels.unwrap().get("app").map(String::as_str),
        Some("web")
    );
}

#[test]
fn route_without_gateways_omits_them() {
    let route = IngressRoute::new("web")
        .host("web.example.com")
        .rule(RouteRule::new().prefix("/web").destination("web", 8080))
        .into_k8s("web");

    let http = &route.spec.http[0];
    assert_eq!(http.match_[0].uri, Some(StringMatch::Prefix("/web".to_string())));
    assert_eq!(http.route[0].destination.port.map(|p| p.number), Some(8080));
    assert!(route.spec.gateways.is_empty());

    let value = serde_json::to_value(&route).unwrap();
    assert!(value["spec"].get("gateways").is_none());
    assert_eq!(value["spec"]["http"][0]["match"][0]["uri"]["prefix"], "/web");
}

#[test]
fn selector_copies_labels() {
    let labels = Labels::app("web").insert("tier", "front");
    let selector = Selector::from(&labels);
    assert_eq!(selector.into_inner(), labels.into_inner());
    assert_eq!(
        Selector::from(&Labels::app("web")),
        Selector::new().match_labels("app", "web")
    );
}

#[test]
fn parent_crd_is_cluster_scoped() {
    let crd = StatefulMeshService::crd();
    assert_eq!(crd.spec.group, "statefulmesh.io");
    assert_eq!(crd.spec.names.kind, "StatefulMeshService");
    assert_eq!(crd.spec.scope, "Cluster");
    assert_eq!(crd.spec.versions[0].name, "v1alpha1");
}

#[test]
fn parent_spec_serializes_camel_case_volume_fields() {
    let spec = ParentSpec {
        name: "catalog".to_string(),
        image: "registry/catalog".to_string(),
        volume_class: "mysql".to_string(),
        volume_plan: "small".to_string(),
    };
    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(value["volumeClass"], "mysql");
    assert_eq!(value["volumePlan"], "small");
}
