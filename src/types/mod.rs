pub mod catalog;
pub mod child;
pub mod container;
pub mod core;
pub mod metadata;
pub mod networking;
pub mod workloads;

pub use self::catalog::*;
pub use self::child::*;
pub use self::container::*;
pub use self::core::*;
pub use self::metadata::*;
pub use self::networking::*;
pub use self::workloads::*;

pub trait ChildResource: Send + Sync {
    type K8sType: kube::Resource<DynamicType = ()>
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>
        + Into<DesiredChild>;

    fn name(&self) -> &str;
    fn into_k8s(self, namespace: &str) -> Self::K8sType;

    fn into_child(self, namespace: &str) -> DesiredChild
    where
        Self: Sized,
    {
        self.into_k8s(namespace).into()
    }
}
