//! Prints the StatefulMeshService CustomResourceDefinition. The output is
//! JSON, which `kubectl apply -f -` accepts as-is.

use kube::CustomResourceExt;
use statefulmesh_controller::StatefulMeshService;

fn main() -> statefulmesh_controller::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&StatefulMeshService::crd())?
    );
    Ok(())
}
