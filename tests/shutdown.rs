use std::time::Duration;

use statefulmesh_controller::shutdown::GracefulShutdown;

#[tokio::test]
async fn signalled_resolves_after_shutdown_is_initiated() {
    let shutdown = GracefulShutdown::new(Duration::from_millis(10));
    let signalled = tokio::spawn(shutdown.signalled());

    assert!(!signalled.is_finished());
    shutdown.coordinator().initiate_shutdown().await;

    tokio::time::timeout(Duration::from_secs(1), signalled)
        .await
        .expect("shutdown signal not observed")
        .unwrap();
}

#[tokio::test]
async fn signalled_after_the_fact_resolves_immediately() {
    let shutdown = GracefulShutdown::new(Duration::ZERO);
    shutdown.coordinator().initiate_shutdown().await;

    tokio::time::timeout(Duration::from_millis(100), shutdown.signalled())
        .await
        .expect("late subscriber missed the shutdown signal");
}
