//! A delivery task carried from creation to a final outcome.

use aidhub::{
    error::lifecycle::LifecycleError,
    lifecycle::TaskAction,
    scope::{compose_scope, Scope},
    stats::ScopeStatistics,
    store::EntityStore,
};
use aidhub_test_utils::{constant::test_timestamp, prelude::*};
use entity::prelude::*;

fn store() -> EntityStore {
    TestBuilder::new()
        .with_organization("org-1")
        .with_courier("cour-1")
        .with_beneficiary("ben-1", Some("org-1"), None)
        .with_package("pkg-1", "ben-1", Some("org-1"))
        .with_task("task-1", "pkg-1", "ben-1", None)
        .build()
        .into()
}

/// Expect a delivered task to show in the organization's statistics
#[test]
fn delivery_updates_statistics() {
    let mut store = store();
    let at = test_timestamp();

    store
        .apply_task_action("task-1", TaskAction::Assign { courier_id: "cour-1".to_string() }, at)
        .unwrap();
    store.apply_task_action("task-1", TaskAction::Start, at).unwrap();
    store
        .apply_task_action(
            "task-1",
            TaskAction::Deliver {
                proof: DeliveryProof {
                    notes: Some("Received by head of household".to_string()),
                    ..DeliveryProof::default()
                },
            },
            at,
        )
        .unwrap();

    let composed = compose_scope(&store, &Scope::Organization("org-1".to_string()));
    let stats = ScopeStatistics::compute(&composed);

    assert_eq!(stats.delivered_packages, 1);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.delivery_rate, 100);
    assert_eq!(
        store.couriers.find_by_id("cour-1").unwrap().completed_tasks,
        factory::courier("cour-1").completed_tasks + 1
    );
}

/// Expect a rescheduled task to be assignable again
#[test]
fn rescheduled_task_can_be_reassigned() {
    let mut store = store();
    let at = test_timestamp();

    store
        .apply_task_action("task-1", TaskAction::Assign { courier_id: "cour-1".to_string() }, at)
        .unwrap();
    store.apply_task_action("task-1", TaskAction::Start, at).unwrap();
    store
        .apply_task_action("task-1", TaskAction::Reschedule { scheduled_for: at }, at)
        .unwrap();

    let status = store
        .apply_task_action("task-1", TaskAction::Assign { courier_id: "cour-1".to_string() }, at)
        .unwrap();

    assert_eq!(status, TaskStatus::Assigned);
    assert_eq!(
        store.packages.find_by_id("pkg-1").unwrap().status,
        PackageStatus::Pending
    );
}

/// Expect delivering an unstarted task to be refused without side effects
#[test]
fn refuses_skipping_start() {
    let mut store = store();

    let result = store.apply_task_action(
        "task-1",
        TaskAction::Deliver { proof: DeliveryProof::default() },
        test_timestamp(),
    );

    assert!(matches!(result, Err(LifecycleError::InvalidTaskTransition { .. })));
    assert_eq!(
        store.packages.find_by_id("pkg-1").unwrap().status,
        PackageStatus::Pending
    );
}
