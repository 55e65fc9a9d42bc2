//! Refresh bridge behaviour tests.

use crate::feed::{ChangeEvent, ChangeFeedHub, ChangeKind, Collection, RefreshBridge};
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const WATCHED: [Collection; 3] = [
    Collection::Tasks,
    Collection::TaskInstances,
    Collection::RecurringTasks,
];

#[fixture]
fn hub() -> ChangeFeedHub {
    ChangeFeedHub::new()
}

fn counting_callback() -> (Arc<AtomicUsize>, crate::feed::RefreshCallback) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let callback: crate::feed::RefreshCallback = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (count, callback)
}

/// Yields until the forwarding tasks have had a chance to run.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn any_watched_collection_triggers_the_shared_callback(hub: ChangeFeedHub) {
    let (count, callback) = counting_callback();
    let subscription = RefreshBridge::watch(&hub, &WATCHED, callback);
    settle().await;

    hub.publish(ChangeEvent::new(Collection::Tasks, ChangeKind::Update, "t1"));
    hub.publish(ChangeEvent::new(
        Collection::TaskInstances,
        ChangeKind::Insert,
        "i1",
    ));
    hub.publish(ChangeEvent::new(
        Collection::RecurringTasks,
        ChangeKind::Delete,
        "r1",
    ));
    settle().await;

    assert_eq!(count.load(Ordering::SeqCst), 3);
    assert_eq!(subscription.watched(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unwatched_collections_do_not_trigger_the_callback(hub: ChangeFeedHub) {
    let (count, callback) = counting_callback();
    let _subscription = RefreshBridge::watch(&hub, &[Collection::Tasks], callback);
    settle().await;

    hub.publish(ChangeEvent::new(
        Collection::Departamentos,
        ChangeKind::Insert,
        "d1",
    ));
    settle().await;

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_the_subscription_stops_all_watchers(hub: ChangeFeedHub) {
    let (count, callback) = counting_callback();
    let subscription = RefreshBridge::watch(&hub, &WATCHED, callback);
    settle().await;
    assert_eq!(hub.watcher_count(Collection::Tasks), 1);

    drop(subscription);
    settle().await;

    hub.publish(ChangeEvent::new(Collection::Tasks, ChangeKind::Update, "t1"));
    settle().await;

    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(hub.watcher_count(Collection::Tasks), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publishing_without_watchers_is_harmless(hub: ChangeFeedHub) {
    hub.publish(ChangeEvent::new(Collection::Profiles, ChangeKind::Update, "p1"));
}

#[rstest]
fn collection_names_are_wire_stable() {
    assert_eq!(Collection::Tasks.as_str(), "tasks");
    assert_eq!(Collection::TaskInstances.as_str(), "task_instances");
    assert_eq!(Collection::RecurringTasks.as_str(), "recurring_tasks");
    assert_eq!(Collection::Departamentos.as_str(), "departamentos");
}
