use uuid::Uuid;

use devtrack_domain::activity::{ActionType, ContentType};
use devtrack_domain::pagination::PageRequest;
use devtrack_domain::user::UserRole;
use devtrack_tracker::domain::types::{ActivityLogFilter, ActivityLogSortBy};
use devtrack_tracker::error::TrackerServiceError;
use devtrack_tracker::usecase::activity::{DeleteActivityLogUseCase, ListActivityLogsUseCase};

use crate::helpers::{MockActivityLogRepo, stored_log};

fn seeded_repo(alice: Uuid, bob: Uuid) -> MockActivityLogRepo {
    MockActivityLogRepo {
        stored: vec![
            stored_log(1, alice, ActionType::View, ContentType::DeviceArrival),
            stored_log(2, alice, ActionType::Export, ContentType::DeviceArrival),
            stored_log(3, bob, ActionType::Export, ContentType::DeviceDelivery),
            stored_log(4, bob, ActionType::Login, ContentType::User),
        ],
        ..Default::default()
    }
}

// ── List ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forbid_listing_for_staff() {
    let usecase = ListActivityLogsUseCase {
        repo: seeded_repo(Uuid::now_v7(), Uuid::now_v7()),
    };

    let result = usecase
        .execute(
            UserRole::Staff as u8,
            ActivityLogFilter::default(),
            ActivityLogSortBy::default(),
            PageRequest::default(),
        )
        .await;

    assert!(matches!(result, Err(TrackerServiceError::Forbidden)));
}

#[tokio::test]
async fn should_list_filtered_entries_for_admin() {
    let (alice, bob) = (Uuid::now_v7(), Uuid::now_v7());
    let usecase = ListActivityLogsUseCase {
        repo: seeded_repo(alice, bob),
    };

    let exports = usecase
        .execute(
            UserRole::Admin as u8,
            ActivityLogFilter {
                action_type: Some(ActionType::Export),
                ..Default::default()
            },
            ActivityLogSortBy::default(),
            PageRequest::default(),
        )
        .await
        .unwrap();
    let ids: Vec<i64> = exports.iter().map(|log| log.id).collect();
    assert_eq!(ids, [2, 3]);

    let bobs_deliveries = usecase
        .execute(
            UserRole::Superuser as u8,
            ActivityLogFilter {
                user_id: Some(bob),
                content_type: Some(ContentType::DeviceDelivery),
                ..Default::default()
            },
            ActivityLogSortBy::default(),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(bobs_deliveries.len(), 1);
    assert_eq!(bobs_deliveries[0].id, 3);
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forbid_deleting_for_admin() {
    let usecase = DeleteActivityLogUseCase {
        repo: MockActivityLogRepo {
            delete_returns: true,
            ..Default::default()
        },
    };

    let result = usecase.execute(UserRole::Admin as u8, 1).await;

    assert!(matches!(result, Err(TrackerServiceError::Forbidden)));
}

#[tokio::test]
async fn should_delete_for_superuser() {
    let usecase = DeleteActivityLogUseCase {
        repo: MockActivityLogRepo {
            delete_returns: true,
            ..Default::default()
        },
    };

    assert!(usecase.execute(UserRole::Superuser as u8, 1).await.is_ok());
}

#[tokio::test]
async fn should_report_missing_entry_on_delete() {
    let usecase = DeleteActivityLogUseCase {
        repo: MockActivityLogRepo::new(),
    };

    let result = usecase.execute(UserRole::Superuser as u8, 404).await;

    assert!(matches!(result, Err(TrackerServiceError::ActivityLogNotFound)));
}
