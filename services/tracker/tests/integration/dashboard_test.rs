use chrono::Duration;

use devtrack_domain::device::DeviceBucket;
use devtrack_tracker::domain::types::{BucketTotals, ClassifiedDevice};
use devtrack_tracker::usecase::dashboard::{DashboardInput, GetDashboardUseCase};

use crate::helpers::{MockSnapshotRepo, arrival, date, fixed_now, installation};

fn input(bucket: DeviceBucket, page: i64, per_page: u32) -> DashboardInput {
    DashboardInput {
        bucket,
        page,
        per_page,
        now: fixed_now(),
        window: Duration::hours(24),
    }
}

fn seeded_repo() -> MockSnapshotRepo {
    MockSnapshotRepo {
        arrivals: vec![arrival("A1"), arrival("A2"), arrival("A3")],
        installations: vec![installation("A2"), installation("A3"), installation("X9")],
        online_today: 4,
        offline_today: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn should_query_the_trailing_window_ending_now() {
    let repo = seeded_repo();
    let windows = repo.windows.clone();
    let counted = repo.counted_dates.clone();
    let usecase = GetDashboardUseCase { repo };

    let dashboard = usecase
        .execute(input(DeviceBucket::Online, 1, 20))
        .await
        .unwrap();

    let expected = (fixed_now() - Duration::hours(24), fixed_now());
    assert_eq!(*windows.lock().unwrap(), vec![expected, expected]);
    assert_eq!(dashboard.window_start, expected.0);
    assert_eq!(dashboard.window_end, expected.1);
    assert_eq!(*counted.lock().unwrap(), vec![date(2024, 6, 1)]);
    assert_eq!(dashboard.today.online, 4);
    assert_eq!(dashboard.today.offline, 1);
}

#[tokio::test]
async fn should_report_totals_for_every_bucket() {
    let usecase = GetDashboardUseCase { repo: seeded_repo() };

    let dashboard = usecase
        .execute(input(DeviceBucket::Offline, 1, 20))
        .await
        .unwrap();

    assert_eq!(
        dashboard.totals,
        BucketTotals {
            online: 2,
            offline: 1,
            other: 1,
        }
    );
    assert_eq!(dashboard.bucket, DeviceBucket::Offline);
    assert_eq!(dashboard.devices.items.len(), 1);
    assert!(matches!(
        &dashboard.devices.items[0],
        ClassifiedDevice::Offline { barcode, .. } if barcode == "A1"
    ));
}

#[tokio::test]
async fn should_list_unmatched_installations_in_other_bucket() {
    let usecase = GetDashboardUseCase { repo: seeded_repo() };

    let dashboard = usecase
        .execute(input(DeviceBucket::Other, 1, 20))
        .await
        .unwrap();

    assert_eq!(dashboard.devices.items.len(), 1);
    assert!(matches!(
        &dashboard.devices.items[0],
        ClassifiedDevice::Unmatched { serial, network_element_name, .. }
            if serial == "X9" && network_element_name == "NE-X9"
    ));
}

#[tokio::test]
async fn should_clamp_requested_page_into_range() {
    let usecase = GetDashboardUseCase { repo: seeded_repo() };

    let past_end = usecase
        .execute(input(DeviceBucket::Online, 99, 1))
        .await
        .unwrap();
    assert_eq!(past_end.devices.window.page, 2);
    assert_eq!(past_end.devices.window.total_pages, 2);
    assert!(matches!(
        &past_end.devices.items[..],
        [ClassifiedDevice::Online { barcode, .. }] if barcode == "A3"
    ));

    let before_start = usecase
        .execute(input(DeviceBucket::Online, -4, 1))
        .await
        .unwrap();
    assert_eq!(before_start.devices.window.page, 1);
    assert!(matches!(
        &before_start.devices.items[..],
        [ClassifiedDevice::Online { barcode, .. }] if barcode == "A2"
    ));
}

#[tokio::test]
async fn should_render_empty_window_as_single_empty_page() {
    let usecase = GetDashboardUseCase {
        repo: MockSnapshotRepo::default(),
    };

    let dashboard = usecase
        .execute(input(DeviceBucket::Online, 3, 20))
        .await
        .unwrap();

    assert!(dashboard.devices.items.is_empty());
    assert_eq!(dashboard.devices.window.page, 1);
    assert_eq!(dashboard.devices.window.total_pages, 0);
    assert_eq!(dashboard.totals, BucketTotals::default());
    assert_eq!(dashboard.today.online, 0);
}
