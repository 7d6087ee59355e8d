use chrono::{DateTime, Duration, Utc};

use devtrack_domain::device::DeviceBucket;
use devtrack_domain::pagination::Page;

use crate::domain::reconcile::Reconciliation;
use crate::domain::repository::DeviceSnapshotRepository;
use crate::domain::types::{BucketTotals, ClassifiedDevice, DailyCheckSummary};
use crate::error::TrackerServiceError;

pub struct DashboardInput {
    pub bucket: DeviceBucket,
    /// Unclamped; out-of-range values resolve to the nearest page.
    pub page: i64,
    pub per_page: u32,
    pub now: DateTime<Utc>,
    /// Length of the creation-time window ending at `now`.
    pub window: Duration,
}

pub struct Dashboard {
    pub bucket: DeviceBucket,
    pub devices: Page<ClassifiedDevice>,
    pub totals: BucketTotals,
    pub today: DailyCheckSummary,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

// ── GetDashboard ─────────────────────────────────────────────────────────────

pub struct GetDashboardUseCase<R: DeviceSnapshotRepository> {
    pub repo: R,
}

impl<R: DeviceSnapshotRepository> GetDashboardUseCase<R> {
    pub async fn execute(&self, input: DashboardInput) -> Result<Dashboard, TrackerServiceError> {
        let window_end = input.now;
        let window_start = window_end - input.window;

        let arrivals = self
            .repo
            .arrivals_created_between(window_start, window_end)
            .await?;
        let installations = self
            .repo
            .installations_created_between(window_start, window_end)
            .await?;
        let reconciliation = Reconciliation::new(arrivals, installations);

        let today = self.repo.count_checks_on(input.now.date_naive()).await?;

        Ok(Dashboard {
            bucket: input.bucket,
            devices: reconciliation.page(input.bucket, input.page, input.per_page),
            totals: reconciliation.totals(),
            today,
            window_start,
            window_end,
        })
    }
}
