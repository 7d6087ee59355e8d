use std::collections::HashMap;

use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;

use crate::domain::repository::ArrivalRepository;
use crate::domain::types::{ArrivalDraft, DeviceArrival};
use crate::error::TrackerServiceError;
use crate::usecase::require_identifier;

fn validate(draft: ArrivalDraft) -> Result<ArrivalDraft, TrackerServiceError> {
    Ok(ArrivalDraft {
        barcode: require_identifier(&draft.barcode)?,
        ..draft
    })
}

// ── ListArrivals ─────────────────────────────────────────────────────────────

pub struct ListArrivalsUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> ListArrivalsUseCase<R> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DeviceArrival>, TrackerServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── GetArrival ───────────────────────────────────────────────────────────────

pub struct GetArrivalUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> GetArrivalUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<DeviceArrival, TrackerServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or(TrackerServiceError::ArrivalNotFound)
    }
}

// ── CreateArrival ────────────────────────────────────────────────────────────

pub struct CreateArrivalUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> CreateArrivalUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        draft: ArrivalDraft,
    ) -> Result<DeviceArrival, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo.create(&draft, user_id).await
    }
}

// ── UpdateArrival ────────────────────────────────────────────────────────────

pub struct UpdateArrivalUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> UpdateArrivalUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        draft: ArrivalDraft,
    ) -> Result<DeviceArrival, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(TrackerServiceError::ArrivalNotFound)
    }
}

// ── DeleteArrival ────────────────────────────────────────────────────────────

pub struct DeleteArrivalUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> DeleteArrivalUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::ArrivalNotFound);
        }
        Ok(())
    }
}

// ── ImportArrivals ───────────────────────────────────────────────────────────

pub struct ImportArrivalsUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> ImportArrivalsUseCase<R> {
    /// Upsert every row by barcode. A barcode repeated within the batch keeps
    /// its first position and its last values.
    pub async fn execute(
        &self,
        user_id: Uuid,
        drafts: Vec<ArrivalDraft>,
    ) -> Result<u64, TrackerServiceError> {
        let mut rows: Vec<ArrivalDraft> = Vec::with_capacity(drafts.len());
        let mut positions: HashMap<String, usize> = HashMap::new();
        for draft in drafts {
            let draft = validate(draft)?;
            match positions.get(&draft.barcode) {
                Some(&at) => rows[at] = draft,
                None => {
                    positions.insert(draft.barcode.clone(), rows.len());
                    rows.push(draft);
                }
            }
        }
        if rows.is_empty() {
            return Ok(0);
        }
        self.repo.upsert_many(&rows, user_id).await
    }
}

// ── ExportArrivals ───────────────────────────────────────────────────────────

pub struct ExportArrivalsUseCase<R: ArrivalRepository> {
    pub repo: R,
}

impl<R: ArrivalRepository> ExportArrivalsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<DeviceArrival>, TrackerServiceError> {
        self.repo.list_all().await
    }
}
