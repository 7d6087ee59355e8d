use uuid::Uuid;

use devtrack_domain::pagination::PageRequest;

use crate::domain::repository::DeliveryRepository;
use crate::domain::types::{DeliveryDraft, DeviceDelivery};
use crate::error::TrackerServiceError;
use crate::usecase::require_identifier;

fn validate(draft: DeliveryDraft) -> Result<DeliveryDraft, TrackerServiceError> {
    Ok(DeliveryDraft {
        barcode: require_identifier(&draft.barcode)?,
        ..draft
    })
}

// ── ListDeliveries ───────────────────────────────────────────────────────────

pub struct ListDeliveriesUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> ListDeliveriesUseCase<R> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DeviceDelivery>, TrackerServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── GetDelivery ──────────────────────────────────────────────────────────────

pub struct GetDeliveryUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> GetDeliveryUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<DeviceDelivery, TrackerServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or(TrackerServiceError::DeliveryNotFound)
    }
}

// ── CreateDelivery ───────────────────────────────────────────────────────────

pub struct CreateDeliveryUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> CreateDeliveryUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        draft: DeliveryDraft,
    ) -> Result<DeviceDelivery, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo.create(&draft, user_id).await
    }
}

// ── UpdateDelivery ───────────────────────────────────────────────────────────

pub struct UpdateDeliveryUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> UpdateDeliveryUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        draft: DeliveryDraft,
    ) -> Result<DeviceDelivery, TrackerServiceError> {
        let draft = validate(draft)?;
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(TrackerServiceError::DeliveryNotFound)
    }
}

// ── DeleteDelivery ───────────────────────────────────────────────────────────

pub struct DeleteDeliveryUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> DeleteDeliveryUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.repo.delete(id).await? {
            return Err(TrackerServiceError::DeliveryNotFound);
        }
        Ok(())
    }
}

// ── ImportDeliveries ─────────────────────────────────────────────────────────

pub struct ImportDeliveriesUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> ImportDeliveriesUseCase<R> {
    /// Deliveries are events, so repeated barcodes are inserted as-is.
    pub async fn execute(
        &self,
        user_id: Uuid,
        drafts: Vec<DeliveryDraft>,
    ) -> Result<u64, TrackerServiceError> {
        let rows = drafts
            .into_iter()
            .map(validate)
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Ok(0);
        }
        self.repo.insert_many(&rows, user_id).await
    }
}

// ── ExportDeliveries ─────────────────────────────────────────────────────────

pub struct ExportDeliveriesUseCase<R: DeliveryRepository> {
    pub repo: R,
}

impl<R: DeliveryRepository> ExportDeliveriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<DeviceDelivery>, TrackerServiceError> {
        self.repo.list_all().await
    }
}
