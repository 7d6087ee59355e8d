use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Tracker service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error("arrival not found")]
    ArrivalNotFound,
    #[error("delivery not found")]
    DeliveryNotFound,
    #[error("security status not found")]
    SecurityStatusNotFound,
    #[error("activity log not found")]
    ActivityLogNotFound,
    #[error("barcode already exists")]
    BarcodeAlreadyExists,
    #[error("invalid barcode")]
    InvalidBarcode,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArrivalNotFound => "ARRIVAL_NOT_FOUND",
            Self::DeliveryNotFound => "DELIVERY_NOT_FOUND",
            Self::SecurityStatusNotFound => "SECURITY_STATUS_NOT_FOUND",
            Self::ActivityLogNotFound => "ACTIVITY_LOG_NOT_FOUND",
            Self::BarcodeAlreadyExists => "BARCODE_ALREADY_EXISTS",
            Self::InvalidBarcode => "INVALID_BARCODE",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for TrackerServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ArrivalNotFound
            | Self::DeliveryNotFound
            | Self::SecurityStatusNotFound
            | Self::ActivityLogNotFound => StatusCode::NOT_FOUND,
            Self::BarcodeAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidBarcode | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: TrackerServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_arrival_not_found() {
        assert_error(
            TrackerServiceError::ArrivalNotFound,
            StatusCode::NOT_FOUND,
            "ARRIVAL_NOT_FOUND",
            "arrival not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_delivery_not_found() {
        assert_error(
            TrackerServiceError::DeliveryNotFound,
            StatusCode::NOT_FOUND,
            "DELIVERY_NOT_FOUND",
            "delivery not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_security_status_not_found() {
        assert_error(
            TrackerServiceError::SecurityStatusNotFound,
            StatusCode::NOT_FOUND,
            "SECURITY_STATUS_NOT_FOUND",
            "security status not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_activity_log_not_found() {
        assert_error(
            TrackerServiceError::ActivityLogNotFound,
            StatusCode::NOT_FOUND,
            "ACTIVITY_LOG_NOT_FOUND",
            "activity log not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_barcode_already_exists() {
        assert_error(
            TrackerServiceError::BarcodeAlreadyExists,
            StatusCode::CONFLICT,
            "BARCODE_ALREADY_EXISTS",
            "barcode already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_barcode() {
        assert_error(
            TrackerServiceError::InvalidBarcode,
            StatusCode::BAD_REQUEST,
            "INVALID_BARCODE",
            "invalid barcode",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_data() {
        assert_error(
            TrackerServiceError::MissingData,
            StatusCode::BAD_REQUEST,
            "MISSING_DATA",
            "missing data",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            TrackerServiceError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_unauthorized() {
        assert_error(
            TrackerServiceError::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "unauthorized",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            TrackerServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
