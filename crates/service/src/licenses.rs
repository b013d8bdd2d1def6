use common::metrics::LICENSE_VERIFICATIONS_TOTAL;
use models::{License, Purchase};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Body shared by all license endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRequest {
    pub product_id: String,
    pub license_key: String,
    #[serde(default = "default_increment")]
    pub increment_uses_count: bool,
}

fn default_increment() -> bool { true }

/// What every license endpoint reports back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseStatus {
    pub uses: i64,
    pub enabled: bool,
    pub purchase: Purchase,
}

impl From<&License> for LicenseStatus {
    fn from(l: &License) -> Self {
        Self { uses: l.uses, enabled: l.enabled, purchase: l.purchase.clone() }
    }
}

#[derive(Clone, Default)]
pub struct LicenseService {
    store: ResourceStore<License>,
}

impl LicenseService {
    pub fn new(store: ResourceStore<License>) -> Self { Self { store } }

    async fn apply<F>(&self, req: &LicenseRequest, f: F) -> Result<LicenseStatus, ServiceError>
    where
        F: FnOnce(&mut License) -> Result<(), ServiceError>,
    {
        self.store
            .modify(|l| l.matches(&req.product_id, &req.license_key), |l| {
                f(l)?;
                Ok(LicenseStatus::from(&*l))
            })
            .await
    }

    /// Check a key, bumping its use counter when the request asks for it.
    #[instrument(skip(self, req), fields(product_id = %req.product_id))]
    pub async fn verify(&self, req: &LicenseRequest) -> Result<LicenseStatus, ServiceError> {
        let increment = req.increment_uses_count;
        let status = self
            .apply(req, |l| {
                if increment {
                    l.uses = l
                        .uses
                        .checked_add(1)
                        .ok_or_else(|| ServiceError::invalid("license use count overflows"))?;
                }
                Ok(())
            })
            .await?;
        LICENSE_VERIFICATIONS_TOTAL.inc();
        debug!(uses = status.uses, increment, "license_verified");
        Ok(status)
    }

    pub async fn set_enabled(&self, req: &LicenseRequest, enabled: bool) -> Result<LicenseStatus, ServiceError> {
        let status = self
            .apply(req, |l| {
                l.enabled = enabled;
                Ok(())
            })
            .await?;
        info!(product_id = %req.product_id, enabled, "license_enabled_changed");
        Ok(status)
    }

    /// Decrement the use counter. The counter is not clamped at zero.
    pub async fn decrement_uses(&self, req: &LicenseRequest) -> Result<LicenseStatus, ServiceError> {
        let status = self
            .apply(req, |l| {
                l.uses = l
                    .uses
                    .checked_sub(1)
                    .ok_or_else(|| ServiceError::invalid("license use count underflows"))?;
                Ok(())
            })
            .await?;
        info!(product_id = %req.product_id, uses = status.uses, "license_uses_decremented");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, increment: bool) -> LicenseRequest {
        LicenseRequest { product_id: "1".into(), license_key: key.into(), increment_uses_count: increment }
    }

    fn service() -> LicenseService {
        LicenseService::new(ResourceStore::with_records(vec![License {
            product_id: "1".into(),
            license_key: "KEY-1".into(),
            uses: 3,
            enabled: true,
            purchase: Purchase { email: "buyer@example.com".into(), ..Default::default() },
        }]))
    }

    #[tokio::test]
    async fn verify_increments_by_exactly_one() {
        let svc = service();
        let status = svc.verify(&request("KEY-1", true)).await.unwrap();
        assert_eq!(status.uses, 4);
        assert!(status.enabled);
        assert_eq!(status.purchase.email, "buyer@example.com");
    }

    #[tokio::test]
    async fn verify_without_increment_leaves_counter() {
        let svc = service();
        assert_eq!(svc.verify(&request("KEY-1", false)).await.unwrap().uses, 3);
    }

    #[tokio::test]
    async fn unknown_pair_is_not_found_and_mutates_nothing() {
        let svc = service();
        assert!(svc.verify(&request("NOPE", true)).await.unwrap_err().is_not_found());
        let other_product = LicenseRequest { product_id: "2".into(), ..request("KEY-1", true) };
        assert!(svc.verify(&other_product).await.is_err());
        assert_eq!(svc.verify(&request("KEY-1", false)).await.unwrap().uses, 3);
    }

    #[tokio::test]
    async fn enable_then_disable() {
        let svc = service();
        assert!(svc.set_enabled(&request("KEY-1", true), true).await.unwrap().enabled);
        assert!(!svc.set_enabled(&request("KEY-1", true), false).await.unwrap().enabled);
    }

    #[tokio::test]
    async fn decrement_goes_below_zero() {
        let svc = LicenseService::new(ResourceStore::with_records(vec![License {
            product_id: "1".into(),
            license_key: "K".into(),
            ..Default::default()
        }]));
        assert_eq!(svc.decrement_uses(&request("K", true)).await.unwrap().uses, -1);
    }

    #[tokio::test]
    async fn counter_limits_are_rejected_without_mutation() {
        let svc = LicenseService::new(ResourceStore::with_records(vec![
            License { product_id: "1".into(), license_key: "MAX".into(), uses: i64::MAX, ..Default::default() },
            License { product_id: "1".into(), license_key: "MIN".into(), uses: i64::MIN, ..Default::default() },
        ]));
        assert!(matches!(svc.verify(&request("MAX", true)).await, Err(ServiceError::Invalid(_))));
        assert_eq!(svc.verify(&request("MAX", false)).await.unwrap().uses, i64::MAX);
        assert!(matches!(svc.decrement_uses(&request("MIN", true)).await, Err(ServiceError::Invalid(_))));
        assert_eq!(svc.verify(&request("MIN", false)).await.unwrap().uses, i64::MIN);
    }

    #[test]
    fn increment_flag_defaults_to_true() {
        let req: LicenseRequest =
            serde_json::from_str(r#"{"productId":"1","licenseKey":"K"}"#).unwrap();
        assert!(req.increment_uses_count);
    }
}
