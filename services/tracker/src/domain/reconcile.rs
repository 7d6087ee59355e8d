//! Device reconciliation: classify identifiers seen in arrivals and
//! installation checks into online / offline / unmatched.

use std::collections::{BTreeSet, HashMap};

use devtrack_domain::device::DeviceBucket;
use devtrack_domain::pagination::{Page, paginate};

use crate::domain::types::{
    ArrivalSnapshot, BucketTotals, ClassifiedDevice, InstallationSnapshot, normalize_identifier,
};

/// Arrivals and installations of one time window, keyed by device identifier.
///
/// Blank identifiers are dropped on construction. When an identifier repeats,
/// the later record wins, so callers pass installations oldest check first.
#[derive(Debug, Default)]
pub struct Reconciliation {
    arrivals: HashMap<String, ArrivalSnapshot>,
    installations: HashMap<String, InstallationSnapshot>,
}

impl Reconciliation {
    pub fn new(
        arrivals: impl IntoIterator<Item = ArrivalSnapshot>,
        installations: impl IntoIterator<Item = InstallationSnapshot>,
    ) -> Self {
        let arrivals = arrivals
            .into_iter()
            .filter_map(|a| Some((normalize_identifier(&a.barcode)?.to_owned(), a)))
            .collect();
        let installations = installations
            .into_iter()
            .filter_map(|i| Some((normalize_identifier(&i.asset_serial_number)?.to_owned(), i)))
            .collect();
        Self {
            arrivals,
            installations,
        }
    }

    /// Arrival barcodes that also appear in installations.
    pub fn online_ids(&self) -> BTreeSet<&str> {
        self.arrivals
            .keys()
            .filter(|k| self.installations.contains_key(*k))
            .map(String::as_str)
            .collect()
    }

    /// Arrival barcodes with no installation check.
    pub fn offline_ids(&self) -> BTreeSet<&str> {
        self.arrivals
            .keys()
            .filter(|k| !self.installations.contains_key(*k))
            .map(String::as_str)
            .collect()
    }

    /// Installation serials with no arrival.
    pub fn other_ids(&self) -> BTreeSet<&str> {
        self.installations
            .keys()
            .filter(|k| !self.arrivals.contains_key(*k))
            .map(String::as_str)
            .collect()
    }

    pub fn ids(&self, bucket: DeviceBucket) -> BTreeSet<&str> {
        match bucket {
            DeviceBucket::Online => self.online_ids(),
            DeviceBucket::Offline => self.offline_ids(),
            DeviceBucket::Other => self.other_ids(),
        }
    }

    pub fn totals(&self) -> BucketTotals {
        let online = self
            .arrivals
            .keys()
            .filter(|k| self.installations.contains_key(*k))
            .count() as u64;
        BucketTotals {
            online,
            offline: self.arrivals.len() as u64 - online,
            other: self.installations.len() as u64 - online,
        }
    }

    /// Join an identifier back to its records as `bucket` dictates.
    ///
    /// Returns `None` when a record the bucket needs is missing.
    pub fn classify(&self, id: &str, bucket: DeviceBucket) -> Option<ClassifiedDevice> {
        match bucket {
            DeviceBucket::Online => {
                let arrival = self.arrivals.get(id)?;
                let installation = self.installations.get(id)?;
                Some(ClassifiedDevice::Online {
                    barcode: id.to_owned(),
                    device_model: arrival.device_model.clone(),
                    project_name: arrival.project_name.clone(),
                    network_element_name: installation.network_element_name.clone(),
                    is_online: installation.is_online,
                    check_date: installation.check_date,
                })
            }
            DeviceBucket::Offline => {
                let arrival = self.arrivals.get(id)?;
                Some(ClassifiedDevice::Offline {
                    barcode: id.to_owned(),
                    device_model: arrival.device_model.clone(),
                    project_name: arrival.project_name.clone(),
                    arrival_date: arrival.arrival_date,
                })
            }
            DeviceBucket::Other => {
                let installation = self.installations.get(id)?;
                Some(ClassifiedDevice::Unmatched {
                    serial: id.to_owned(),
                    network_element_name: installation.network_element_name.clone(),
                    is_online: installation.is_online,
                    check_date: installation.check_date,
                })
            }
        }
    }

    /// Page through one bucket in identifier order.
    ///
    /// Only the identifiers on the requested page are joined; join misses are
    /// skipped and leave the window metadata untouched.
    pub fn page(
        &self,
        bucket: DeviceBucket,
        requested_page: i64,
        per_page: u32,
    ) -> Page<ClassifiedDevice> {
        let ids: Vec<&str> = self.ids(bucket).into_iter().collect();
        let Page { items, window } = paginate(ids, requested_page, per_page);
        let items = items
            .into_iter()
            .filter_map(|id| self.classify(id, bucket))
            .collect();
        Page { items, window }
    }
}
