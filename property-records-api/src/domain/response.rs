use serde::{Deserialize, Serialize};

use super::submission::{InstallmentEntry, PropertySubmission, ServiceChargeEntry};

pub const WRITE_SUCCESS_MESSAGE: &str = "Data inserted successfully";
pub const READ_SUCCESS_MESSAGE: &str = "Data fetched successfully";

/// Result of a successful write: the submission echoed back, not re-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWriteResponse {
    pub message: String,
    pub property_data: PropertySubmission,
    pub payment_history: Vec<InstallmentEntry>,
    pub service_charge_history: Vec<ServiceChargeEntry>,
}

impl PropertyWriteResponse {
    pub fn echo(submission: PropertySubmission) -> Self {
        let payment_history = submission.payment_history.clone();
        let service_charge_history = submission.service_charge_history.clone();
        Self {
            message: WRITE_SUCCESS_MESSAGE.to_string(),
            property_data: submission,
            payment_history,
            service_charge_history,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListResponse<T> {
    pub message: String,
    pub data: Vec<T>,
}

impl<T> PropertyListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            message: READ_SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}
