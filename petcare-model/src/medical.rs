use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single prescribed medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub dosage: String,
    pub drug_name: String,
    pub duration: String,
}

/// A stored diagnosis with its treatment and ordered medication list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalReport {
    pub diagnosis: String,
    pub medications: Vec<Medicine>,
    pub treatment: String,
    pub created_at: String,
    pub report_id: String,
}

impl MedicalReport {
    pub fn created_at(&self) -> Result<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        // Some backends drop the offset; treat those as UTC.
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| ModelError::InvalidDate {
                field: "createdAt",
                value: self.created_at.clone(),
            })
    }

    pub fn to_update(&self) -> UpdateMedicalReport {
        UpdateMedicalReport {
            diagnosis: self.diagnosis.clone(),
            medications: self.medications.clone(),
            treatment: self.treatment.clone(),
        }
    }
}

/// Write-side medical report payload; identity and timestamp are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicalReport {
    pub diagnosis: String,
    pub medications: Vec<Medicine>,
    pub treatment: String,
}
