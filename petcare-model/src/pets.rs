//! Pet and vaccination records exchanged with the pet-care backend.
//!
//! Dates travel as strings; the helpers here parse them on demand.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Summary row shown in pet listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInfo {
    pub name: String,
    pub breed: String,
    pub date_of_birth: String,
    pub id: String,
    pub owner: String,
}

/// Full pet record including its vaccination schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub name: String,
    pub breed: String,
    pub date_of_birth: String,
    pub id: String,
    pub vaccinations: Vec<VaccineInfo>,
}

impl Pet {
    /// Build the write-side record, keyed by user, organization and email.
    pub fn to_update(
        &self,
        user_id: impl Into<String>,
        org_id: impl Into<String>,
        email: impl Into<String>,
    ) -> UpdatePetInfo {
        UpdatePetInfo {
            user_id: user_id.into(),
            org_id: org_id.into(),
            email: email.into(),
            name: self.name.clone(),
            breed: self.breed.clone(),
            date_of_birth: self.date_of_birth.clone(),
            vaccinations: self.vaccinations.clone(),
        }
    }

    /// Alert-enabled vaccinations due on or before `date`, in schedule order.
    pub fn due_vaccinations(&self, date: NaiveDate) -> Result<Vec<&VaccineInfo>> {
        let mut due = Vec::new();
        for vaccine in &self.vaccinations {
            if vaccine.is_due_on(date)? {
                due.push(vaccine);
            }
        }
        Ok(due)
    }
}

/// One vaccine in a pet's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineInfo {
    pub name: String,
    pub last_vaccination_date: String,
    pub next_vaccination_date: String,
    pub enable_alerts: bool,
}

impl VaccineInfo {
    pub fn last_given(&self) -> Result<NaiveDate> {
        parse_date("lastVaccinationDate", &self.last_vaccination_date)
    }

    pub fn next_due(&self) -> Result<NaiveDate> {
        parse_date("nextVaccinationDate", &self.next_vaccination_date)
    }

    /// True when alerts are on and the next dose is due by `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> Result<bool> {
        if !self.enable_alerts {
            return Ok(false);
        }
        Ok(self.next_due()? <= date)
    }
}

/// Write-side pet payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetInfo {
    pub user_id: String,
    pub org_id: String,
    pub email: String,
    pub name: String,
    pub breed: String,
    pub date_of_birth: String,
    pub vaccinations: Vec<VaccineInfo>,
}

/// Accepts a plain ISO date or a full RFC 3339 timestamp.
pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| ModelError::InvalidDate {
            field,
            value: value.to_owned(),
        })
}
