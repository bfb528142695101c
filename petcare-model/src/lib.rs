//! Core data model definitions shared across the pet-care admin crates.
#![allow(missing_docs)]

pub mod branding;
pub mod error;
pub mod medical;
pub mod notifications;
pub mod personalization;
pub mod pets;

// Intentionally curated re-exports for downstream consumers.
pub use branding::{BrandingField, BrandingPreference, BrandingValues};
pub use error::{ModelError, Result as ModelResult};
pub use medical::{MedicalReport, Medicine, UpdateMedicalReport};
pub use notifications::{NotificationInfo, Notifications};
pub use personalization::Personalization;
pub use pets::{Pet, PetInfo, UpdatePetInfo, VaccineInfo};
