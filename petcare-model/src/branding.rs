//! Branding preference document.
//!
//! The remote preference service owns the schema, so the document is kept
//! verbatim as JSON and only the handful of leaves the admin console edits
//! are addressed, by JSON pointer, under the active theme:
//!
//! ```text
//! preference.theme.activeTheme
//! preference.theme[activeTheme].images.logo.imgURL
//! preference.theme[activeTheme].images.logo.altText
//! preference.theme[activeTheme].images.favicon.imgURL
//! preference.theme[activeTheme].colors.primary.main
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

const ACTIVE_THEME_POINTER: &str = "/preference/theme/activeTheme";

/// One of the editable leaves of the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandingField {
    LogoUrl,
    LogoAltText,
    FaviconUrl,
    PrimaryColor,
}

impl BrandingField {
    pub const ALL: [BrandingField; 4] = [
        BrandingField::LogoUrl,
        BrandingField::LogoAltText,
        BrandingField::FaviconUrl,
        BrandingField::PrimaryColor,
    ];

    /// Path of the leaf relative to the theme entry.
    pub fn relative_pointer(self) -> &'static str {
        match self {
            BrandingField::LogoUrl => "/images/logo/imgURL",
            BrandingField::LogoAltText => "/images/logo/altText",
            BrandingField::FaviconUrl => "/images/favicon/imgURL",
            BrandingField::PrimaryColor => "/colors/primary/main",
        }
    }

    /// Form field name used by the settings screen.
    pub fn form_name(self) -> &'static str {
        match self {
            BrandingField::LogoUrl => "logo_url",
            BrandingField::LogoAltText => "logo_alt_text",
            BrandingField::FaviconUrl => "favicon_url",
            BrandingField::PrimaryColor => "primary_color",
        }
    }
}

/// The four values the personalization form edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingValues {
    pub logo_url: String,
    pub logo_alt_text: String,
    pub favicon_url: String,
    pub primary_color: String,
}

impl BrandingValues {
    pub fn get(&self, field: BrandingField) -> &str {
        match field {
            BrandingField::LogoUrl => &self.logo_url,
            BrandingField::LogoAltText => &self.logo_alt_text,
            BrandingField::FaviconUrl => &self.favicon_url,
            BrandingField::PrimaryColor => &self.primary_color,
        }
    }

    pub fn set(&mut self, field: BrandingField, value: String) {
        match field {
            BrandingField::LogoUrl => self.logo_url = value,
            BrandingField::LogoAltText => self.logo_alt_text = value,
            BrandingField::FaviconUrl => self.favicon_url = value,
            BrandingField::PrimaryColor => self.primary_color = value,
        }
    }
}

/// An organization's full branding preference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandingPreference(Value);

impl BrandingPreference {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Key of the theme currently in use.
    pub fn active_theme(&self) -> Result<&str> {
        string_at(&self.0, ACTIVE_THEME_POINTER)
    }

    /// Read one leaf under the active theme.
    pub fn field(&self, field: BrandingField) -> Result<&str> {
        let theme = self.active_theme()?;
        string_at(&self.0, &leaf_pointer(theme, field))
    }

    /// Extract the four editable values under the active theme.
    ///
    /// A document that names an absent theme or lacks any leaf is rejected;
    /// values are never defaulted.
    pub fn branding(&self) -> Result<BrandingValues> {
        let mut values = BrandingValues::default();
        for field in BrandingField::ALL {
            values.set(field, self.field(field)?.to_owned());
        }
        Ok(values)
    }

    /// Derive a new document with the active theme's leaves replaced.
    ///
    /// `self` is left untouched. Every leaf is checked before anything is
    /// written so a contract violation never yields a half-updated copy.
    pub fn with_branding(&self, values: &BrandingValues) -> Result<Self> {
        let theme = self.active_theme()?;
        let pointers: Vec<(BrandingField, String)> = BrandingField::ALL
            .into_iter()
            .map(|field| (field, leaf_pointer(theme, field)))
            .collect();

        for (_, pointer) in &pointers {
            string_at(&self.0, pointer)?;
        }

        let mut next = self.0.clone();
        for (field, pointer) in &pointers {
            let slot = next.pointer_mut(pointer).ok_or_else(|| {
                ModelError::MissingField {
                    path: pointer_to_path(pointer),
                }
            })?;
            *slot = Value::String(values.get(*field).to_owned());
        }
        Ok(Self(next))
    }
}

fn leaf_pointer(theme: &str, field: BrandingField) -> String {
    format!(
        "/preference/theme/{}{}",
        escape_pointer_token(theme),
        field.relative_pointer()
    )
}

// RFC 6901: '~' must be escaped before '/'.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn string_at<'a>(value: &'a Value, pointer: &str) -> Result<&'a str> {
    match value.pointer(pointer) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ModelError::NotAString {
            path: pointer_to_path(pointer),
        }),
        None => Err(ModelError::MissingField {
            path: pointer_to_path(pointer),
        }),
    }
}

/// Render a JSON pointer as the dotted path used in error messages.
fn pointer_to_path(pointer: &str) -> String {
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
