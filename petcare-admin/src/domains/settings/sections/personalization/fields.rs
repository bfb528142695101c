//! Field metadata and validation for the personalization form.

use petcare_model::{BrandingField, BrandingValues};
use url::Url;

/// Input widget the field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Url,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: BrandingField,
    pub label: &'static str,
    pub helper_text: &'static str,
    pub input: InputKind,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        self.field.form_name()
    }
}

pub const FIELDS: [FormField; 4] = [
    FormField {
        field: BrandingField::LogoUrl,
        label: "Logo URL",
        helper_text: "Use an image that's at least 600x600 pixels and less than 1mb in size for better performance.",
        input: InputKind::Text,
    },
    FormField {
        field: BrandingField::LogoAltText,
        label: "Logo Alt Text",
        helper_text: "Add a short description of the logo image to display when the image does not load and also for SEO and accessibility.",
        input: InputKind::Text,
    },
    FormField {
        field: BrandingField::FaviconUrl,
        label: "Favicon URL",
        helper_text: "Use an image with a square aspect ratio that's at least 16x16 pixels in size for better results.",
        input: InputKind::Url,
    },
    FormField {
        field: BrandingField::PrimaryColor,
        label: "Primary Colour",
        helper_text: "The main color that is shown in primary action buttons, hyperlinks, etc.",
        input: InputKind::Text,
    },
];

pub fn form_field(field: BrandingField) -> &'static FormField {
    match field {
        BrandingField::LogoUrl => &FIELDS[0],
        BrandingField::LogoAltText => &FIELDS[1],
        BrandingField::FaviconUrl => &FIELDS[2],
        BrandingField::PrimaryColor => &FIELDS[3],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: BrandingField,
    pub message: String,
}

/// Validate every field; an empty result means the form may be submitted.
pub fn validate(values: &BrandingValues) -> Vec<FieldError> {
    FIELDS
        .iter()
        .filter(|form| form.input == InputKind::Url)
        .filter_map(|form| {
            validate_url(values.get(form.field)).err().map(|message| FieldError {
                field: form.field,
                message,
            })
        })
        .collect()
}

// Accepts absolute http(s)/data URLs and relative references such as
// "favicon.ico" that the console resolves against its own origin.
fn validate_url(raw: &str) -> Result<(), String> {
    if raw.is_empty() {
        return Err("Please enter a URL".to_string());
    }
    if raw.chars().any(char::is_whitespace) {
        return Err("URL must not contain spaces".to_string());
    }
    match Url::parse(raw) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "data" => Ok(()),
            other => Err(format!("Unsupported URL scheme: {other}")),
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(format!("Invalid URL: {e}")),
    }
}
