use serde::{Deserialize, Serialize};

use crate::branding::BrandingValues;

/// Flattened branding subset persisted by the pet-care backend per organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    pub org: String,
    pub logo_url: String,
    pub logo_alt_text: String,
    pub favicon_url: String,
    pub primary_color: String,
}

impl Personalization {
    pub fn from_branding(org: impl Into<String>, values: &BrandingValues) -> Self {
        Self {
            org: org.into(),
            logo_url: values.logo_url.clone(),
            logo_alt_text: values.logo_alt_text.clone(),
            favicon_url: values.favicon_url.clone(),
            primary_color: values.primary_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_is_camel_case() {
        let values = BrandingValues {
            logo_url: "b.png".into(),
            logo_alt_text: "New logo".into(),
            favicon_url: "g.ico".into(),
            primary_color: "#fff".into(),
        };
        let record = Personalization::from_branding("org-42", &values);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "org": "org-42",
                "logoUrl": "b.png",
                "logoAltText": "New logo",
                "faviconUrl": "g.ico",
                "primaryColor": "#fff"
            })
        );
    }
}
