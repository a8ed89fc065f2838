// File: core/src/config.rs
// Purpose: Page wiring configuration (element ids, selectors, hover colours)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::effects::HoverPalette;
use crate::form::{CONTACT_FORM, REGISTER_FORM};

/// Site configuration
///
/// Every key is optional; missing keys fall back to the markup the 4Phones
/// pages ship with.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

/// Hover effect configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoverConfig {
    /// CSS selectors whose matches get the hover effect
    #[serde(default = "default_selectors")]
    pub selectors: Vec<String>,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_color")]
    pub color: String,
}

/// Footer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    /// Id of the element that receives the year
    #[serde(default = "default_year_element")]
    pub year_element_id: String,
}

/// Form binding configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormsConfig {
    #[serde(default = "default_register_form")]
    pub register_form_id: String,

    #[serde(default = "default_contact_form")]
    pub contact_form_id: String,

    /// Appended to a field id to find its error element
    #[serde(default = "default_error_suffix")]
    pub error_suffix: String,
}

// Default value functions
fn default_selectors() -> Vec<String> {
    vec![".menu-link".to_string(), "button".to_string(), ".btn".to_string()]
}

fn default_background() -> String {
    HoverPalette::default().background
}

fn default_color() -> String {
    HoverPalette::default().color
}

fn default_year_element() -> String {
    "year".to_string()
}

fn default_register_form() -> String {
    REGISTER_FORM.id.to_string()
}

fn default_contact_form() -> String {
    CONTACT_FORM.id.to_string()
}

fn default_error_suffix() -> String {
    "-err".to_string()
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
            background: default_background(),
            color: default_color(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            year_element_id: default_year_element(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            register_form_id: default_register_form(),
            contact_form_id: default_contact_form(),
            error_suffix: default_error_suffix(),
        }
    }
}

impl HoverConfig {
    pub fn palette(&self) -> HoverPalette {
        HoverPalette {
            background: self.background.clone(),
            color: self.color.clone(),
        }
    }
}

impl FormsConfig {
    /// Id of the element that displays `field_id`'s message
    pub fn error_element_id(&self, field_id: &str) -> String {
        format!("{}{}", field_id, self.error_suffix)
    }
}

impl SiteConfig {
    /// Rejects ids that could never match an element
    pub fn validate(&self) -> Result<()> {
        if self.footer.year_element_id.is_empty() {
            anyhow::bail!("footer.yearElementId must not be empty");
        }
        if self.forms.register_form_id.is_empty() || self.forms.contact_form_id.is_empty() {
            anyhow::bail!("form ids must not be empty");
        }
        Ok(())
    }
}
