//! Writing site settings form model
//!
//! Holds the state behind the "Writing" settings page: which attributes are
//! read from a site, how edits mark the form dirty, and what a submission has
//! to do besides saving.

mod post_format;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use post_format::PostFormat;

/// Site settings attributes the Writing form reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWritingSettings {
    #[serde(default)]
    pub default_post_format: Option<String>,
    #[serde(default)]
    pub wpcom_publish_posts_with_markdown: Option<bool>,
    #[serde(default)]
    pub markdown_supported: Option<bool>,
    #[serde(default)]
    pub jetpack_testimonial: Option<bool>,
    #[serde(default)]
    pub jetpack_portfolio: Option<bool>,
}

/// The parts of a site the Writing form depends on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    #[serde(default)]
    pub settings: Option<RawWritingSettings>,
    #[serde(default)]
    pub fetching_settings: bool,
    #[serde(default)]
    pub jetpack: bool,
}

/// Resolved site capabilities that gate parts of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingCapabilities {
    /// Custom post types toggle, already resolved by the caller
    pub custom_post_types_enabled: bool,
    /// Jetpack is recent enough to manage custom content types
    pub jetpack_version_supports_custom_types: bool,
    /// The custom content types module is already active
    pub custom_types_module_active: bool,
}

impl WritingCapabilities {
    pub const fn supports_custom_post_types(&self) -> bool {
        self.custom_post_types_enabled && self.jetpack_version_supports_custom_types
    }
}

/// Editable Writing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSettings {
    pub default_post_format: Option<PostFormat>,
    pub wpcom_publish_posts_with_markdown: bool,
    pub markdown_supported: bool,
    pub jetpack_testimonial: Option<bool>,
    pub jetpack_portfolio: Option<bool>,
}

impl WritingSettings {
    fn has_custom_content_type(&self) -> bool {
        self.jetpack_testimonial.unwrap_or(false) || self.jetpack_portfolio.unwrap_or(false)
    }
}

/// Partial change to the custom content type toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPostTypeRevision {
    #[serde(default)]
    pub jetpack_testimonial: Option<bool>,
    #[serde(default)]
    pub jetpack_portfolio: Option<bool>,
}

/// Settings sent to the site on save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WritingPayload {
    pub default_post_format: String,
    pub wpcom_publish_posts_with_markdown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetpack_testimonial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetpack_portfolio: Option<bool>,
}

/// What a submission has to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitPlan {
    pub payload: WritingPayload,
    /// Activate the custom content types module after saving
    pub activate_custom_content_module: bool,
}

/// State of the Writing settings form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WritingForm {
    pub settings: WritingSettings,
    pub fetching_settings: bool,
    pub submitting_form: bool,
    pub dirty: bool,
}

impl Default for WritingForm {
    fn default() -> Self {
        Self::reset()
    }
}

impl WritingForm {
    /// Blank form waiting for site settings.
    pub fn reset() -> Self {
        Self {
            settings: WritingSettings::default(),
            fetching_settings: true,
            submitting_form: false,
            dirty: false,
        }
    }

    /// Load the form from a site.
    ///
    /// Custom content type toggles are only read when the site supports
    /// custom post types.
    pub fn from_site(site: &SiteSnapshot, capabilities: &WritingCapabilities) -> Self {
        let mut settings = WritingSettings::default();

        if let Some(raw) = &site.settings {
            settings.default_post_format =
                raw.default_post_format.as_deref().and_then(|value| {
                    let format = PostFormat::parse(value);
                    if format.is_none() && !value.is_empty() {
                        warn!(value, "ignoring unknown default post format");
                    }
                    format
                });
            settings.wpcom_publish_posts_with_markdown =
                raw.wpcom_publish_posts_with_markdown.unwrap_or(false);
            settings.markdown_supported = raw.markdown_supported.unwrap_or(false);

            if capabilities.supports_custom_post_types() {
                settings.jetpack_testimonial = raw.jetpack_testimonial;
                settings.jetpack_portfolio = raw.jetpack_portfolio;
            }
        }

        Self {
            settings,
            fetching_settings: site.fetching_settings,
            submitting_form: false,
            dirty: false,
        }
    }

    pub fn set_default_post_format(&mut self, format: PostFormat) {
        self.settings.default_post_format = Some(format);
        self.dirty = true;
    }

    pub fn set_markdown(&mut self, enabled: bool) {
        self.settings.wpcom_publish_posts_with_markdown = enabled;
        self.dirty = true;
    }

    /// Apply a partial custom content type change and mark the form dirty.
    pub fn set_custom_post_type_setting(&mut self, revision: CustomPostTypeRevision) {
        if let Some(enabled) = revision.jetpack_testimonial {
            self.settings.jetpack_testimonial = Some(enabled);
        }
        if let Some(enabled) = revision.jetpack_portfolio {
            self.settings.jetpack_portfolio = Some(enabled);
        }
        self.dirty = true;
    }

    pub const fn is_save_disabled(&self) -> bool {
        self.fetching_settings || self.submitting_form
    }

    pub const fn show_markdown_option(&self) -> bool {
        self.settings.markdown_supported
    }

    /// Settings to save, including the custom type toggles when supported.
    pub fn payload(&self, capabilities: &WritingCapabilities) -> WritingPayload {
        let custom_types = capabilities.supports_custom_post_types();
        WritingPayload {
            default_post_format: self
                .settings
                .default_post_format
                .map_or_else(String::new, |format| format.as_str().to_string()),
            wpcom_publish_posts_with_markdown: self.settings.wpcom_publish_posts_with_markdown,
            jetpack_testimonial: self.settings.jetpack_testimonial.filter(|_| custom_types),
            jetpack_portfolio: self.settings.jetpack_portfolio.filter(|_| custom_types),
        }
    }

    /// Start a submission.
    ///
    /// The custom content types module is activated only for Jetpack sites
    /// whose version supports it, when at least one custom type is enabled and
    /// the module is not active yet.
    pub fn submit(&mut self, site: &SiteSnapshot, capabilities: &WritingCapabilities) -> SubmitPlan {
        self.submitting_form = true;

        let activate_custom_content_module = site.jetpack
            && capabilities.jetpack_version_supports_custom_types
            && self.settings.has_custom_content_type()
            && !capabilities.custom_types_module_active;

        SubmitPlan {
            payload: self.payload(capabilities),
            activate_custom_content_module,
        }
    }

    /// Finish a successful save.
    ///
    /// Returns whether post types must be requested again.
    pub fn complete_save(&mut self, capabilities: &WritingCapabilities) -> bool {
        self.submitting_form = false;
        self.dirty = false;
        capabilities.supports_custom_post_types()
    }

    /// Finish a failed save; edits stay pending.
    pub fn fail_save(&mut self) {
        self.submitting_form = false;
    }
}
