use std::path::Path;

use serde::Serialize;
use settings_core::writing::{SiteSnapshot, SubmitPlan, WritingCapabilities, WritingForm};

use crate::commands::common::{decode_input, read_input};
use crate::config::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct WritingReport {
    pub form: WritingForm,
    pub save_disabled: bool,
    pub plan: SubmitPlan,
    pub request_post_types_after_save: bool,
}

pub fn build_writing_report(site: &SiteSnapshot, capabilities: &WritingCapabilities) -> WritingReport {
    let form = WritingForm::from_site(site, capabilities);
    let save_disabled = form.is_save_disabled();
    let mut submitted = form.clone();
    let plan = submitted.submit(site, capabilities);
    let request_post_types_after_save = submitted.complete_save(capabilities);

    WritingReport {
        form,
        save_disabled,
        plan,
        request_post_types_after_save,
    }
}

pub fn format_writing_lines(report: &WritingReport) -> Vec<String> {
    let settings = &report.form.settings;
    let mut lines = vec![format!(
        "default post format: {}",
        settings
            .default_post_format
            .map_or_else(|| "(unset)".to_string(), |format| format!("{format:?}").to_lowercase())
    )];
    if report.form.show_markdown_option() {
        lines.push(format!(
            "markdown for posts: {}",
            settings.wpcom_publish_posts_with_markdown
        ));
    }
    if let Some(enabled) = settings.jetpack_testimonial {
        lines.push(format!("testimonials: {enabled}"));
    }
    if let Some(enabled) = settings.jetpack_portfolio {
        lines.push(format!("portfolio: {enabled}"));
    }
    lines.push(format!("save disabled: {}", report.save_disabled));
    lines.push(format!(
        "activate custom content types: {}",
        report.plan.activate_custom_content_module
    ));
    lines.push(format!(
        "request post types after save: {}",
        report.request_post_types_after_save
    ));
    lines
}

pub fn run_writing(
    path: &Path,
    capabilities: &WritingCapabilities,
    format: OutputFormat,
) -> Result<(), CliError> {
    let raw = read_input(path)?;
    let site = decode_input::<SiteSnapshot>(path, &raw)?;
    let report = build_writing_report(&site, capabilities);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for line in format_writing_lines(&report) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
