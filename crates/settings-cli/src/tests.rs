use std::path::Path;

use pretty_assertions::assert_eq;
use settings_core::recovery::{parse_events, RawSettings, RecoveryStore, Target};
use settings_core::writing::{SiteSnapshot, WritingCapabilities};

use crate::cli::CompletionShell;
use crate::commands::common::{decode_input, format_state_lines, read_input};
use crate::commands::completions::render_completions;
use crate::commands::config::apply_config_init;
use crate::commands::normalize::normalize_settings;
use crate::commands::writing::{build_writing_report, format_writing_lines};
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

const EVENT_LOG: &str = r#"[
    {
        "type": "ACCOUNT_RECOVERY_SETTINGS_FETCH_SUCCESS",
        "settings": {
            "email": false,
            "email_validated": false,
            "phone": {
                "country_code": "1",
                "country_numeric_code": "+1",
                "number": "5551234",
                "number_full": "+15551234"
            },
            "phone_validated": true
        }
    },
    { "type": "ACCOUNT_RECOVERY_SETTINGS_UPDATE", "target": "email" },
    {
        "type": "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS",
        "target": "email",
        "value": "me@example.com"
    },
    { "type": "ACCOUNT_RECOVERY_SETTINGS_DELETE", "target": "phone" }
]"#;

#[test]
fn format_state_lines_for_unfetched_state() {
    let state = RecoveryStore::new().into_state();
    assert_eq!(
        format_state_lines(&state),
        vec![
            "settings: not fetched".to_string(),
            "updating: -".to_string(),
            "deleting: -".to_string(),
            "resending: -".to_string(),
        ]
    );
}

#[test]
fn format_state_lines_after_replay() {
    let events = parse_events(EVENT_LOG).unwrap();
    let mut store = RecoveryStore::new();
    store.replay(&events);
    let state = store.into_state();

    assert!(state.is_deleting.get(&Target::Phone));
    assert_eq!(
        format_state_lines(&state),
        vec![
            "email: me@example.com [not validated]".to_string(),
            "phone: +15551234 (1 +1) [validated]".to_string(),
            "updating: -".to_string(),
            "deleting: phone".to_string(),
            "resending: -".to_string(),
        ]
    );
}

#[test]
fn normalize_settings_maps_false_email_to_empty() {
    let settings: RawSettings =
        serde_json::from_str(r#"{ "email": false, "phone": false, "phone_validated": true }"#)
            .unwrap();
    let normalized = normalize_settings(settings).unwrap();
    assert_eq!(normalized.email, "");
    assert_eq!(normalized.phone, None);
    assert!(normalized.phone_validated);
}

#[test]
fn read_input_reports_missing_file() {
    let error = read_input(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(error, CliError::ReadInput { .. }));
}

#[test]
fn decode_input_reports_path() {
    let error = decode_input::<RawSettings>(Path::new("payload.json"), "[1, 2").unwrap_err();
    assert!(error.to_string().starts_with("Invalid input in payload.json"));
}

#[test]
fn read_and_decode_site_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(
        &path,
        r#"{
            "jetpack": true,
            "settings": {
                "default_post_format": "0",
                "markdown_supported": true,
                "wpcom_publish_posts_with_markdown": true,
                "jetpack_portfolio": true
            }
        }"#,
    )
    .unwrap();

    let raw = read_input(&path).unwrap();
    let site = decode_input::<SiteSnapshot>(&path, &raw).unwrap();
    let capabilities = WritingCapabilities {
        custom_post_types_enabled: true,
        jetpack_version_supports_custom_types: true,
        custom_types_module_active: false,
    };
    let report = build_writing_report(&site, &capabilities);

    assert!(!report.save_disabled);
    assert!(report.plan.activate_custom_content_module);
    assert!(report.request_post_types_after_save);
    assert!(!report.form.submitting_form);
    assert_eq!(
        format_writing_lines(&report),
        vec![
            "default post format: standard".to_string(),
            "markdown for posts: true".to_string(),
            "portfolio: true".to_string(),
            "save disabled: false".to_string(),
            "activate custom content types: true".to_string(),
            "request post types after save: true".to_string(),
        ]
    );
}

#[test]
fn config_init_only_overrides_given_values() {
    let existing = CliConfig {
        version: 1,
        log_filter: Some("settings_core=debug".to_string()),
        output: OutputFormat::Text,
    };
    let updated = apply_config_init(existing, None, Some(OutputFormat::Json));
    assert_eq!(updated.log_filter.as_deref(), Some("settings_core=debug"));
    assert_eq!(updated.output, OutputFormat::Json);
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("site-settings"));
}
