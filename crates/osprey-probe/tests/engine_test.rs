use osprey_core::{OspreyConfig, Verdict};
use osprey_probe::ProbeEngine;
use osprey_target::{ClassifierRegistry, ResponseSnapshot, SiteList};
use std::path::PathBuf;

fn engine_with_defaults() -> ProbeEngine {
    let mut config = OspreyConfig::default();
    // Point at a path that never exists so no live requests are issued
    config.probe.sites_file = PathBuf::from("/nonexistent/osprey-sites.txt");
    ProbeEngine::new(config)
}

#[tokio::test]
async fn test_invalid_email_fails_soft() {
    let engine = engine_with_defaults();
    let lines = engine.check_email("not-an-email").await.expect("check runs");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("invalid email"));
}

#[tokio::test]
async fn test_invalid_username_fails_soft() {
    let engine = engine_with_defaults();
    let lines = engine.check_username("ab").await.expect("check runs");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("invalid username"));
}

#[tokio::test]
async fn test_username_with_missing_site_list_degrades() {
    let engine = engine_with_defaults();
    let lines = engine
        .check_username("@John_Doe99")
        .await
        .expect("check runs");
    assert_eq!(lines, vec!["no platforms confirmed".to_string()]);
}

#[tokio::test]
async fn test_phone_with_no_variants_is_empty() {
    let engine = engine_with_defaults();
    // Non-digit garbage parses to nothing and yields zero variants
    let lines = engine.check_phone("garbage input").await.expect("check runs");
    assert!(lines.is_empty());
}

#[tokio::test]
async fn test_unclassifiable_input_reports_kind_failure() {
    let engine = engine_with_defaults();
    let lines = engine.check("???").await.expect("check runs");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("could not classify"));
}

#[test]
fn test_registry_verdicts_for_canonical_bodies() {
    let registry = ClassifierRegistry::with_builtin_rules();

    let snapshot = ResponseSnapshot::new(
        "https://odc.officeapps.live.com/odc/emailhrd/getidp",
        200,
        r#"{"IfExistsResult":1}"#,
    );
    let c = registry.classify("Microsoft (officeapps.live)", &snapshot);
    assert_eq!(c.verdict, Verdict::Exists);

    let snapshot = ResponseSnapshot::new(
        "https://example.com/login",
        200,
        "<html>Sorry, user not found</html>",
    );
    let c = registry.classify("DarkwebID (login)", &snapshot);
    assert_eq!(c.verdict, Verdict::Absent);
}

#[test]
fn test_site_list_round_trip() {
    let list = SiteList::from_lines("# header\nhttps://a.example/{}\nhttps://b.example/{}\n");
    let urls = list.expand("John_Doe99");
    assert_eq!(
        urls,
        vec![
            "https://a.example/John_Doe99".to_string(),
            "https://b.example/John_Doe99".to_string(),
        ]
    );
}

// Issues real requests against third-party endpoints; run manually.
#[tokio::test]
#[ignore = "issues live network requests"]
async fn test_live_email_check() {
    let engine = ProbeEngine::new(OspreyConfig::default());
    let lines = engine
        .check_email("someone@example.com")
        .await
        .expect("check runs");
    // One line per configured target, skips included
    assert_eq!(lines.len(), 13);
    for line in &lines {
        println!("{line}");
    }
}
