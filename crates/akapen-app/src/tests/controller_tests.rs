use std::io::Write;
use std::sync::Arc;

use akapen_config::validator::ValidatorConfig;
use akapen_config::{Config, ResourceRef};
use akapen_core::{BundledResources, Dictionaries};
use akapen_lang_japanese::{DOUBLED_JOSHI_SKIP_LIST, bundled_resources};
use tempfile::NamedTempFile;

use crate::controller::validate_documents;
use crate::output::{Report, write_text};
use crate::state::AppState;

const DOC: &str = "会議\t名詞\nで\t助詞\n東京\t名詞\nと\t助詞\n大阪\t名詞\nと\t助詞\nで\t助詞\n発表\t名詞\n\n\
                   彼\t名詞\nは\t助詞\n走る\t動詞\n";

fn document(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

fn config(validator: ValidatorConfig) -> Config {
    Config {
        validators: vec![validator],
        ..Config::default()
    }
}

#[tokio::test]
async fn test_reports_doubled_particles() {
    let doc = document(DOC);
    let state = Arc::new(AppState::build(config(ValidatorConfig::doubled_joshi())).await.unwrap());

    let reports = validate_documents(state, &[doc.path().to_path_buf()]).await.unwrap();
    let subjects: Vec<&str> = reports.iter().map(|r| r.subject.as_str()).collect();

    assert_eq!(subjects, vec!["で", "と"]);
    assert!(reports.iter().all(|r| r.line == 1));
    assert_eq!(reports[0].message, "Particle \"で\" (格助詞) is used 2 times in one sentence");
    assert_eq!(reports[0].sentence, "会議で東京と大阪とで発表");
}

#[tokio::test]
async fn test_bundled_skip_list_is_merged() {
    let doc = document(DOC);
    let validator =
        ValidatorConfig::doubled_joshi().with_skip_list(ResourceRef::bundled(DOUBLED_JOSHI_SKIP_LIST));
    let state = Arc::new(AppState::build(config(validator)).await.unwrap());

    let reports = validate_documents(state, &[doc.path().to_path_buf()]).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].subject, "で");
}

#[tokio::test]
async fn test_additional_paths_apply_to_every_validator() {
    let doc = document(DOC);
    let skip = document("で\nと\n");

    let mut config = config(ValidatorConfig::doubled_joshi());
    config
        .dictionary
        .additional_paths
        .push(skip.path().to_str().unwrap().to_string());

    let state = Arc::new(AppState::build(config).await.unwrap());
    let reports = validate_documents(state, &[doc.path().to_path_buf()]).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_disabled_dictionaries_ignore_skip_lists() {
    let doc = document(DOC);
    let mut config = config(
        ValidatorConfig::doubled_joshi().with_skip_list(ResourceRef::bundled("ja/does-not-exist.txt")),
    );
    config.dictionary.enabled = false;

    let state = Arc::new(AppState::build(config).await.unwrap());
    let reports = validate_documents(state, &[doc.path().to_path_buf()]).await.unwrap();
    assert_eq!(reports.len(), 2);
}

#[tokio::test]
async fn test_missing_skip_list_fails_startup() {
    let validator =
        ValidatorConfig::doubled_joshi().with_skip_list(ResourceRef::bundled("ja/does-not-exist.txt"));
    let err = AppState::build(config(validator)).await.err().unwrap();

    let chain = format!("{err:#}");
    assert!(chain.contains("failed to configure DoubledJoshi"));
    assert!(chain.contains("ja/does-not-exist.txt"));
}

#[tokio::test]
async fn test_missing_kinds_falls_back_to_plain_messages() {
    let doc = document(DOC);
    let dictionaries = Arc::new(Dictionaries::with_bundled(BundledResources::new()));
    let state = AppState::with_dictionaries(config(ValidatorConfig::doubled_joshi()), dictionaries)
        .await
        .unwrap();

    let reports = validate_documents(Arc::new(state), &[doc.path().to_path_buf()]).await.unwrap();
    assert_eq!(reports[0].message, "Particle \"で\" is used 2 times in one sentence");
}

#[tokio::test]
async fn test_other_language_skips_validator() {
    let doc = document(DOC);
    let mut config = config(ValidatorConfig::doubled_joshi());
    config.language = "en".to_string();

    let state = Arc::new(AppState::build(config).await.unwrap());
    assert!(state.validators.is_empty());
    let reports = validate_documents(state, &[doc.path().to_path_buf()]).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_unknown_validator_is_skipped() {
    let state = AppState::build(config(ValidatorConfig::new("NoSuchRule")))
        .await
        .unwrap();
    assert!(state.validators.is_empty());
}

#[tokio::test]
async fn test_reports_keep_input_order() {
    let first = document(DOC);
    let second = document("は\t助詞\nは\t助詞\n");
    let state = Arc::new(AppState::build(config(ValidatorConfig::doubled_joshi())).await.unwrap());

    let paths = vec![second.path().to_path_buf(), first.path().to_path_buf()];
    let reports = validate_documents(state, &paths).await.unwrap();

    let subjects: Vec<&str> = reports.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["は", "で", "と"]);
    assert_eq!(reports[0].path, paths[0]);
}

#[tokio::test]
async fn test_unreadable_document_is_error() {
    let state = Arc::new(AppState::build(config(ValidatorConfig::doubled_joshi())).await.unwrap());
    let err = validate_documents(state, &["/no/such/doc.tsv".into()])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed to read /no/such/doc.tsv"));
}

#[test]
fn test_write_text_format() {
    let reports = vec![Report {
        path: "doc.tsv".into(),
        line: 4,
        validator: "DoubledJoshi".to_string(),
        subject: "で".to_string(),
        message: "Particle \"で\" is used 2 times in one sentence".to_string(),
        sentence: "でで".to_string(),
    }];

    let mut out = Vec::new();
    write_text(&mut out, &reports).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "doc.tsv:4: [DoubledJoshi] Particle \"で\" is used 2 times in one sentence\n"
    );
}
