use std::path::{Path, PathBuf};
use std::sync::Arc;

use akapen_types::Sentence;
use tokio::task::JoinSet;

use crate::input::read_document;
use crate::output::Report;
use crate::state::AppState;

/// Validate every document concurrently, reports ordered by input then line
pub async fn validate_documents(
    state: Arc<AppState>,
    paths: &[PathBuf],
) -> anyhow::Result<Vec<Report>> {
    let mut tasks = JoinSet::new();

    for (idx, path) in paths.iter().enumerate() {
        let state = Arc::clone(&state);
        let path = path.clone();

        tasks.spawn(async move {
            let sentences = read_document(&path).await?;
            tracing::debug!("{}: {} sentence(s)", path.display(), sentences.len());

            // Validation is CPU-bound
            let reports =
                tokio::task::spawn_blocking(move || validate_sentences(&state, &path, &sentences))
                    .await?;
            anyhow::Ok((idx, reports))
        });
    }

    let mut results = Vec::with_capacity(paths.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined??);
    }
    results.sort_by_key(|(idx, _)| *idx);

    Ok(results.into_iter().flat_map(|(_, reports)| reports).collect())
}

/// Run all configured validators over the sentences of one document
pub fn validate_sentences(state: &AppState, path: &Path, sentences: &[Sentence]) -> Vec<Report> {
    let mut reports = Vec::new();

    for sentence in sentences {
        for configured in &state.validators {
            for finding in configured.validator.validate(sentence, &configured.attributes) {
                reports.push(Report::new(path.to_path_buf(), &finding));
            }
        }
    }

    reports
}
