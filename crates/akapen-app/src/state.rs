use std::sync::Arc;

use akapen_config::validator::ValidatorConfig;
use akapen_config::{Config, ResourceRef};
use akapen_core::{Dictionaries, Validator, ValidatorAttributes, WordList};
use akapen_lang_japanese::doubled_joshi::{self, SKIP_LIST_ATTRIBUTE};
use akapen_lang_japanese::{DoubledJoshiValidator, JOSHI_KINDS};
use akapen_types::ResourceSource;
use anyhow::Context;

/// A validator together with its resolved attributes
pub struct ConfiguredValidator {
    pub validator: Arc<dyn Validator>,
    pub attributes: ValidatorAttributes,
}

pub struct AppState {
    pub config: Config,
    pub dictionaries: Arc<Dictionaries>,
    /// Validators applicable to `config.language`
    pub validators: Vec<ConfiguredValidator>,
}

impl AppState {
    /// State backed by the bundled Japanese resources
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let dictionaries = Arc::new(Dictionaries::with_bundled(
            akapen_lang_japanese::bundled_resources(),
        ));
        Self::with_dictionaries(config, dictionaries).await
    }

    pub async fn with_dictionaries(
        config: Config,
        dictionaries: Arc<Dictionaries>,
    ) -> anyhow::Result<Self> {
        let mut validators = Vec::new();

        for validator_config in &config.validators {
            let Some(validator) = create_validator(&validator_config.name, &dictionaries).await
            else {
                tracing::warn!("Unknown validator {}, skipping", validator_config.name);
                continue;
            };

            if !validator.supports(&config.language) {
                tracing::info!(
                    "{} does not support language {}, skipping",
                    validator.name(),
                    config.language
                );
                continue;
            }

            let attributes = resolve_attributes(validator_config, &config, &dictionaries)
                .await
                .with_context(|| format!("failed to configure {}", validator_config.name))?;

            validators.push(ConfiguredValidator {
                validator,
                attributes,
            });
        }

        tracing::info!(
            "{} validator(s) enabled for language {}",
            validators.len(),
            config.language
        );

        Ok(Self {
            config,
            dictionaries,
            validators,
        })
    }
}

async fn create_validator(
    name: &str,
    dictionaries: &Arc<Dictionaries>,
) -> Option<Arc<dyn Validator>> {
    match name {
        doubled_joshi::NAME => {
            let dicts = Arc::clone(dictionaries);
            let kinds = tokio::task::spawn_blocking(move || {
                dicts.key_value.get_or_load(JOSHI_KINDS, "joshi kinds")
            })
            .await;

            let validator = match kinds {
                Ok(Ok(kinds)) => DoubledJoshiValidator::with_particle_kinds(kinds),
                Ok(Err(e)) => {
                    tracing::warn!("{e}, reporting particles without their kind");
                    DoubledJoshiValidator::new()
                }
                Err(e) => {
                    tracing::warn!("joshi kinds loader panicked: {e}");
                    DoubledJoshiValidator::new()
                }
            };
            Some(Arc::new(validator))
        }
        _ => None,
    }
}

/// Config attributes plus every configured skip list merged into `list`
async fn resolve_attributes(
    validator_config: &ValidatorConfig,
    config: &Config,
    dictionaries: &Arc<Dictionaries>,
) -> anyhow::Result<ValidatorAttributes> {
    let mut attributes = ValidatorAttributes::from_config(validator_config);

    if !config.dictionary.enabled {
        tracing::debug!("Dictionaries disabled, ignoring skip lists");
        return Ok(attributes);
    }

    let additional = config
        .dictionary
        .additional_paths
        .iter()
        .map(|path| ResourceRef::file(path.clone()));

    for resource in validator_config.skip_lists.iter().cloned().chain(additional) {
        let words = load_word_list(Arc::clone(dictionaries), resource).await?;
        attributes.extend_set(SKIP_LIST_ATTRIBUTE, words.iter().cloned());
    }

    Ok(attributes)
}

/// Load a word list on the blocking pool
pub async fn load_word_list(
    dictionaries: Arc<Dictionaries>,
    resource: ResourceRef,
) -> anyhow::Result<Arc<WordList>> {
    let name = match resource.source {
        ResourceSource::Bundled => "bundled skip list",
        ResourceSource::FileSystem => "skip list",
    };
    let words = tokio::task::spawn_blocking(move || {
        dictionaries
            .word
            .get_or_load_from(&resource.path, resource.source, name)
    })
    .await??;
    Ok(words)
}
