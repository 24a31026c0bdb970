use crate::classifier::interface::Classifier;
use crate::classifier::linear::LinearClassifier;
use crate::classifier::model::ModelArtifact;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Загрузка модели при старте сервиса. Любая ошибка здесь фатальна.
pub fn load(path: &Path) -> Result<LinearClassifier> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(anyhow!("Model file not found at {}.", path.display()));
        }
        Err(e) => return Err(anyhow!("Error loading model: {e}")),
    };

    let classifier = parse(&raw).map_err(|e| anyhow!("Error loading model: {e:#}"))?;

    log::info!(
        "Model loaded successfully! path={}, classes={}, vocabulary={}",
        path.display(),
        classifier.classes().len(),
        classifier.vocabulary_size()
    );

    Ok(classifier)
}

fn parse(raw: &str) -> Result<LinearClassifier> {
    let artifact: ModelArtifact =
        serde_json::from_str(raw).context("cannot parse model artifact")?;
    let classifier = LinearClassifier::new(artifact).context("invalid model artifact")?;
    Ok(classifier)
}
