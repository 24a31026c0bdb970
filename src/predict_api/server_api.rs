use crate::classifier::interface::Classifier;
use crate::predict_api::labels::{LABELS, matches_labels};
use crate::predict_api::model::{ErrorDetail, Health, Prediction, ProbaDict};
use crate::settings::model::ApiVariant;
use crate::utils::funcs::{argmax, truncate_chars};
use actix_web::HttpResponse;
use anyhow::{Error, anyhow, bail};
use std::sync::Arc;

const LOG_PREVIEW_CHARS: usize = 50;

pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    variant: ApiVariant,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>, variant: ApiVariant) -> Self {
        if !matches_labels(classifier.classes()) {
            log::warn!(
                "model classes {:?} differ from the label set {:?}",
                classifier.classes(),
                LABELS
            );
        }
        Predictor {
            classifier,
            variant,
        }
    }

    pub fn variant(&self) -> ApiVariant {
        self.variant
    }

    pub fn predict(&self, sentence: &str) -> Result<Prediction, Error> {
        match self.variant {
            ApiVariant::V1 => self.predict_label(sentence),
            ApiVariant::V2 => self.predict_with_proba(sentence),
        }
    }

    pub async fn respond(&self, sentence: &str) -> HttpResponse {
        match self.predict(sentence) {
            Ok(prediction) => HttpResponse::Ok().json(prediction),
            Err(e) => {
                log::error!("[{}] prediction failed: {e}", self.variant);
                let err = ErrorDetail {
                    detail: format!("Prediction error: {e}"),
                };
                HttpResponse::InternalServerError().json(err)
            }
        }
    }

    pub fn health(&self) -> Health {
        match self.variant {
            ApiVariant::V1 => Health {
                status: "ok",
                version: None,
            },
            ApiVariant::V2 => Health {
                status: "ok",
                version: Some("debug"),
            },
        }
    }

    fn predict_label(&self, sentence: &str) -> Result<Prediction, Error> {
        log::info!(
            "[v1] Got request: {}...",
            truncate_chars(sentence, LOG_PREVIEW_CHARS)
        );

        let label = self.classifier.classify(sentence)?;

        log::info!("[v1] Returning: {label}");
        Ok(Prediction {
            prediction_value: label,
            prediction_proba_dict: None,
        })
    }

    fn predict_with_proba(&self, sentence: &str) -> Result<Prediction, Error> {
        log::info!("[v2-DEBUG] Processing: '{sentence}'");

        // Метка берется из того же распределения, модель считается один раз
        let probabilities = self.classifier.score(sentence)?;

        if probabilities.len() != LABELS.len() {
            bail!(
                "model returned {} probabilities for {} labels",
                probabilities.len(),
                LABELS.len()
            );
        }

        let best = argmax(&probabilities).ok_or_else(|| anyhow!("model returned no scores"))?;
        let label = self
            .classifier
            .classes()
            .get(best)
            .cloned()
            .ok_or_else(|| anyhow!("model has no class at index {best}"))?;

        let proba_dict: ProbaDict = LABELS
            .iter()
            .map(|l| l.to_string())
            .zip(probabilities)
            .collect();

        let confidence = proba_dict.values().fold(0.0, f64::max);
        log::info!("[v2-DEBUG] Top prediction: {label} with confidence: {confidence:.3}");

        Ok(Prediction {
            prediction_value: label,
            prediction_proba_dict: Some(proba_dict),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::linear::LinearClassifier;
    use crate::classifier::testing::{
        CountingClassifier, FailingClassifier, ThreeClassClassifier, emotion_artifact,
    };

    fn predictor(variant: ApiVariant) -> Predictor {
        let classifier = LinearClassifier::new(emotion_artifact()).unwrap();
        Predictor::new(Arc::new(classifier), variant)
    }

    #[test]
    fn v1_returns_label_only() {
        let p = predictor(ApiVariant::V1).predict("I adore this").unwrap();
        assert_eq!(p.prediction_value, "love");
        assert!(p.prediction_proba_dict.is_none());
    }

    #[test]
    fn v2_returns_full_distribution() {
        let p = predictor(ApiVariant::V2).predict("so anxious").unwrap();
        assert_eq!(p.prediction_value, "worry");

        let dict = p.prediction_proba_dict.unwrap();
        let labels: Vec<&str> = dict.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, LABELS);
        assert!(dict.values().all(|v| (0.0..=1.0).contains(&v)));
        let sum: f64 = dict.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);

        let top = dict.iter().max_by(|a, b| a.1.total_cmp(&b.1)).map(|(l, _)| l);
        assert_eq!(top, Some("worry"));
    }

    #[test]
    fn v2_runs_the_model_once() {
        let counting = Arc::new(CountingClassifier::new(emotion_artifact()));
        let p = Predictor::new(counting.clone(), ApiVariant::V2);

        let prediction = p.predict("despise this").unwrap();
        assert_eq!(prediction.prediction_value, "hate");
        assert_eq!(counting.calls(), 1);
    }

    #[test]
    fn v2_label_matches_v1_label() {
        for text in ["I adore you", "crying again", "", "finally, relief"] {
            let v1 = predictor(ApiVariant::V1).predict(text).unwrap();
            let v2 = predictor(ApiVariant::V2).predict(text).unwrap();
            assert_eq!(v1.prediction_value, v2.prediction_value);
        }
    }

    #[test]
    fn model_failure_is_an_error() {
        let p = Predictor::new(Arc::new(FailingClassifier::new()), ApiVariant::V1);
        let err = p.predict("anything").err().unwrap();
        assert_eq!(err.to_string(), "non-finite values in logits");
    }

    #[test]
    fn label_count_mismatch_is_an_error() {
        let p = Predictor::new(Arc::new(ThreeClassClassifier::new()), ApiVariant::V2);
        let err = p.predict("anything").err().unwrap();
        assert_eq!(err.to_string(), "model returned 3 probabilities for 13 labels");
    }

    #[test]
    fn label_count_mismatch_does_not_affect_v1() {
        let p = Predictor::new(Arc::new(ThreeClassClassifier::new()), ApiVariant::V1);
        assert_eq!(p.predict("anything").unwrap().prediction_value, "positive");
    }

    #[test]
    fn health_per_variant() {
        let v1 = predictor(ApiVariant::V1).health();
        assert_eq!((v1.status, v1.version), ("ok", None));
        let v2 = predictor(ApiVariant::V2).health();
        assert_eq!((v2.status, v2.version), ("ok", Some("debug")));
    }
}
