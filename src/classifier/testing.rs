use crate::classifier::error::ClassifierError;
use crate::classifier::interface::Classifier;
use crate::classifier::linear::LinearClassifier;
use crate::classifier::model::{ModelArtifact, Norm, Vectorizer};
use crate::predict_api::labels::LABELS;
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// Ключевое слово для каждого класса, в порядке `LABELS`
const KEYWORDS: [&str; 13] = [
    "furious",
    "dull",
    "nothing",
    "excited",
    "party",
    "joyful",
    "despise",
    "adore",
    "okay",
    "finally",
    "crying",
    "unexpected",
    "anxious",
];

const NEUTRAL: usize = 8;

/// Маленькая модель: одно слово на класс, `neutral` выигрывает на пустом тексте
pub fn emotion_artifact() -> ModelArtifact {
    let n = LABELS.len();

    let vocabulary: HashMap<String, usize> = KEYWORDS
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_string(), i))
        .collect();

    let coef: Vec<Vec<f64>> = (0..n)
        .map(|class| (0..n).map(|col| if col == class { 4.0 } else { 0.0 }).collect())
        .collect();

    let intercept: Vec<f64> = (0..n)
        .map(|class| if class == NEUTRAL { 0.5 } else { 0.0 })
        .collect();

    ModelArtifact {
        classes: LABELS.iter().map(|l| l.to_string()).collect(),
        vectorizer: Vectorizer {
            vocabulary,
            idf: vec![1.0; n],
            lowercase: true,
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: Some(Norm::L2),
        },
        coef,
        intercept,
    }
}

pub fn write_artifact(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Модель, которая всегда падает при предсказании
pub struct FailingClassifier {
    classes: Vec<String>,
}

impl FailingClassifier {
    pub fn new() -> Self {
        FailingClassifier {
            classes: LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl Classifier for FailingClassifier {
    fn classify(&self, _text: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::NonFinite("logits"))
    }

    fn score(&self, _text: &str) -> Result<Vec<f64>, ClassifierError> {
        Err(ClassifierError::NonFinite("logits"))
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Модель с тремя классами, несовместимая с `LABELS`
pub struct ThreeClassClassifier {
    classes: Vec<String>,
}

impl ThreeClassClassifier {
    pub fn new() -> Self {
        ThreeClassClassifier {
            classes: vec!["negative".into(), "neutral".into(), "positive".into()],
        }
    }
}

impl Classifier for ThreeClassClassifier {
    fn classify(&self, _text: &str) -> Result<String, ClassifierError> {
        Ok("positive".to_string())
    }

    fn score(&self, _text: &str) -> Result<Vec<f64>, ClassifierError> {
        Ok(vec![0.1, 0.2, 0.7])
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Обертка над настоящей моделью, считающая вызовы
pub struct CountingClassifier {
    inner: LinearClassifier,
    calls: AtomicUsize,
}

impl CountingClassifier {
    pub fn new(artifact: ModelArtifact) -> Self {
        CountingClassifier {
            inner: LinearClassifier::new(artifact).unwrap(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Сколько раз модель реально считала распределение
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for CountingClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.classify(text)
    }

    fn score(&self, text: &str) -> Result<Vec<f64>, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.score(text)
    }

    fn classes(&self) -> &[String] {
        self.inner.classes()
    }
}
