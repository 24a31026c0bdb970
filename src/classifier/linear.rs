use crate::classifier::error::ClassifierError;
use crate::classifier::interface::Classifier;
use crate::classifier::model::{ModelArtifact, Norm};
use crate::utils::funcs::{argmax, l1_norm, l2_norm, softmax};
use regex::Regex;
use std::collections::BTreeMap;

// Слова из двух и более символов, как в токенизаторе обучающего пайплайна
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

pub struct LinearClassifier {
    artifact: ModelArtifact,
    token_re: Regex,
}

impl LinearClassifier {
    pub fn new(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        validate(&artifact)?;
        Ok(LinearClassifier {
            artifact,
            token_re: Regex::new(TOKEN_PATTERN)?,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.artifact.vectorizer.vocabulary.len()
    }

    fn terms(&self, text: &str) -> Vec<String> {
        let vectorizer = &self.artifact.vectorizer;
        let text = if vectorizer.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = self.token_re.find_iter(&text).map(|m| m.as_str()).collect();

        // n-граммы длиннее текста не бывают
        let (min_n, max_n) = vectorizer.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        terms
    }

    /// Разреженный TF-IDF вектор: номер столбца -> вес
    fn features(&self, text: &str) -> BTreeMap<usize, f64> {
        let vectorizer = &self.artifact.vectorizer;

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms(text) {
            if let Some(&column) = vectorizer.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        for (column, value) in counts.iter_mut() {
            let tf = if vectorizer.sublinear_tf {
                1.0 + value.ln()
            } else {
                *value
            };
            *value = tf * vectorizer.idf[*column];
        }

        let norm = match vectorizer.norm {
            Some(Norm::L1) => l1_norm(counts.values().copied()),
            Some(Norm::L2) => l2_norm(counts.values().copied()),
            None => 1.0,
        };
        if norm > 0.0 {
            counts.values_mut().for_each(|v| *v /= norm);
        }

        counts
    }

    fn logits(&self, features: &BTreeMap<usize, f64>) -> Vec<f64> {
        self.artifact
            .coef
            .iter()
            .zip(self.artifact.intercept.iter())
            .map(|(row, &bias)| {
                bias + features
                    .iter()
                    .map(|(&column, &x)| row[column] * x)
                    .sum::<f64>()
            })
            .collect()
    }
}

impl Classifier for LinearClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        let probabilities = self.score(text)?;
        let best = argmax(&probabilities).ok_or(ClassifierError::NonFinite("scores"))?;
        Ok(self.artifact.classes[best].clone())
    }

    fn score(&self, text: &str) -> Result<Vec<f64>, ClassifierError> {
        let logits = self.logits(&self.features(text));
        if logits.iter().any(|l| !l.is_finite()) {
            return Err(ClassifierError::NonFinite("logits"));
        }
        Ok(softmax(&logits))
    }

    fn classes(&self) -> &[String] {
        &self.artifact.classes
    }
}

fn validate(artifact: &ModelArtifact) -> Result<(), ClassifierError> {
    let classes = artifact.classes.len();
    if classes < 2 {
        return Err(ClassifierError::TooFewClasses(classes));
    }

    let vectorizer = &artifact.vectorizer;
    let columns = vectorizer.idf.len();

    let (min_n, max_n) = vectorizer.ngram_range;
    if min_n == 0 || min_n > max_n {
        return Err(ClassifierError::NgramRange(min_n, max_n));
    }

    if let Some((term, &index)) = vectorizer.vocabulary.iter().find(|(_, i)| **i >= columns) {
        return Err(ClassifierError::VocabularyIndex {
            term: term.clone(),
            index,
            len: columns,
        });
    }

    if artifact.coef.len() != classes {
        return Err(ClassifierError::CoefRows {
            rows: artifact.coef.len(),
            classes,
        });
    }
    for (row, weights) in artifact.coef.iter().enumerate() {
        if weights.len() != columns {
            return Err(ClassifierError::CoefColumns {
                row,
                len: weights.len(),
                expected: columns,
            });
        }
    }

    if artifact.intercept.len() != classes {
        return Err(ClassifierError::Intercept {
            len: artifact.intercept.len(),
            expected: classes,
        });
    }

    if vectorizer.idf.iter().any(|v| !v.is_finite()) {
        return Err(ClassifierError::NonFinite("idf"));
    }
    if artifact.coef.iter().flatten().any(|v| !v.is_finite()) {
        return Err(ClassifierError::NonFinite("coef"));
    }
    if artifact.intercept.iter().any(|v| !v.is_finite()) {
        return Err(ClassifierError::NonFinite("intercept"));
    }

    Ok(())
}
