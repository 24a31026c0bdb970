use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    // Artifact validation
    #[error("model has {0} classes, at least 2 are required")]
    TooFewClasses(usize),

    #[error("coef has {rows} rows, expected one per class ({classes})")]
    CoefRows { rows: usize, classes: usize },

    #[error("coef row {row} has {len} columns, expected {expected}")]
    CoefColumns {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("intercept has {len} values, expected {expected}")]
    Intercept { len: usize, expected: usize },

    #[error("vocabulary term '{term}' points at column {index}, but idf has {len} entries")]
    VocabularyIndex {
        term: String,
        index: usize,
        len: usize,
    },

    #[error("invalid ngram_range ({0}, {1})")]
    NgramRange(usize, usize),

    // Inference
    #[error("non-finite values in {0}")]
    NonFinite(&'static str),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
