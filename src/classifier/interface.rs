use crate::classifier::error::ClassifierError;

pub trait Classifier: Send + Sync {
    /// Метка наиболее вероятного класса для текста
    fn classify(&self, text: &str) -> Result<String, ClassifierError>;

    /// Вероятности всех классов, в порядке `classes()`
    fn score(&self, text: &str) -> Result<Vec<f64>, ClassifierError>;

    /// Классы модели в том порядке, в котором она обучалась
    fn classes(&self) -> &[String];
}
