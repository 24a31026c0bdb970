/// Классы эмоций в порядке обучения модели.
/// Вероятности из `Classifier::score` сопоставляются с ними по позиции.
pub const LABELS: [&str; 13] = [
    "anger",
    "boredom",
    "empty",
    "enthusiasm",
    "fun",
    "happiness",
    "hate",
    "love",
    "neutral",
    "relief",
    "sadness",
    "surprise",
    "worry",
];

pub fn matches_labels(classes: &[String]) -> bool {
    classes.len() == LABELS.len() && classes.iter().zip(LABELS).all(|(c, l)| c == l)
}
