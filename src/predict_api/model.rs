use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Deserialize, Debug)]
pub struct Sentence {
    pub sentence: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Prediction {
    #[serde(rename = "prediction value")]
    pub prediction_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_proba_dict: Option<ProbaDict>,
}

/// Метка -> вероятность. JSON-объект сохраняет порядок вставки.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProbaDict(Vec<(String, f64)>);

impl ProbaDict {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(l, p)| (l.as_str(), *p))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|(_, p)| p)
    }
}

impl FromIterator<(String, f64)> for ProbaDict {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        ProbaDict(iter.into_iter().collect())
    }
}

impl Serialize for ProbaDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(l, p)| (l, p)))
    }
}

impl<'de> Deserialize<'de> for ProbaDict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProbaDictVisitor;

        impl<'de> Visitor<'de> for ProbaDictVisitor {
            type Value = ProbaDict;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    entries.push(entry);
                }
                Ok(ProbaDict(entries))
            }
        }

        deserializer.deserialize_map(ProbaDictVisitor)
    }
}

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}
