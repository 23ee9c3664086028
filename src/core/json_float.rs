//! Serde helpers for floats that may be infinite
//!
//! JSON has no encoding for infinity, and `serde_json` writes non-finite
//! floats as `null`. Lambda and gamma use ±infinity as meaningful values,
//! so these helpers write them as the strings `"inf"`, `"-inf"` and `"nan"`
//! and read them back. Finite values stay plain numbers.
//!
//! ```ignore
//! #[serde(with = "crate::core::json_float")]
//! pub lambda: f64,
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

impl From<f64> for Repr {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Repr::Number(value)
        } else if value.is_nan() {
            Repr::Text("nan".to_string())
        } else if value > 0.0 {
            Repr::Text("inf".to_string())
        } else {
            Repr::Text("-inf".to_string())
        }
    }
}

impl Repr {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => match s.to_ascii_lowercase().as_str() {
                "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
                "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                _ => Err(E::custom(format!(
                    "expected a number, 'inf', '-inf' or 'nan', got '{}'",
                    s
                ))),
            },
        }
    }
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Repr::from(*value).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Repr::deserialize(deserializer)?.into_f64()
}

/// Same encoding for every element of an `Array1<f64>`, written as a plain
/// JSON list
pub mod array {
    use ndarray::Array1;
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    use super::Repr;

    pub fn serialize<S>(values: &Array1<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for &v in values.iter() {
            seq.serialize_element(&Repr::from(v))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Array1<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Repr>::deserialize(deserializer)?
            .into_iter()
            .map(Repr::into_f64)
            .collect::<Result<Vec<f64>, D::Error>>()
            .map(Array1::from)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super")]
        value: f64,
        #[serde(with = "super::array")]
        values: Array1<f64>,
    }

    #[test]
    fn test_infinite_values_survive_json() {
        let s = Sample {
            value: f64::NEG_INFINITY,
            values: Array1::from(vec![1.5, f64::INFINITY, 0.0]),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"value":"-inf","values":[1.5,"inf",0.0]}"#);

        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_reads_integers_and_rejects_junk() {
        let back: Sample = serde_json::from_str(r#"{"value":3,"values":[]}"#).unwrap();
        assert_eq!(back.value, 3.0);
        assert!(back.values.is_empty());

        assert!(serde_json::from_str::<Sample>(r#"{"value":"big","values":[]}"#).is_err());
    }
}
