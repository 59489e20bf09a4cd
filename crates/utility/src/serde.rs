/// Deserialize `f64` values that providers send either as JSON numbers or as
/// strings (Nominatim returns `"lat": "46.7296"`).
pub mod f64_from_str_or_number {
    use core::fmt;

    use serde::{
        de::{self, Unexpected, Visitor},
        Deserializer, Serializer,
    };

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string containing a number")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .trim()
                .parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Place {
        #[serde(with = "super::f64_from_str_or_number")]
        lat: f64,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let place: Place = serde_json::from_str(r#"{"lat": "46.7296"}"#).unwrap();
        assert_eq!(place.lat, 46.7296);
        let place: Place = serde_json::from_str(r#"{"lat": -94}"#).unwrap();
        assert_eq!(place.lat, -94.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Place>(r#"{"lat": "north"}"#).is_err());
    }
}
