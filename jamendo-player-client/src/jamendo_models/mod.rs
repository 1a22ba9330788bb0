use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;

use crate::{Error, Result};

pub mod album;
pub mod artist;
pub mod playlist;
pub mod radio;
pub mod track;

/// Every Jamendo endpoint wraps its payload in the same envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Response<T> {
    pub headers: Headers,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headers {
    pub status: String,
    #[serde(default, deserialize_with = "number")]
    pub code: i64,
    #[serde(default, deserialize_with = "string")]
    pub error_message: String,
    #[serde(default, deserialize_with = "number")]
    pub results_count: u32,
}

impl<T> Response<T> {
    pub fn into_results(self) -> Result<Vec<T>> {
        if self.headers.status == "success" {
            Ok(self.results)
        } else {
            Err(Error::Api {
                message: format!(
                    "Jamendo API error: {} (code {})",
                    self.headers.error_message, self.headers.code
                ),
            })
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

/// Jamendo is inconsistent about quoting numbers, `"226"` and `226` both show up.
pub(crate) fn number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(NumberOrString::Number(value)) => Ok(value),
        Some(NumberOrString::String(value)) if value.trim().is_empty() => Ok(T::default()),
        Some(NumberOrString::String(value)) => value
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid number: {value}"))),
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use track::JamendoTrack;

    #[test]
    fn failed_envelope_is_an_api_error() {
        let body = r#"{"headers":{"status":"failed","code":5,"error_message":"Your credential is not authorized.","warnings":"","results_count":0},"results":[]}"#;
        let response: Response<JamendoTrack> = serde_json::from_str(body).unwrap();

        let error = response.into_results().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Jamendo API error: Your credential is not authorized. (code 5)"
        );
    }

    #[test]
    fn quoted_and_bare_numbers_are_both_accepted() {
        let body = r#"{"headers":{"status":"success","code":0,"error_message":"","results_count":"2"},"results":[
            {"id":"1532771","name":"Wish","duration":"226","artist_name":"Yrii","audio":"https://a","album_image":null},
            {"id":168,"name":"Rain","duration":181,"artist_name":"Ona","audio":"https://b","album_image":"https://c"}
        ]}"#;
        let response: Response<JamendoTrack> = serde_json::from_str(body).unwrap();
        assert_eq!(response.headers.results_count, 2);

        let tracks = response.into_results().unwrap();
        assert_eq!(tracks[0].id, 1532771);
        assert_eq!(tracks[0].duration, 226);
        assert_eq!(tracks[0].album_image, "");
        assert_eq!(tracks[1].id, 168);
        assert_eq!(tracks[1].duration, 181);
    }
}
