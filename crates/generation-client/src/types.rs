//! Wire types for the generation backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub concept: &'a str,
}

/// Successful body of `POST /generate`.
///
/// `video_url` is rewritten to an absolute URL by the client before the
/// response is handed out. It is `None` when the backend answered with an
/// explanation only. Missing and `null` text fields decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Informational only; any decodable 2xx body is treated as an answer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    /// Scene source the backend rendered. Not displayed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Whether the backend used a language model or a built-in template.
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_ai: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// One entry of the landing page demo gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoVideo {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Body of `GET /demos`.
#[derive(Debug, Deserialize)]
pub(crate) struct DemoList {
    #[serde(default)]
    pub videos: Vec<DemoVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_shape() {
        let json = serde_json::to_value(GenerateRequest { concept: "limits" }).unwrap();
        assert_eq!(json, serde_json::json!({ "concept": "limits" }));
    }

    #[test]
    fn test_explanation_only_response() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"success":true,"explanation":"Entropy measures disorder.","video_url":null}"#,
        )
        .unwrap();

        assert!(response.video_url.is_none());
        assert_eq!(response.explanation, "Entropy measures disorder.");
        assert!(response.code.is_empty());
        assert!(!response.used_ai);
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"explanation":null,"code":null,"used_ai":null}"#).unwrap();
        assert!(response.explanation.is_empty());
        assert!(response.code.is_empty());
        assert!(!response.success);
    }

    #[test]
    fn test_demo_list_without_videos_key() {
        let list: DemoList = serde_json::from_str("{}").unwrap();
        assert!(list.videos.is_empty());
    }

    #[test]
    fn test_error_body_without_error_key() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert!(body.error.is_none());
    }
}
