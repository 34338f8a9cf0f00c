use reqwest::Url;
use serde::Deserialize;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Free MyMemory endpoint; no API key required.
pub const DEFAULT_API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Query construction; percent-encoding is done by the URL layer, never
    /// by hand.
    fn request_url(&self, text: &str, from: &str, to: &str) -> Result<Url, TranslateError> {
        let langpair = format!("{from}|{to}");
        Url::parse_with_params(&self.api_url, &[("q", text), ("langpair", langpair.as_str())])
            .map_err(|e| TranslateError::InvalidUrl(e.to_string()))
    }

    fn parse_payload(body: &[u8]) -> Result<String, TranslateError> {
        let decoded: ApiResponse =
            serde_json::from_slice(body).map_err(|_| TranslateError::MalformedResponse)?;

        Ok(unescape_percent(decoded.response_data.translated_text))
    }
}

/// MyMemory normally returns plain text; decode a percent-encoded payload if
/// one shows up, and when decoding fails keep the raw string rather than
/// dropping the result.
fn unescape_percent(text: String) -> String {
    match urlencoding::decode(&text) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => text,
    }
}

#[async_trait::async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        let url = self.request_url(text, from, to)?;

        tracing::debug!("requesting translation {from} -> {to}");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TranslateError::BadStatus(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let translated = Self::parse_payload(&body)?;

        Ok(Translation {
            text: translated,
            from: from.to_string(),
            to: to.to_string(),
            provider: "mymemory".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
