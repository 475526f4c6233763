use kaku_config::api::ApiConfig;
use kaku_core::{KanjiRecord, KanjiSource, SourceError};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    StatusError {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Deserialize)]
struct KanjiResponse {
    #[serde(default)]
    kun_readings: Vec<String>,
    #[serde(default)]
    on_readings: Vec<String>,
    #[serde(default)]
    meanings: Vec<String>,
}

/// Client for the kanjiapi.dev lookup service
#[derive(Clone)]
pub struct KanjiApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl KanjiApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch one kanji, trimming readings and meanings to the configured maximum
    pub async fn fetch_kanji(&self, symbol: &str) -> Result<KanjiRecord, ApiError> {
        let url = self.config.kanji_url(symbol);
        let response: KanjiResponse = self.get_json(&url).await?;
        let max = self.config.max_items;

        Ok(KanjiRecord {
            symbol: symbol.to_string(),
            on_readings: response.on_readings.into_iter().take(max).collect(),
            kun_readings: response.kun_readings.into_iter().take(max).collect(),
            meanings: filter_meanings(response.meanings, max),
            dictionary_entries: Vec::new(),
        })
    }

    /// Kanji taught in the given school grade
    pub async fn fetch_grade(&self, grade: u8) -> Result<Vec<String>, ApiError> {
        tracing::info!("Fetching kanjis from grade {} list", grade);
        self.get_json(&self.config.grade_url(grade)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::StatusError {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

/// Drop radical and counter glosses, then keep the first `max`
fn filter_meanings(meanings: Vec<String>, max: usize) -> Vec<String> {
    meanings
        .into_iter()
        .filter(|m| !m.contains("radical") && !m.contains("counter"))
        .take(max)
        .collect()
}

#[async_trait::async_trait]
impl KanjiSource for KanjiApiClient {
    /// One request per symbol, in order; the first failure aborts the batch
    async fn lookup(&self, symbols: &[String]) -> Result<Vec<KanjiRecord>, SourceError> {
        let mut records = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            let record = self
                .fetch_kanji(symbol)
                .await
                .map_err(|e| SourceError::Remote {
                    symbol: symbol.clone(),
                    source: Box::new(e),
                })?;
            records.push(record);
        }

        Ok(records)
    }

    fn name(&self) -> &str {
        "kanji API"
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Json, Response};
    use axum::routing::get;
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    async fn kanji_handler(Path(key): Path<String>) -> Response {
        match key.as_str() {
            "grade-1" => Json(json!(["一", "右", "雨"])).into_response(),
            "本" => Json(json!({
                "kanji": "本",
                "kun_readings": ["もと"],
                "on_readings": ["ホン"],
                "meanings": ["book", "present", "main", "origin", "true"]
            }))
            .into_response(),
            "一" => Json(json!({
                "kun_readings": ["ひと-", "ひと.つ", "ひと", "はじめ"],
                "on_readings": ["イチ", "イツ"],
                "meanings": ["one", "one radical (no.1)", "counter for things", "single", "first", "best"]
            }))
            .into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_test_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let app = Router::new().route("/v1/kanji/:key", get(kanji_handler));
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/v1", addr)
    }

    async fn client() -> KanjiApiClient {
        KanjiApiClient::new(ApiConfig {
            api_url: spawn_test_server().await,
            ..Default::default()
        })
    }

    #[test]
    fn test_filter_meanings() {
        let meanings = vec![
            "sun".to_string(),
            "sun radical (no. 72)".to_string(),
            "counter for days".to_string(),
            "day".to_string(),
        ];
        assert_eq!(filter_meanings(meanings, 3), vec!["sun", "day"]);
    }

    #[tokio::test]
    async fn test_fetch_truncates_to_three() {
        let client = client().await;
        let record = client.fetch_kanji("一").await.unwrap();

        assert_eq!(record.symbol, "一");
        assert_eq!(record.kun_readings, vec!["ひと-", "ひと.つ", "ひと"]);
        assert_eq!(record.on_readings, vec!["イチ", "イツ"]);
        assert_eq!(record.meanings, vec!["one", "single", "first"]);
        assert!(record.dictionary_entries.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_keeps_request_order() {
        let client = client().await;
        let symbols = vec!["本".to_string(), "一".to_string(), "本".to_string()];

        let records = client.lookup(&symbols).await.unwrap();
        let found: Vec<_> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(found, vec!["本", "一", "本"]);
    }

    #[tokio::test]
    async fn test_unknown_symbol_fails_batch() {
        let client = client().await;
        let symbols = vec!["本".to_string(), "龘".to_string()];

        let SourceError::Remote { symbol, .. } = client.lookup(&symbols).await.unwrap_err();
        assert_eq!(symbol, "龘");
    }

    #[tokio::test]
    async fn test_fetch_grade() {
        let client = client().await;
        let grade = client.fetch_grade(1).await.unwrap();
        assert_eq!(grade, vec!["一", "右", "雨"]);
    }
}
