use super::get_json;
use crate::common::{LookError, LookResult};
use crate::model::{HexColor, PALETTE_SIZE};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const SERVICE: &str = "color scheme service";

/// Color-theory rule used to derive a scheme from its seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    Monochrome,
    MonochromeDark,
    MonochromeLight,
    #[default]
    Analogic,
    Complement,
    AnalogicComplement,
    Triad,
    Quad,
}

impl HarmonyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyMode::Monochrome => "monochrome",
            HarmonyMode::MonochromeDark => "monochrome-dark",
            HarmonyMode::MonochromeLight => "monochrome-light",
            HarmonyMode::Analogic => "analogic",
            HarmonyMode::Complement => "complement",
            HarmonyMode::AnalogicComplement => "analogic-complement",
            HarmonyMode::Triad => "triad",
            HarmonyMode::Quad => "quad",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can derive an ordered palette from a seed color.
#[async_trait]
pub trait ColorSchemeSource: Send + Sync {
    /// Returns `count` colors in scheme order.
    ///
    /// # Errors
    ///
    /// [`LookError::ServiceUnavailable`] when the source cannot be reached and
    /// [`LookError::ParseError`] when its answer cannot be read.
    async fn fetch_palette(
        &self,
        seed: HexColor,
        mode: HarmonyMode,
        count: usize,
    ) -> LookResult<Vec<HexColor>>;
}

#[derive(Debug, Deserialize)]
struct SchemeResponse {
    #[serde(default)]
    colors: Vec<SchemeColor>,
}

#[derive(Debug, Deserialize)]
struct SchemeColor {
    hex: SchemeHex,
}

#[derive(Debug, Deserialize)]
struct SchemeHex {
    value: Option<String>,
    clean: Option<String>,
}

/// HTTP client for The Color API `/scheme` endpoint.
#[derive(Debug, Clone)]
pub struct ColorApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ColorApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ColorSchemeSource for ColorApiClient {
    async fn fetch_palette(
        &self,
        seed: HexColor,
        mode: HarmonyMode,
        count: usize,
    ) -> LookResult<Vec<HexColor>> {
        let url = format!("{}/scheme", self.base_url);
        log::debug!("Requesting {count} {mode} colors for seed {seed} from {url}");

        let request = self.client.get(&url).query(&[
            ("hex", seed.hex()),
            ("mode", mode.as_str().to_string()),
            ("count", count.to_string()),
            ("format", "json".to_string()),
        ]);
        let scheme: SchemeResponse = get_json(request, SERVICE).await?;

        if scheme.colors.len() < count {
            return Err(LookError::parse_error(
                SERVICE,
                format!(
                    "expected {count} colors, response had {}",
                    scheme.colors.len()
                ),
            ));
        }

        scheme
            .colors
            .into_iter()
            .take(count)
            .map(|color| {
                let raw = color.hex.clean.or(color.hex.value).ok_or_else(|| {
                    LookError::parse_error(SERVICE, "color entry without a hex value")
                })?;
                raw.parse::<HexColor>()
                    .map_err(|e| LookError::parse_error(SERVICE, e.to_string()))
            })
            .collect()
    }
}

/// Palette fetching as the generator needs it: fixed harmony rule, exactly
/// [`PALETTE_SIZE`] colors, bounded by a deadline.
#[derive(Clone)]
pub struct ColorSchemeService {
    source: Arc<dyn ColorSchemeSource>,
    mode: HarmonyMode,
    timeout: Duration,
}

impl ColorSchemeService {
    pub fn new(source: Arc<dyn ColorSchemeSource>, mode: HarmonyMode, timeout: Duration) -> Self {
        Self {
            source,
            mode,
            timeout,
        }
    }

    pub fn mode(&self) -> HarmonyMode {
        self.mode
    }

    pub async fn fetch_palette(&self, seed: HexColor) -> LookResult<[HexColor; PALETTE_SIZE]> {
        let colors = tokio::time::timeout(
            self.timeout,
            self.source.fetch_palette(seed, self.mode, PALETTE_SIZE),
        )
        .await
        .map_err(|_| LookError::timeout(SERVICE, self.timeout))??;

        let received = colors.len();
        colors.try_into().map_err(|_| {
            LookError::parse_error(
                SERVICE,
                format!("expected {PALETTE_SIZE} colors, source returned {received}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scheme_body(hexes: &[&str]) -> serde_json::Value {
        let colors: Vec<_> = hexes
            .iter()
            .map(|h| json!({"hex": {"value": format!("#{h}"), "clean": h}, "name": {"value": "x"}}))
            .collect();
        json!({"mode": "analogic", "count": hexes.len().to_string(), "colors": colors})
    }

    fn client_for(server: &MockServer) -> ColorApiClient {
        ColorApiClient::new(reqwest::Client::new(), server.uri())
    }

    const SEED: HexColor = HexColor::from_rgb(0xB9, 0x1C, 0x1C);

    #[tokio::test]
    async fn test_fetch_palette_preserves_response_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheme"))
            .and(query_param("hex", "B91C1C"))
            .and(query_param("mode", "analogic"))
            .and(query_param("count", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scheme_body(&[
                "B91C1C", "C0392B", "D35400", "E74C3C", "CB4335",
            ])))
            .mount(&server)
            .await;

        let colors = assert_ok!(
            client_for(&server)
                .fetch_palette(SEED, HarmonyMode::Analogic, 5)
                .await
        );
        let hexes: Vec<_> = colors.iter().map(HexColor::hex).collect();
        assert_eq!(hexes, ["B91C1C", "C0392B", "D35400", "E74C3C", "CB4335"]);
    }

    #[tokio::test]
    async fn test_extra_colors_are_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scheme_body(&[
                "111111", "222222", "333333",
            ])))
            .mount(&server)
            .await;

        let colors = assert_ok!(
            client_for(&server)
                .fetch_palette(SEED, HarmonyMode::Triad, 2)
                .await
        );
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].hex(), "222222");
    }

    #[tokio::test]
    async fn test_too_few_colors_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scheme_body(&["111111"])))
            .mount(&server)
            .await;

        let err = assert_err!(
            client_for(&server)
                .fetch_palette(SEED, HarmonyMode::Analogic, 5)
                .await
        );
        assert_matches!(err, LookError::ParseError { .. });
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = assert_err!(
            client_for(&server)
                .fetch_palette(SEED, HarmonyMode::Analogic, 5)
                .await
        );
        assert_matches!(err, LookError::ParseError { .. });
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = assert_err!(
            client_for(&server)
                .fetch_palette(SEED, HarmonyMode::Analogic, 5)
                .await
        );
        assert_matches!(err, LookError::ServiceUnavailable { .. });
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        let client = ColorApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = assert_err!(client.fetch_palette(SEED, HarmonyMode::Analogic, 5).await);
        assert_matches!(err, LookError::ServiceUnavailable { .. });
    }

    #[tokio::test]
    async fn test_service_times_out_slow_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(scheme_body(&["111111"; 5]))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let service = ColorSchemeService::new(
            Arc::new(client_for(&server)),
            HarmonyMode::Analogic,
            Duration::from_millis(100),
        );
        let err = assert_err!(service.fetch_palette(SEED).await);
        assert_matches!(err, LookError::ServiceUnavailable { .. });
    }

    struct FixedSource(Vec<HexColor>);

    #[async_trait]
    impl ColorSchemeSource for FixedSource {
        async fn fetch_palette(
            &self,
            _seed: HexColor,
            _mode: HarmonyMode,
            _count: usize,
        ) -> LookResult<Vec<HexColor>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_service_reports_configured_mode() {
        let service = ColorSchemeService::new(
            Arc::new(FixedSource(Vec::new())),
            HarmonyMode::Triad,
            Duration::from_secs(1),
        );
        assert_eq!(service.mode(), HarmonyMode::Triad);
    }

    #[tokio::test]
    async fn test_service_rejects_wrong_color_count_from_source() {
        let service = ColorSchemeService::new(
            Arc::new(FixedSource(vec![SEED; 3])),
            HarmonyMode::Analogic,
            Duration::from_secs(1),
        );
        let err = assert_err!(service.fetch_palette(SEED).await);
        assert_matches!(err, LookError::ParseError { .. });
    }
}
