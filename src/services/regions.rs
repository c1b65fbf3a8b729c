use crate::error::AppError;
use crate::models::RegionsData;
use once_cell::sync::Lazy;

pub struct RegionsService;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("AkashVPN-Desktop/0.1")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("Failed to build reqwest client")
});

static REGIONS_URL: Lazy<String> = Lazy::new(|| {
    std::env::var("AKASH_REGIONS_URL")
        .unwrap_or_else(|_| "https://akashvpn.com/data/akashic-records.json".to_string())
});

impl RegionsService {
    /// One-shot fetch of the region document. Not retried, not cached; the
    /// caller decides what a failure means for the UI.
    pub async fn fetch_regions() -> Result<RegionsData, AppError> {
        let res = CLIENT.get(&*REGIONS_URL).send().await?.error_for_status()?;
        let body = res.text().await?;
        let data: RegionsData = serde_json::from_str(&body)?;
        Ok(data)
    }
}
