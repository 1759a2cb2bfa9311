const DEFAULT_BENEFITS_URL: &str = "https://run.mocky.io/v3/8f75c4b5-ad90-49bb-bc52-f1fc0b4aad02";
const DEFAULT_FILTERS_URL: &str = "https://run.mocky.io/v3/b0ddc735-cfc9-410e-9365-137e04e33fcf";
const DEFAULT_CARDS_URL: &str = "https://run.mocky.io/v3/4654cafa-58d8-4846-9256-79841b29a687";

/// Locations of the three upstream JSON documents.
#[derive(Clone, Debug)]
pub struct Sources {
    pub benefits_url: String,
    pub filters_url: String,
    pub cards_url: String,
}

impl Sources {
    pub fn from_env() -> Self {
        Sources {
            benefits_url: std::env::var("BENEFITS_URL")
                .unwrap_or_else(|_| DEFAULT_BENEFITS_URL.into()),
            filters_url: std::env::var("FILTERS_URL")
                .unwrap_or_else(|_| DEFAULT_FILTERS_URL.into()),
            cards_url: std::env::var("CARDS_URL").unwrap_or_else(|_| DEFAULT_CARDS_URL.into()),
        }
    }
}
