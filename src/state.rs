use reqwest::Client;

use crate::config::Sources;

#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub sources: Sources,
}
