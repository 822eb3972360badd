use reqwest::{redirect, Client};

const APP_USER_AGENT: &str = "HyLauncher/0.1.0";

pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(APP_USER_AGENT).build()
}

/// Client used for artifact downloads. Automatic redirects are disabled so
/// the caller can follow exactly one hop manually.
pub fn build_download_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .redirect(redirect::Policy::none())
        .build()
}
