use std::{
    thread,
    time::Duration,
};

use rand::Rng;
use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::USER_AGENT,
};

use crate::core::MilimError;

pub fn http_client() -> Result<Client, MilimError> {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| MilimError::Custom(format!("HTTP client build failed: {e}")))
}

/// Sleep a random 1-5 s before each page so the dictionary site never
/// sees a burst of requests.
pub fn polite_delay(url: &str) {
    let seconds = rand::rng().random_range(1..=5u64);
    println!("sleeping {}s before reading {}", seconds, url);
    thread::sleep(Duration::from_secs(seconds));
}

pub fn fetch_page(client: &Client, url: &str) -> Result<String, MilimError> {
    let resp = client.get(url).header(USER_AGENT, "milim/0.2 (+reqwest)").send()?;

    ensure_success(&resp)?;
    Ok(resp.text()?)
}

fn ensure_success(resp: &Response) -> Result<(), MilimError> {
    if !resp.status().is_success() {
        return Err(MilimError::Custom(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
