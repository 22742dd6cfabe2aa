pub mod handlers;
pub mod source_list;

use reqwest::blocking::Client;
use scraper::{
    Html,
    Selector,
};

use crate::{
    cards::Card,
    core::{
        http,
        MilimError,
    },
};

use handlers::HandlerRegistry;

/// Fetch one dictionary page and extract whatever cards its layout
/// yields. An unrecognized page is not an error, just zero cards.
pub fn scrape_url(
    client: &Client,
    registry: &HandlerRegistry,
    url: &str,
    additional_tags: &str,
) -> Result<Vec<Card>, MilimError> {
    let body = http::fetch_page(client, url)?;
    let document = Html::parse_document(&body);

    let Some(kind) = page_kind(registry, &document) else {
        println!("No handler found for {}", url);
        return Ok(Vec::new());
    };

    let mut cards = handlers::extract(kind, &document, url);
    for card in &mut cards {
        card.append_tags(additional_tags);
    }
    Ok(cards)
}

fn page_kind(registry: &HandlerRegistry, document: &Html) -> Option<handlers::PageKind> {
    let description_selector = Selector::parse("meta[name=\"description\"]").unwrap();
    document
        .select(&description_selector)
        .filter_map(|meta| meta.value().attr("content"))
        .find_map(|content| registry.dispatch(content))
}
