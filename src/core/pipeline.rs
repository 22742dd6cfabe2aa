use crate::{
    cards::Card,
    core::{
        http,
        MilimError,
    },
    scrape::{
        self,
        handlers::HandlerRegistry,
        source_list::SourceLine,
    },
};

/// Filters applied to every card regardless of which front-end produced
/// it; per-line filters from the scrape input extend these.
#[derive(Debug, Default, Clone)]
pub struct GlobalFilters {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl GlobalFilters {
    fn for_line(&self, line: &SourceLine) -> (Vec<String>, Vec<String>) {
        let mut include = self.include.clone();
        include.extend(line.include.iter().cloned());
        let mut exclude = self.exclude.clone();
        exclude.extend(line.exclude.iter().cloned());
        (include, exclude)
    }

    pub fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        cards
            .into_iter()
            .filter(|card| card.should_be_saved(&self.include, &self.exclude))
            .collect()
    }
}

/// Walk the URL list, scraping and filtering as we go. A URL that fails
/// to load is reported and skipped; the batch carries on.
pub fn collect_from_source_list(
    lines: &[SourceLine],
    additional_tags: &str,
    filters: &GlobalFilters,
) -> Result<Vec<Card>, MilimError> {
    let client = http::http_client()?;
    let registry = HandlerRegistry::new()?;

    let mut all_cards = Vec::new();
    for line in lines {
        let (include, exclude) = filters.for_line(line);

        http::polite_delay(&line.url);
        let cards = match scrape::scrape_url(&client, &registry, &line.url, additional_tags) {
            Ok(cards) => cards,
            Err(e) => {
                eprintln!("Error reading {}: {}", line.url, e);
                continue;
            }
        };
        println!("{} cards loaded from {}", cards.len(), line.url);

        let kept: Vec<Card> = cards
            .into_iter()
            .filter(|card| card.should_be_saved(&include, &exclude))
            .collect();
        println!("{} cards added", kept.len());
        all_cards.extend(kept);
    }
    Ok(all_cards)
}
