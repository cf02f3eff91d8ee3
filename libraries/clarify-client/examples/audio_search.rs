//! Search bundle transcripts and print each matched bundle's self link,
//! name, and timestamped hit ranges.
//!
//! Usage:
//!
//! ```text
//! CLARIFY_API_KEY=your-key cargo run --example audio_search -- close
//! ```

use clarify_client::{ApiConfig, ClarifyClient, ListOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("CLARIFY_API_KEY")?;
    let query = std::env::args().nth(1).unwrap_or_else(|| "close".to_string());

    let client = ClarifyClient::new(ApiConfig::new(api_key))?;
    let outcome = client.search().search(&query, ListOptions::default()).await?;

    let Some(results) = outcome.results else {
        eprintln!("search failed with status {}", outcome.status);
        return Ok(());
    };

    for (link, item) in results.matched_items() {
        let bundle = client.bundles().load(&link.href).await?;

        if let Some(href) = bundle.links().href("self") {
            println!("{href}");
        }
        println!("{}", bundle.str_field("name").unwrap_or("<unnamed>"));

        for term in &item.term_results {
            for group in &term.matches {
                for hit in &group.hits {
                    println!("{} -- {}", hit.start, hit.end);
                }
            }
        }
    }

    Ok(())
}
