//! Artwork lookup for a single release.

use tokio::runtime::Runtime;

use super::AppContext;
use crate::artwork::ArtworkQuery;

/// Run the chain for one artist/release pair and report who answered.
pub fn cmd_artwork(
    rt: &Runtime,
    ctx: &AppContext,
    artist: &str,
    release: &str,
) -> anyhow::Result<()> {
    let query = ArtworkQuery::new(artist, release);
    println!("Searching: {}", query.search_term());
    println!("Providers: {}", ctx.chain.provider_names().join(" → "));
    println!();

    match rt.block_on(ctx.chain.resolve_query(&query)) {
        Some(found) => {
            println!("✓ {}", found.url);
            println!("  from {}", found.provider);
        }
        None => println!("✗ No artwork found, the placeholder would be shown."),
    }
    Ok(())
}
