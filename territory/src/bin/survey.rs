use miette::{miette, Context, IntoDiagnostic};
use territory::{mountain_chain_count, mountain_count, parse_territory, total_valley_area};
use tracing::info;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("usage: survey <grid-file>"))?;
    let text = std::fs::read_to_string(&path)
        .into_diagnostic()
        .with_context(|| format!("reading {path}"))?;

    let territory = parse_territory(&text).context("parsing grid text")?;
    info!(
        "loaded {}x{} territory",
        territory.col_count(),
        territory.row_count()
    );

    println!("{territory}");
    println!();
    println!("mountains:       {}", mountain_count(&territory));
    println!("mountain chains: {}", mountain_chain_count(&territory));
    println!("valley area:     {}", total_valley_area(&territory)?);

    Ok(())
}
