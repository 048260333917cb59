use car_search::{SearchError, SearchFilter, SearchSession};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Search failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SearchError> {
    let filter = SearchFilter::builder()
        .state("pa")
        .city("bellefonte")
        .postal_code("16823")
        .make("ford")
        .max_price(25000)
        .max_mileage(50000)
        .search_radius(500)
        .category("all-cars")
        .build()?;

    let mut session = SearchSession::new(filter)?;
    session.search()?;

    for listing in session.listings() {
        println!("{listing}");
    }

    Ok(())
}
