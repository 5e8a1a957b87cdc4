use bridge_openings::{matching_openings, BidStats, Dealer, UnreachablePointsError, MAX_POINTS};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Deal random hands and report which opening bids they qualify for")]
struct Args {
    /// Number of hands to deal
    #[arg(default_value_t = 1000)]
    total_hands: usize,

    /// Minimum high-card points of every hand
    #[arg(
        default_value_t = 12,
        value_parser = clap::value_parser!(u8).range(..=i64::from(MAX_POINTS))
    )]
    min_points: u8,
}

#[doc = include_str!("README.md")]
fn main() -> Result<(), UnreachablePointsError> {
    env_logger::init();
    let args = Args::parse();

    let mut dealer = Dealer::new(args.min_points)?;
    println!(
        "Generating {} hands, each with PC >= {}.",
        args.total_hands, args.min_points
    );

    let stats = dealer
        .hands(&mut rand::thread_rng())
        .take(args.total_hands)
        .fold(BidStats::new(), |mut stats, hand| {
            stats.record(matching_openings(&hand));
            stats
        });

    log::info!("dealt {} hands", stats.deals());
    println!("Bid distribution:");
    println!("{}", stats.table());
    Ok(())
}
