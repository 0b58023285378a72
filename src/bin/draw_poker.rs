use clap::Parser;
use draw_poker::comparator::{HandComparator, HighCardRule};
use draw_poker::deck::Deck;
use draw_poker::hand::Hand;
use draw_poker::search::search_with;

/// Find the best five-card hand reachable by drawing from a replacement deck
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Five held cards, e.g. "th jh qc qd qs"
    #[arg(long)]
    hand: String,

    /// Replacement cards in draw order
    #[arg(long, default_value = "")]
    deck: String,

    /// How two highest-card hands are ranked
    #[arg(long, value_enum, default_value_t = HighCardRule::AceHigh)]
    high_card: HighCardRule,

    /// Also print the chosen hand and the discarded cards
    #[arg(short, long)]
    show_hand: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("draw-poker {}", draw_poker::VERSION);

    let hand: Hand = args.hand.parse()?;
    let deck: Deck = args.deck.parse()?;
    let outcome = search_with(&hand, &deck, &HandComparator::new(args.high_card));

    println!("{}", outcome.category);
    if args.show_hand {
        let discarded: Vec<String> = outcome.discarded.iter().map(ToString::to_string).collect();
        println!("hand: {}", outcome.hand);
        println!("discarded: {}", discarded.join(" "));
    }
    Ok(())
}
