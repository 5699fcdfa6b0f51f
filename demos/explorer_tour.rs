//! Explorer Tour
//!
//! Walks through every tab of the explorer home page with logging turned on.
//!
//! Key concepts:
//! - Tabs mount and unmount their views
//! - Each view is its own small state machine
//! - The trivia countdown runs on a tokio interval
//!
//! Run with: RUST_LOG=region_explorer=debug cargo run --example explorer_tour

use rand::SeedableRng;
use region_explorer::views::{Explorer, Tab};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("region_explorer=info")),
        )
        .init();

    println!("=== British Columbia Explorer ===\n");
    let mut explorer = Explorer::with_defaults();

    println!("[{}]", explorer.active_tab());
    if let Some(map) = explorer.regions() {
        match map.select("okanagan") {
            Ok(region) => println!("  Selected {}: {}", region.name, region.facts.join("; ")),
            Err(err) => println!("  {err}"),
        }
    }

    explorer.select_tab(Tab::Facts);
    println!("\n[{}]", explorer.active_tab());
    if let Some(facts) = explorer.facts() {
        facts.select_category("wildlife");
        for card in facts.visible_cards() {
            println!("  {} ({})", card.title, card.category_label);
        }
    }

    explorer.select_tab(Tab::Timeline);
    println!("\n[{}]", explorer.active_tab());
    if let Some(timeline) = explorer.timeline() {
        loop {
            let event = timeline.active_event();
            println!("  {}: {}", event.year, event.title);
            if !timeline.can_go_next() {
                break;
            }
            timeline.go_next();
        }
    }

    explorer.select_tab(Tab::Random);
    println!("\n[{}]", explorer.active_tab());
    let mut rng = rand::rngs::StdRng::seed_from_u64(1871);
    if let Some(fact) = explorer.random().and_then(|random| random.draw(&mut rng)) {
        println!("  {}: {}", fact.title, fact.description);
    }

    explorer.select_tab(Tab::Trivia);
    println!("\n[{}]", explorer.active_tab());
    let Some(trivia) = explorer.trivia() else {
        return;
    };
    if let Err(err) = trivia.start_timer() {
        println!("  Timer failed: {err}");
        return;
    }
    let view = trivia.snapshot();
    println!("  Q{}/{}: {}", view.number, view.total, view.question);

    while trivia.snapshot().answer.is_none() {
        tokio::time::sleep(Duration::from_secs(1)).await;
        println!("  {}s left", trivia.snapshot().seconds_remaining);
    }
    if let Some(answer) = trivia.snapshot().answer {
        println!("  Answer: {answer}");
    }

    explorer.search().set_query("orcas");
    explorer.search().submit();

    println!("\n=== Tour Complete ===");
}
