//! Run a colony with a fixed seed and print its history

use ant_colony::colony::mortality::DeathSummary;
use ant_colony::colony::simulation::{simulate, RunOptions};
use ant_colony::core::config::SimulationConfig;

fn main() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 ANT COLONY SIMULATION                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = SimulationConfig {
        initial_workers: 15, // Smaller founding crew
        attack_chance: 0.25, // Hostile neighbourhood
        ..Default::default()
    };
    let options = RunOptions {
        name: "Formica".to_string(),
        days: 60,
        seed: 42,
    };

    println!(
        "Founding '{}' with {} workers and {} food",
        options.name, config.initial_workers, config.initial_food
    );
    println!("Simulating {} days...\n", options.days);

    let output = match simulate(config, options) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            return;
        }
    };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  SIMULATION COMPLETE");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("{}", output.summary());
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  POPULATION");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    // Every tenth day keeps the table short
    for day in output.days.iter().filter(|d| d.day % 10 == 0 || d.attacked) {
        println!(
            "Day {:>3}: {:>3} workers, {:>2} soldiers, {:>2} larvae, {:>2} pupae, {:>4} food{}",
            day.day,
            day.workers,
            day.soldiers,
            day.larvae,
            day.pupae,
            day.food,
            if day.attacked { "  << raid" } else { "" }
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  RAIDS");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let events = &output.statistics.events;
    println!(
        "{} raids, {} repelled, {} ants and {} food lost",
        events.attack_events,
        events.successful_defenses,
        events.ants_lost_in_attacks,
        events.food_lost_in_attacks
    );
    for event in &events.recent_events {
        println!("  Day {:>3}: {}", event.day, event.description);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  CAUSES OF DEATH");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let deaths = &output.statistics.death_statistics;
    for (cause, count) in DeathSummary::ranked(&deaths.by_cause) {
        println!("  {:<20} {:>4}", cause, count);
    }

    let first_soldier = output
        .deaths
        .iter()
        .find(|d| d.ant_type == "Soldier")
        .map(|d| d.day);
    if let Some(day) = first_soldier {
        println!("\nFirst soldier fell on day {}", day);
    }
}
