//! Text rendering of colony state for the terminal and exported files
//!
//! Everything here builds strings; printing is left to the binaries.

use std::path::Path;

use crate::colony::events::TickEvent;
use crate::colony::mortality::{DeathStatistics, DeathSummary};
use crate::colony::nest::Colony;
use crate::colony::output::ColonyStatistics;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Day;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Banner shown before a run, with the configured chances
pub fn welcome_banner(config: &SimulationConfig) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n", rule()));
    s.push_str("              ANT COLONY SIMULATION\n");
    s.push_str(&format!("{}\n", rule()));
    s.push_str("\nThe queen lays eggs\n");
    s.push_str("Workers gather food\n");
    s.push_str("Soldiers guard the colony\n");
    s.push_str("Larvae grow and turn into pupae\n");
    s.push_str(&format!("{}\n", rule()));
    s.push_str("\nConfiguration:\n");
    s.push_str(&format!("  Worker development chance: {:.0}%\n", config.worker_chance * 100.0));
    s.push_str(&format!("  Soldier development chance: {:.0}%\n", config.soldier_chance * 100.0));
    s.push_str(&format!("  Disease chance: {:.0}%\n", config.disease_chance * 100.0));
    s.push_str(&format!("  Injury chance: {:.0}%\n", config.injury_chance * 100.0));
    s.push_str(&format!(
        "  Old age death chance: {:.0}%\n",
        config.old_age_death_chance * 100.0
    ));
    s.push_str("\nRandom events:\n");
    s.push_str(&format!("  Attack chance: {:.0}% per day\n", config.attack_chance * 100.0));
    s.push_str(&format!("  First attack possible on day {}\n", config.min_days_for_attack));
    s.push_str(&rule());
    s
}

/// Heading printed before each simulated day
pub fn day_header(day: Day) -> String {
    let line = "=".repeat(50);
    format!("\n{}\nDay {}\n{}", line, day, line)
}

/// Narrative text for one event
pub fn render_tick_event(event: &TickEvent) -> String {
    match event {
        TickEvent::AttackAnnounced { attacker, threat } => {
            format!("\nEVENT: {} are preparing a {} attack on the colony", attacker, threat.label())
        }
        TickEvent::AttackResolved {
            success,
            message,
            food_lost,
            food_remaining,
            losses,
            soldiers_left,
        } => {
            let mut s = message.clone();
            if *food_lost > 0 {
                s.push_str(&format!("\nFood lost: {}\nFood remaining: {}", food_lost, food_remaining));
            }
            if !losses.is_empty() {
                s.push_str("\nAnts lost:");
                for (ant_type, count) in losses {
                    s.push_str(&format!("\n  {}: {}", ant_type, count));
                }
            }
            if !success || *soldiers_left > 0 {
                s.push_str(&format!("\nSoldiers in the colony: {}", soldiers_left));
            }
            s
        }
        TickEvent::NoDefendersLeft => "WARNING: no soldiers are left to defend the colony!".to_string(),
        TickEvent::WorkerRemoved { cause } => match cause {
            Some(cause) => format!("A worker died (cause: {})", cause),
            None => "A worker died".to_string(),
        },
        TickEvent::FoodCollected { amount, stored } => {
            format!("\nFood gathered: {}. Total in storage: {}", amount, stored)
        }
        TickEvent::QueenFed { amount } => format!("The queen received {} units of food", amount),
        TickEvent::EggsLaid { count, total } => {
            format!("The queen laid {} eggs ({} in total)", count, total)
        }
        TickEvent::LarvaGrew {
            future,
            progress,
            duration,
        } => format!("Larva (future {}) is growing: {}/{}", future, progress, duration),
        TickEvent::LarvaPupated { future } => format!("Larva (future {}) turned into a pupa", future),
        TickEvent::LarvaStarved { future } => format!("Larva (future {}) starved to death", future),
        TickEvent::Hatched { role } => format!("A {} hatched from its pupa!", role),
        TickEvent::DroneLeft => "A drone hatched and left the colony".to_string(),
        TickEvent::HatchSummary { workers, soldiers } => {
            format!("\nHatched: workers={}, soldiers={}", workers, soldiers)
        }
    }
}

/// Deaths recorded on `day`, or `None` when there were none
pub fn daily_deaths(stats: &DeathStatistics, day: Day) -> Option<String> {
    let mut deaths = stats.deaths_on(day).peekable();
    deaths.peek()?;

    let mut s = format!("\nDeaths on day {}:", day);
    for death in deaths {
        s.push_str(&format!(
            "\n  - {}, age {} days: {}",
            death.ant_type, death.age, death.cause
        ));
    }
    Some(s)
}

/// Status block printed at the end of each day
pub fn day_status(colony: &Colony, detailed: bool) -> String {
    let larvae = colony.larva_future_counts();
    let mut s = String::new();

    s.push_str(&format!("\nColony '{}' statistics:\n", colony.name));
    s.push_str(&format!(
        "Queen: health={}, age={}\n",
        colony.queen.health, colony.queen.age
    ));
    s.push_str(&format!("Workers: {}\n", colony.live_workers()));
    s.push_str(&format!("Soldiers: {}\n", colony.live_soldiers()));
    s.push_str(&format!(
        "Larvae: {} (workers={}, soldiers={}, drones={})\n",
        colony.larvae.len(),
        larvae.worker,
        larvae.soldier,
        larvae.drone
    ));
    s.push_str(&format!("Pupae: {}\n", colony.pupae.len()));
    s.push_str(&format!("Food in storage: {}\n", colony.food_storage));
    s.push_str(&format!("Living ants: {}\n", colony.total_ants()));
    s.push_str(&format!("Total deaths: {}", colony.death_stats.total_deaths()));

    let today = colony.events_log.events_for_day(colony.day).count();
    if today > 0 {
        s.push_str(&format!("\nEvents today: {}", today));
    }

    if larvae.worker + larvae.soldier > 0 {
        s.push_str("\n\nNext generation:");
        s.push_str(&format!("\nFuture workers: {}", larvae.worker));
        s.push_str(&format!("\nFuture soldiers: {}", larvae.soldier));
    }

    if detailed {
        if let Some(deaths) = daily_deaths(&colony.death_stats, colony.day) {
            s.push_str(&deaths);
        }
    }
    s
}

/// Mortality breakdown with shares of the total, largest first
pub fn mortality_breakdown(summary: &DeathSummary) -> String {
    if summary.total_deaths == 0 {
        return "Mortality: no deaths".to_string();
    }

    let total = summary.total_deaths;
    let mut s = String::from("\nMORTALITY\n");
    s.push_str(&format!("Total deaths: {}\n", total));

    let sections = [
        ("By cause", &summary.by_cause),
        ("By ant type", &summary.by_type),
        ("By age group", &summary.by_age),
    ];
    for (title, map) in sections {
        s.push_str(&format!("\n  {}:\n", title));
        for (name, count) in DeathSummary::ranked(map) {
            s.push_str(&format!("    - {}: {} ({:.1}%)\n", name, count, percent(count, total)));
        }
    }
    s
}

/// Final report: the queen, mortality and attack totals
pub fn final_statistics(stats: &ColonyStatistics) -> String {
    let mut s = String::new();
    s.push_str(&format!("\n{}\n", rule()));
    s.push_str("FINAL COLONY STATISTICS\n");
    s.push_str(&format!("{}\n", rule()));

    s.push_str(&format!("\nColony: {}\n", stats.name));
    s.push_str(&format!("Days survived: {}\n", stats.day));
    match &stats.queen.death_info {
        Some(info) => s.push_str(&format!("Queen: {}\n", info)),
        None => {
            s.push_str("Queen: alive\n");
            s.push_str(&format!("  - Age: {} days\n", stats.queen.age));
            s.push_str(&format!("  - Health: {}\n", stats.queen.health));
            s.push_str(&format!("  - Eggs laid: {}\n", stats.queen.eggs_laid));
        }
    }

    s.push_str(&mortality_breakdown(&stats.death_statistics));

    let events = &stats.events;
    if events.attack_events > 0 {
        s.push_str("\nColony events:\n");
        s.push_str(&format!("  Attacks on the colony: {}\n", events.attack_events));
        s.push_str(&format!("  Successfully repelled: {}\n", events.successful_defenses));
        s.push_str(&format!("  Ants lost in attacks: {}\n", events.ants_lost_in_attacks));
        s.push_str(&format!("  Food lost in attacks: {}\n", events.food_lost_in_attacks));
    }
    s
}

/// Population totals, mortality rate and remaining resources
pub fn demographics(stats: &ColonyStatistics, config: &SimulationConfig) -> String {
    let population = &stats.population;
    let total_deaths = stats.death_statistics.total_deaths;

    let mut s = String::new();
    s.push_str(&format!("\n{}\n", rule()));
    s.push_str("ADDITIONAL STATISTICS\n");
    s.push_str(&format!("{}\n", rule()));

    s.push_str("\nDemographics:\n");
    s.push_str(&format!("  Ants ever created: {}\n", population.total_ever_created));
    s.push_str(&format!("  Ants at the start: {}\n", config.initial_workers + 1));
    s.push_str(&format!("  Ants at the end: {}\n", population.total_live));
    s.push_str(&format!("  Total deaths: {}\n", total_deaths));
    if population.total_ever_created > 0 {
        s.push_str(&format!(
            "  Mortality rate: {:.1}%\n",
            percent(total_deaths, population.total_ever_created)
        ));
    }

    s.push_str("\nLarvae:\n");
    s.push_str(&format!("  Total larvae: {}\n", population.larvae));
    s.push_str(&format!("  Future workers: {}\n", stats.larva_types.worker));
    s.push_str(&format!("  Future soldiers: {}\n", stats.larva_types.soldier));

    s.push_str("\nResources:\n");
    s.push_str(&format!("  Food left: {}\n", stats.food));

    s.push_str("\nEvents:\n");
    s.push_str(&format!("  Total events: {}\n", stats.events.total_events));
    s.push_str(&format!("  Attacks on the colony: {}\n", stats.events.attack_events));
    s.push_str(&format!("  Successfully repelled: {}", stats.events.successful_defenses));
    s
}

/// Body of the statistics file
pub fn export_text(stats: &ColonyStatistics) -> String {
    let mut s = String::new();
    s.push_str(&format!("Colony '{}' statistics\n", stats.name));
    s.push_str(&format!("{}\n", "=".repeat(50)));
    s.push_str(&format!("Days: {}\n", stats.day));
    s.push_str(&format!("Ants ever created: {}\n", stats.population.total_ever_created));
    s.push_str(&format!("Deaths: {}\n", stats.death_statistics.total_deaths));
    s.push_str(&format!("Food left: {}\n", stats.food));
    s.push_str(&format!("Attacks on the colony: {}\n", stats.events.attack_events));
    s.push_str(&format!("Successfully repelled: {}\n", stats.events.successful_defenses));

    s.push_str("\nCauses of death:\n");
    for (cause, count) in DeathSummary::ranked(&stats.death_statistics.by_cause) {
        s.push_str(&format!("  {}: {}\n", cause, count));
    }

    s.push_str("\nRecent events:\n");
    for event in &stats.events.recent_events {
        s.push_str(&format!("  Day {}: {}\n", event.day, event.description));
    }
    s
}

/// `<name>_statistics.txt`
pub fn export_file_name(colony_name: &str) -> String {
    format!("{}_statistics.txt", colony_name)
}

pub fn write_export(path: &Path, stats: &ColonyStatistics) -> Result<()> {
    std::fs::write(path, export_text(stats))?;
    tracing::info!("Statistics written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::{DeathCause, FutureRole};
    use crate::colony::attack::{Attacker, ThreatLevel};

    fn calm_colony() -> Colony {
        let config = SimulationConfig {
            initial_workers: 3,
            disease_chance: 0.0,
            injury_chance: 0.0,
            attack_chance: 0.0,
            ..Default::default()
        };
        Colony::new("Report", config, 4).unwrap()
    }

    #[test]
    fn test_banner_lists_chances() {
        let banner = welcome_banner(&SimulationConfig::default());
        assert!(banner.contains("Worker development chance: 60%"));
        assert!(banner.contains("Attack chance: 15% per day"));
        assert!(banner.contains("First attack possible on day 5"));
    }

    #[test]
    fn test_every_event_renders() {
        let events = [
            TickEvent::AttackAnnounced {
                attacker: Attacker::Spiders,
                threat: ThreatLevel::Strong,
            },
            TickEvent::NoDefendersLeft,
            TickEvent::FoodCollected { amount: 4, stored: 40 },
            TickEvent::Hatched {
                role: FutureRole::Soldier,
            },
            TickEvent::DroneLeft,
        ];
        for event in &events {
            assert!(!render_tick_event(event).is_empty());
        }
        let announced = render_tick_event(&events[0]);
        assert!(announced.contains("Spiders are preparing a strong attack"));
    }

    #[test]
    fn test_attack_losses_rendered() {
        let line = render_tick_event(&TickEvent::AttackResolved {
            success: false,
            message: "Beetles attack".into(),
            food_lost: 30,
            food_remaining: 70,
            losses: vec![("Worker".into(), 2)],
            soldiers_left: 0,
        });
        assert!(line.contains("Food lost: 30"));
        assert!(line.contains("Worker: 2"));
    }

    #[test]
    fn test_daily_deaths_only_for_that_day() {
        let mut colony = calm_colony();
        colony.day = 2;
        colony.workers[0].die(DeathCause::Disease, 2);
        let dead = colony.workers.remove(0);
        colony.record_deaths([&dead]);

        assert!(daily_deaths(&colony.death_stats, 1).is_none());
        let text = daily_deaths(&colony.death_stats, 2).unwrap();
        assert!(text.contains("Worker, age 0 days: disease"));
        assert!(day_status(&colony, true).contains("Deaths on day 2"));
        assert!(!day_status(&colony, false).contains("Deaths on day 2"));
    }

    #[test]
    fn test_mortality_percentages() {
        let mut colony = calm_colony();
        colony.day = 1;
        for (i, cause) in [DeathCause::Hunger, DeathCause::Hunger, DeathCause::Disease]
            .into_iter()
            .enumerate()
        {
            colony.workers[i].die(cause, 1);
        }
        let dead: Vec<_> = std::mem::take(&mut colony.workers);
        colony.record_deaths(&dead);

        let text = mortality_breakdown(&colony.death_stats.summary());
        assert!(text.contains("hunger: 2 (66.7%)"));
        assert!(text.contains("disease: 1 (33.3%)"));
        assert!(text.find("hunger").unwrap() < text.find("disease").unwrap());
    }

    #[test]
    fn test_no_deaths_message() {
        assert_eq!(mortality_breakdown(&DeathSummary::default()), "Mortality: no deaths");
    }

    #[test]
    fn test_export_round_trip_through_file() {
        let colony = calm_colony();
        let stats = colony.statistics();
        let path = std::env::temp_dir().join(export_file_name("report_test_colony"));

        write_export(&path, &stats).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.starts_with("Colony 'Report' statistics"));
        assert!(written.contains("Causes of death:"));
        assert_eq!(export_file_name("Antlantis"), "Antlantis_statistics.txt");
    }

    #[test]
    fn test_demographics_mortality_rate() {
        let mut colony = calm_colony();
        colony.day = 1;
        colony.workers[0].die(DeathCause::Injury, 1);
        let dead = colony.workers.remove(0);
        colony.record_deaths([&dead]);

        let text = demographics(&colony.statistics(), &colony.config);
        // 3 alive + 1 death
        assert!(text.contains("Ants ever created: 4"));
        assert!(text.contains("Mortality rate: 25.0%"));
    }
}
