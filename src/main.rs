//! Reclaim - Entry Point
//!
//! A plain-text front-end for the turn engine. All rules live in the
//! library; this binary only invokes engine operations and prints the
//! resulting state.

use clap::Parser;
use std::io::{self, Write};

use reclaim::core::config::GameConfig;
use reclaim::core::error::Result;
use reclaim::core::types::{ActionKind, Faction, HexCoord};
use reclaim::engine::{GameStatus, HistoryKind, TurnEngine};
use reclaim::scenario::{EventScenario, StaticTable};

#[derive(Parser, Debug)]
#[command(name = "reclaim", about = "Turn-based hex strategy about awakening a nation")]
struct Args {
    /// RNG seed; omit for a different campaign every run
    #[arg(long)]
    seed: Option<u64>,

    /// Map radius in hex rings
    #[arg(long)]
    radius: Option<i32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reclaim=info")
        .init();

    let args = Args::parse();

    let mut config = GameConfig::default();
    if let Some(radius) = args.radius {
        config.map_radius = radius;
    }
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut engine = TurnEngine::new(config, seed, Box::new(StaticTable::new()));

    println!("\n=== RECLAIM ===");
    println!("An empire holds your homeland. Wake it, tile by tile.");
    println!();
    println!("Reach {} unity within {} turns to win.", engine.config().win_unity_threshold, engine.config().max_turns);
    println!("Lose if imperial pressure reaches {}.", engine.config().lose_pressure_threshold);
    println!();
    println!("Commands:");
    println!("  start             - Begin the campaign");
    println!("  map               - Show the map");
    println!("  status / s        - Show scores and history");
    println!("  select <q> <r>    - Contest a tile");
    println!("  culture / diplomacy / protest - Choose a response");
    println!("  cancel            - Back out of a scenario");
    println!("  end               - End the turn (income + pressure creep)");
    println!("  fund              - Spend the turn fundraising");
    println!("  dump              - Dump game state as JSON");
    println!("  quit / q          - Exit");
    println!();

    loop {
        print_hud(&engine);

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["quit"] | ["q"] => break,
            ["start"] => {
                if engine.start() {
                    println!("The campaign begins.");
                }
            }
            ["map"] => print_map(&engine),
            ["status"] | ["s"] => print_status(&engine),
            ["select", q, r] => match (q.parse(), r.parse()) {
                (Ok(q), Ok(r)) => {
                    match engine.select_tile(HexCoord::new(q, r)) {
                        Some(scenario) => {
                            let card = render_scenario(scenario);
                            println!("{}", card);
                        }
                        None => println!("Nothing to contest there."),
                    }
                }
                _ => println!("Usage: select <q> <r>"),
            },
            ["culture"] => choose(&mut engine, ActionKind::Culture),
            ["diplomacy"] => choose(&mut engine, ActionKind::Diplomacy),
            ["protest"] => choose(&mut engine, ActionKind::Protest),
            ["cancel"] => {
                engine.cancel_selection();
                println!("Stood down.");
            }
            ["end"] => {
                if engine.end_turn() {
                    println!("The turn passes.");
                }
            }
            ["fund"] => {
                if engine.fundraise() {
                    println!("The community digs deep.");
                }
            }
            ["dump"] => println!("{}", serde_json::to_string_pretty(engine.state())?),
            [] => {}
            _ => println!("Unknown command (try 'status' or 'map')"),
        }

        match engine.state().status {
            GameStatus::Victory => {
                println!("\n*** INDEPENDENCE ACHIEVED ***");
                println!("The world heard your voice; a new chapter of history opens.");
                break;
            }
            GameStatus::Defeat => {
                println!("\n*** THE MOVEMENT IS CRUSHED ***");
                println!("Under the empire's heel the spark goes out, waiting for another wind.");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn choose(engine: &mut TurnEngine, action: ActionKind) {
    match engine.choose_option(action) {
        Some(outcome) => {
            let verdict = if outcome.success { "SUCCESS" } else { "SETBACK" };
            println!("[{}] {}", verdict, outcome.message);
            println!(
                "  unity {:+}, pressure {:+}, resources {:+}",
                outcome.delta.unity, outcome.delta.pressure, outcome.delta.resources
            );
        }
        None => println!("Cannot take that action right now."),
    }
}

fn print_hud(engine: &TurnEngine) {
    let state = engine.state();
    println!(
        "-- turn {}/{} | unity {}/{} | pressure {}/{} | resources {} | territory {} --",
        state.turn,
        engine.config().max_turns,
        state.unity,
        engine.config().win_unity_threshold,
        state.pressure,
        engine.config().lose_pressure_threshold,
        state.resources,
        state.map.player_tile_count()
    );
}

fn print_map(engine: &TurnEngine) {
    let state = engine.state();
    let mut tiles: Vec<_> = state.map.iter().collect();
    tiles.sort_by_key(|t| (t.coord.r, t.coord.q));

    let mut current_row = i32::MIN;
    for tile in tiles {
        if tile.coord.r != current_row {
            current_row = tile.coord.r;
            println!();
        }
        let marker = match (tile.owner, state.selected == Some(tile.coord)) {
            (_, true) => '*',
            (Faction::Player, _) => '#',
            (Faction::Empire, _) => '.',
        };
        print!(
            " {}({:>2},{:>2}){:<9}",
            marker,
            tile.coord.q,
            tile.coord.r,
            tile.terrain.label()
        );
    }
    println!();
    println!("\n  # yours   . imperial   * selected");
}

fn print_status(engine: &TurnEngine) {
    let state = engine.state();
    println!("Status: {:?}", state.status);
    if state.history.is_empty() {
        println!("No major events yet.");
    }
    for entry in &state.history {
        let tag = match entry.kind {
            HistoryKind::Success => "+",
            HistoryKind::Fail => "-",
            HistoryKind::Neutral => " ",
        };
        println!("  [{}] turn {:>2}: {}", tag, entry.turn, entry.text);
    }
}

fn render_scenario(scenario: &EventScenario) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n== {} ==\n", scenario.title));
    out.push_str(&format!("{}\n", scenario.description));
    for option in &scenario.options {
        out.push_str(&format!(
            "  {:<10} {} (cost {}, {:.0}% success)\n",
            option.action.label(),
            option.label,
            option.cost,
            option.success_rate * 100.0
        ));
    }
    out.push_str("Choose with 'culture', 'diplomacy' or 'protest', or 'cancel'.");
    out
}
