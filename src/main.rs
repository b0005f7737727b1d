use anyhow::Result;
use clap::Parser;
use pasture_core::config::SimConfig;
use pasture_core::game::Game;
use pasture_core::world::TickInput;
use pasture_data::Vec2;

/// Headless driver: runs a seeded session with an autopiloted player and
/// prints the outcome. Useful for profiling, soak-testing, and eyeballing
/// the economy without a renderer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticks to simulate (one tick is one 60 Hz frame)
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// World seed; omit for an entropy-seeded run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Write the final world snapshot as JSON to this path
    #[arg(long)]
    dump: Option<String>,
}

/// Steers the player like a bot would: straight at the nearest pellet.
fn autopilot(snapshot: &pasture_core::WorldSnapshot) -> Vec2 {
    let head = snapshot.creatures[0].segments[0];
    snapshot
        .food
        .iter()
        .map(|f| f.pos)
        .min_by(|a, b| head.distance(*a).total_cmp(&head.distance(*b)))
        .unwrap_or(Vec2::new(snapshot.width / 2.0, snapshot.height / 2.0))
}

fn main() -> Result<()> {
    pasture_core::init_logging();
    let args = Args::parse();

    let mut config = match std::fs::read_to_string(&args.config) {
        Ok(content) => SimConfig::from_toml(&content)?,
        Err(_) => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    tracing::info!(fingerprint = %config.fingerprint(), "Rules loaded");

    let mut game = Game::new(config)?;
    game.start()?;

    let mut target = Vec2::new(0.0, 0.0);
    let mut last = None;
    for _ in 0..args.ticks {
        let input = TickInput {
            target,
            boost: false,
        };
        match game.frame(&input) {
            Some(report) => {
                target = autopilot(&report.snapshot);
                let over = report.ended;
                last = Some(report);
                if let Some(final_score) = over {
                    tracing::info!(final_score, "Player died");
                    break;
                }
            }
            None => break,
        }
    }

    if let Some(report) = last {
        if let Some(path) = &args.dump {
            std::fs::write(path, serde_json::to_string_pretty(&report.snapshot)?)?;
            tracing::info!(path = %path, "Snapshot written");
        }
        println!(
            "tick {}  score {}  high score {}",
            report.snapshot.tick, report.snapshot.score, report.high_score
        );
        for (i, entry) in report.snapshot.leaderboard.iter().enumerate() {
            let marker = if entry.is_player { "*" } else { " " };
            println!("{:>2}. {} {:<12} {}", i + 1, marker, entry.name, entry.score);
        }
    }

    Ok(())
}
