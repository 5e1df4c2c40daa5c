#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use shipgrid::{init_logging, GridState, StandardGrid};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Place a ship at ROW,COL. May be repeated.
    #[arg(long = "ship", value_name = "ROW,COL", value_parser = parse_cell)]
    ships: Vec<(usize, usize)>,
    /// Place this many additional ships on random empty cells.
    #[arg(long, default_value_t = 0)]
    random: usize,
    #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Report whether ROW,COL is occupied after placement. May be repeated.
    #[arg(long = "query", value_name = "ROW,COL", value_parser = parse_cell)]
    queries: Vec<(usize, usize)>,
    /// Print the grid and query results as JSON.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {:?}: {}", col, e))?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut grid = StandardGrid::new();
    for &(row, col) in &cli.ships {
        grid.place_ship(row, col)
            .with_context(|| format!("placing ship at {},{}", row, col))?;
        log::info!("placed ship at {},{}", row, col);
    }

    if cli.random > 0 {
        let mut rng = if let Some(s) = cli.seed {
            log::debug!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        };
        for i in 0..cli.random {
            let (row, col) = grid
                .place_random(&mut rng)
                .with_context(|| format!("placing random ship {} of {}", i + 1, cli.random))?;
            log::info!("placed random ship at {},{}", row, col);
        }
    }

    let mut answers = Vec::with_capacity(cli.queries.len());
    for &(row, col) in &cli.queries {
        let occupied = grid
            .is_occupied(row, col)
            .with_context(|| format!("querying {},{}", row, col))?;
        answers.push((row, col, occupied));
    }
    log::debug!("{} ships on the grid", grid.ship_count());

    if cli.json {
        let queries: Vec<_> = answers
            .iter()
            .map(|&(row, col, occupied)| json!({"row": row, "col": col, "occupied": occupied}))
            .collect();
        let result = json!({
            "grid": GridState::from(&grid),
            "queries": queries,
        });
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", grid);
        for (row, col, occupied) in answers {
            let state = if occupied { "occupied" } else { "empty" };
            println!("{},{}: {}", row, col, state);
        }
    }
    Ok(())
}
