extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate deadhand;

use deadhand::error::{ReportError, SimulationError};
use deadhand::report::Report;
use deadhand::simulation::{self, SimulationInput};
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// Extension of gzip compressed bincode reports
const COMPRESSED_EXTENSION: &str = "deadhand";

#[derive(Debug)]
enum Error {
    Json(serde_json::Error),
    Io(std::io::Error),
    Report(ReportError),
    Simulation(SimulationError),
    Usage,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<ReportError> for Error {
    fn from(error: ReportError) -> Self {
        Self::Report(error)
    }
}

impl From<SimulationError> for Error {
    fn from(error: SimulationError) -> Self {
        Self::Simulation(error)
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == COMPRESSED_EXTENSION)
}

/// Usage:
///   deadhand <input.json> <report.json | report.deadhand>
///   deadhand <report.deadhand> <report.json>
///
/// The first form runs a simulation, the second decodes a compressed report.
fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Expected 2 arguments, input path and output path");
        return Err(Error::Usage);
    }
    let in_path = Path::new(&args[1]);
    let out_path = Path::new(&args[2]);

    let report = if is_compressed(in_path) {
        info!("Decoding compressed report @ {}", in_path.display());
        let mut bytes = Vec::new();
        File::open(in_path)?.read_to_end(&mut bytes)?;
        Report::from_compressed(&bytes)?
    } else {
        info!("Loading simulation input @ {}", in_path.display());
        let mut json_file_contents = String::new();
        File::open(in_path)?.read_to_string(&mut json_file_contents)?;
        let input: SimulationInput = serde_json::from_str(&json_file_contents)?;
        info!(
            "Deck has {} cards in {} entries",
            input.deck.len(),
            input.deck.cards.len()
        );
        simulation::run(&input.deck, &input.config)?
    };

    let mut file = File::create(out_path)?;
    if is_compressed(out_path) {
        info!("Writing compressed report @ {}", out_path.display());
        file.write_all(&report.to_compressed()?)?;
    } else {
        info!("Writing JSON report @ {}", out_path.display());
        serde_json::to_writer_pretty(&mut file, &report)?;
    }
    for row in &report.summary {
        info!("Turn {:>2}: p_dead {:.4}", row.turn, row.p_dead);
    }
    Ok(())
}
