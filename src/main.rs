mod cli;
mod output;
mod pdf;
mod scan;
mod search;
mod walk;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::warn;
use output::{OutputStyle, Printer};
use search::SearchRequest;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let request = SearchRequest {
        pattern: cli.pattern,
        targets: cli.paths,
        context_chars: cli.context,
        color: cli.color,
        style: OutputStyle::from_name(&cli.out_style),
    };

    if request.color {
        colored::control::set_override(true);
    }

    let stdout = io::stdout();
    let mut printer = Printer::new(BufWriter::new(stdout.lock()), request.style);
    let failures = search::run(&request, &mut printer)?;

    for failure in &failures {
        warn!("{}", failure);
    }

    Ok(())
}
