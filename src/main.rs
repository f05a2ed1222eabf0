use anyhow::{Context, Result};
use podcast_generator::{
    config::{self, Config},
    logging, process, render, HttpProbe,
};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // ─── 1) init logging ─────────────────────────────────────────────
    let log_file = config::log_file_for(args.first().map(String::as_str));
    if let Err(e) = logging::init(&log_file) {
        eprintln!("failed to start logging: {:?}", e);
        return ExitCode::FAILURE;
    }

    std::panic::set_hook(Box::new(|info| {
        error!("panic: {}", info);
    }));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Caught top level error: {:#}", e);
            debug!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    // ─── 2) resolve input/output ─────────────────────────────────────
    let config = Config::resolve(args, |k| std::env::var(k).ok())?;

    // ─── 3) read + validate the sheet ────────────────────────────────
    let data = process::load(&config.input)
        .with_context(|| format!("reading {}", config.input.display()))?;

    // ─── 4) probe audio + write the page ─────────────────────────────
    let probe = HttpProbe::new().context("building HTTP client")?;
    render(&data, &config.output, &probe, &config.audio_base_url)
        .with_context(|| format!("writing {}", config.output.display()))?;

    info!("all done");
    Ok(())
}
