use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use ampsim::amp::processor::Processor;
use ampsim::io::render::render;
use ampsim::io::wav::{read_wav, write_wav};
use ampsim::params::{ParamId, ParameterStore};
use ampsim::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "ampsim-render")]
#[command(version)]
#[command(about = "Run a WAV file through the amp's gain staging.")]
struct Args {
    #[arg(help = "WAV file to process")]
    input: PathBuf,

    #[arg(help = "Where to write the processed 32-bit float WAV")]
    output: PathBuf,

    #[arg(long, env = "AMPSIM_INPUT_DB", default_value_t = 0.0, help = "Input trim in dB")]
    input_db: f32,

    #[arg(long, env = "AMPSIM_OUTPUT_DB", default_value_t = 0.0, help = "Output trim in dB")]
    output_db: f32,

    #[arg(long, env = "AMPSIM_BLOCK_SIZE", default_value_t = 512, help = "Samples per block")]
    block_size: usize,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let (settings, load_error) = Settings::load_or_default();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_filter))
        .init();

    if let Some(e) = load_error {
        warn!("Failed to load settings, using defaults: {e:#}");
    }

    let args = Args::parse();

    info!("AmpSim render v{}", env!("CARGO_PKG_VERSION"));
    info!("Args: {args:?}");
    info!("Settings:\n{settings}");

    let params = ParameterStore::new();
    params
        .set_by_id(ParamId::Input.id(), args.input_db)
        .context("invalid input trim")?;
    params
        .set_by_id(ParamId::Output.id(), args.output_db)
        .context("invalid output trim")?;

    let mut audio = read_wav(&args.input)?;
    info!(
        "Loaded {} frames, {} channels at {} Hz",
        audio.num_frames(),
        audio.num_channels(),
        audio.sample_rate
    );

    let mut processor = Processor::default().with_ramp_seconds(settings.gain_ramp_seconds());
    let blocks = render(&mut processor, &params, &mut audio, args.block_size)
        .with_context(|| format!("failed to render '{}'", args.input.display()))?;

    write_wav(&args.output, &audio)?;
    info!("Wrote {} ({blocks} blocks)", args.output.display());

    Ok(())
}
