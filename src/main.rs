//! Replay host: runs recorded hand landmarks through a tracking session.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hand_control::{
    app::{HandControlApp, TextSink},
    cli::Args,
    config::Config,
    replay::ReplaySource,
};
use log::info;
use std::sync::atomic::AtomicBool;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Control");

    // Configuration errors are fatal before any frame is processed
    let mut config = match &args.config {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path);
            Config::from_file(config_path).with_context(|| format!("loading {config_path}"))?
        }
        None => Config::default(),
    };
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let Some(replay_path) = &args.replay else {
        bail!("no frame source given; pass --replay <recording.yaml>");
    };
    info!("Replaying recording: {}", replay_path);
    let mut source = ReplaySource::from_file(replay_path).with_context(|| format!("loading {replay_path}"))?;

    let mut app = HandControlApp::new(config)?;
    let mut sink = TextSink::new(std::io::stdout().lock());
    // Never set here: a replay ends with its recording
    let stop = AtomicBool::new(false);
    let stats = app.run(&mut source, &mut sink, &stop)?;

    let (left, right) = app.session().last_output().servo_angles();
    info!(
        "Final control values: left {left:.1}, right {right:.1} after {} frames",
        stats.frames
    );

    Ok(())
}
