//! Command-line arguments for the replay host.

use crate::config::Config;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Replay recorded hand landmarks into control values and toggle states", long_about = None)]
pub struct Args {
    /// Recorded detector output to replay (YAML)
    #[arg(short, long)]
    pub replay: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<String>,

    /// Override the smoothing factor
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Override the toggle cooldown in seconds
    #[arg(long)]
    pub cooldown: Option<f64>,

    /// Override the control value reported before a hand is seen
    #[arg(long)]
    pub neutral: Option<f64>,

    /// Saturate control values at the output range
    #[arg(long)]
    pub clamp: bool,

    /// Mirror landmark x coordinates
    #[arg(long)]
    pub mirror: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(alpha) = self.alpha {
            config.smoothing.alpha = alpha;
        }
        if let Some(cooldown) = self.cooldown {
            config.toggle.cooldown_secs = cooldown;
        }
        if let Some(neutral) = self.neutral {
            config.session.neutral_value = neutral;
        }
        if self.clamp {
            config.mapping.clamp = true;
        }
        if self.mirror {
            config.landmarks.mirror_x = true;
        }
    }
}
