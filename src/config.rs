use crate::core::Timing;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "codeteria", version, about = "Codeteria landing page in your terminal")]
pub struct Config {
    /// Simulated latency of "Run Code", in milliseconds
    #[arg(long, default_value_t = 1500, value_parser = clap::value_parser!(u64).range(1..))]
    pub run_delay_ms: u64,

    /// Idle time before the playground shows the next snippet, in milliseconds
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub auto_advance_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn timing(&self) -> Timing {
        Timing {
            run_delay: Duration::from_millis(self.run_delay_ms),
            auto_advance: Duration::from_millis(self.auto_advance_ms),
        }
    }
}
