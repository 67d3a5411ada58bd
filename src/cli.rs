use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pd-service-sync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "PagerDuty Service Syncer")]
#[command(
    long_about = "Deletes PagerDuty services of staging hive clusters that are no longer \
                  listed by `ocm list clusters --managed`."
)]
pub struct Cli {
    /// PagerDuty API token, or path to a file containing it
    #[arg(
        short = 'a',
        long = "pd_api_token",
        env = "PD_API_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN_OR_FILE"
    )]
    pub pd_api_token: Option<String>,

    /// Escalation policy ID identifying staging clusters [default: PNCPMTV]
    #[arg(short = 'e', long = "escalation_policy", value_name = "POLICY_ID")]
    pub escalation_policy: Option<String>,

    /// Team owning the clusters to delete
    #[arg(short, long, value_name = "TEAM_ID")]
    pub team: Option<String>,

    /// Perform a dry run: log deletions without performing them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }

        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn init_logging(&self) {
        env_logger::Builder::from_default_env()
            .filter_level(self.log_level())
            .init();
    }
}
