use nw_config::MonitorConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod languages;
pub mod run;
pub mod schema;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: &Commands,
    config: &MonitorConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::handle(args, config, flags).await,
        Commands::Languages(args) => languages::handle(args, config, flags),
        Commands::Schema => schema::handle(flags),
    }
}
