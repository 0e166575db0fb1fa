use nw_config::MonitorConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LanguagesArgs;
use crate::output::output;

/// Handle `nwatch languages`.
pub fn handle(
    args: &LanguagesArgs,
    config: &MonitorConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&config.targets(args.batch.as_deref()), flags.format)
}
