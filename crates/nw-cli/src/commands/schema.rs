use nw_core::ResolutionRecord;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `nwatch schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ResolutionRecord);
    output(&schema, flags.format)
}
