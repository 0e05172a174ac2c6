//! Command dispatch and handler modules.

mod constraints;
mod resolve;
mod rules;
mod run;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            workdir,
            commit_sha,
            cache_dir,
        } => run::exec(workdir, &commit_sha, cache_dir),
        Command::Constraints { spec } => constraints::exec(&spec),
        Command::Resolve {
            spec,
            index_file,
            index_url,
            platform,
        } => resolve::exec(&spec, index_file, index_url, platform),
        Command::Rules => rules::exec(),
    }
}
