//! CLI argument definitions for nodelint.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nodelint",
    version,
    about = "Run ESLint over Node.js projects in CI",
    long_about = "nodelint provisions the Node.js version a project asks for in package.json, \
                  installs its dependencies, runs the project's ESLint and reports each \
                  finding as a classified issue."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint every project under the working directory
    Run {
        /// Checked-out sources to analyze
        #[arg(long, env = "NODELINT_WORKDIR")]
        workdir: Option<PathBuf>,
        /// Commit being analyzed, used to derive issue ids
        #[arg(long, env = "NODELINT_COMMIT_SHA")]
        commit_sha: String,
        /// Directory for the tool and artifact caches
        #[arg(long, env = "NODELINT_CACHE_DIR")]
        cache_dir: Option<PathBuf>,
    },

    /// Show the constraint groups a version specifier compiles to
    Constraints {
        /// Version specifier, as written in `engines.node`
        spec: String,
    },

    /// Resolve a version specifier against the Node.js release index
    Resolve {
        /// Version specifier, as written in `engines.node`
        spec: String,
        /// Read the release index from a local file
        #[arg(long, conflicts_with = "index_url")]
        index_file: Option<PathBuf>,
        /// Fetch the release index from this URL
        #[arg(long)]
        index_url: Option<String>,
        /// Only consider releases that ship this platform (e.g. linux-x64)
        #[arg(long)]
        platform: Option<String>,
    },

    /// Print the rule classification table
    Rules,
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
