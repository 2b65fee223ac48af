//! The chain update command: parse, configure, run the pipeline.

use crate::chain::{BranchChainSpec, Resolver, RunOptions};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::git::repo_root;
use crate::pipeline::ChainUpdate;
use crate::reporter::Reporter;
use crate::vcs::{GitCli, VersionControl};
use tracing::debug;

/// Run the chain update described by `cli`.
///
/// Arguments are validated before any git command runs. Every error is
/// reported through `reporter` before it is returned, so the caller only has
/// to turn it into an exit code.
pub fn cmd_update(cli: &Cli, reporter: &mut dyn Reporter) -> Result<()> {
    let (spec, cli_options) = parse_arguments(cli).map_err(|err| {
        reporter.error(&err, "invalid arguments");
        err
    })?;

    let (vcs, config) = open_repository(cli).map_err(|err| {
        reporter.error(&err, "failed to prepare the repository");
        err
    })?;

    let options = RunOptions {
        update_only: cli_options.update_only || config.update_only,
    };
    debug!(?options, ?config, "starting chain update");

    run_chain(&vcs, reporter, &config, &spec, options)
}

/// Validate the chain argument and run option.
pub fn parse_arguments(cli: &Cli) -> Result<(BranchChainSpec, RunOptions)> {
    let spec = BranchChainSpec::parse(&cli.chain)?;
    let options = RunOptions::from_arg(cli.option.as_deref())?;
    Ok((spec, options))
}

fn open_repository(cli: &Cli) -> Result<(GitCli, Config)> {
    let root = repo_root(&cli.repo)?;
    let config = Config::discover(&root, cli.config.as_deref())?;
    debug!(repo = %root.display(), "opening repository");
    let vcs = GitCli::open(root, config.remote.clone())?;
    Ok((vcs, config))
}

/// Run the pipeline against `vcs` and report a failure with the stage it happened in.
pub fn run_chain(
    vcs: &dyn VersionControl,
    reporter: &mut dyn Reporter,
    config: &Config,
    spec: &BranchChainSpec,
    options: RunOptions,
) -> Result<()> {
    let resolver = Resolver::new(config.ambiguous_match);
    let mut pipeline = ChainUpdate::new(vcs, &mut *reporter, resolver, options);

    match pipeline.run(spec) {
        Ok(_) => Ok(()),
        Err(err) => {
            let context = match pipeline.state().failed_stage() {
                Some(stage) => format!("failed while {}", stage.activity()),
                None => String::new(),
            };
            drop(pipeline);
            reporter.error(&err, &context);
            Err(err)
        }
    }
}
