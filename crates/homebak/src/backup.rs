//! Backup run orchestration

use anyhow::{Context, Result};
use chrono::Local;
use homebak_core::{get_home_dir, home_prefix, username, BackupConfig};
use homebak_rules::{LocalProbe, RuleKind, RuleSet, TracingLog};
use homebak_transfer::{resolve_tool, Destination, TransferCommand, TransferFlags};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output;

pub fn run(cli: Cli) -> Result<()> {
    info!(
        "homebak initiated on {}",
        Local::now().format("%a %b %e %H:%M:%S %Y")
    );
    debug!("Verbosity level {}", cli.verbose);

    let home = get_home_dir()?;
    let user = username(&home)?;
    let source = home_prefix(&home);
    info!("User: {}", user);
    info!("Source directory: {} (home dir)", source);

    let destination = Destination::resolve(&cli.destination, &user)?;
    if !cli.dry_run && destination.ensure_exists()? {
        info!("Directory '{}' created", destination.target());
    }
    info!("Destination directory: {}", destination.target());

    let program = resolve_tool(&cli.rsync)?;

    let loaded = BackupConfig::load(cli.config.as_deref(), &home)?;
    info!("Configuration: {}", loaded.source);

    let probe = LocalProbe::new(home.clone());
    let rules = RuleSet::assemble(&loaded.config, &home, &probe, &TracingLog)?;

    let command = TransferCommand::new(
        program,
        TransferFlags::new(cli.verbose),
        &rules,
        source.clone(),
        &destination,
    );

    if cli.dry_run {
        output::header("Dry run - nothing will be transferred");
        output::kv("Source", &source);
        output::kv("Destination", destination.target().as_str());
        output::kv(
            "Rules",
            &format!(
                "{} include, {} exclude",
                rules.count(RuleKind::Include),
                rules.count(RuleKind::Exclude)
            ),
        );
        println!("\n{}", command.display());
        return Ok(());
    }

    command
        .run()
        .with_context(|| format!("Backup to {} failed", destination.target()))?;

    output::success(&format!("Backup completed: {}", destination.target()));
    Ok(())
}
