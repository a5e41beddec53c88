//! Resolve command implementation
//!
//! Prints the launch configuration on stdout. A resolution that finds
//! nothing, or that the user cancels, still prints a configuration whose
//! `program` is the abort sentinel; the notice explaining why goes to stderr.

use std::path::PathBuf;

use crate::cli::ResolveArgs;
use crate::commands::helpers::DiscoveryContext;
use crate::error::Result;
use crate::launch::{LaunchConfiguration, LaunchTemplate};
use crate::resolver::{Resolver, ResolverSettings};
use crate::selection::{ConsoleNotifier, default_prompter};

/// Run resolve command
pub fn run(workspace: Option<PathBuf>, args: &ResolveArgs) -> Result<()> {
    let context = DiscoveryContext::new(workspace, &args.discovery)?;
    let configuration = resolve_configuration(&context)?;

    let json = if args.compact {
        serde_json::to_string(&configuration)?
    } else {
        serde_json::to_string_pretty(&configuration)?
    };
    println!("{json}");

    Ok(())
}

/// Resolve the workspace of `context` into a launch configuration
pub fn resolve_configuration(context: &DiscoveryContext) -> Result<LaunchConfiguration> {
    let prompter = default_prompter();
    let notifier = ConsoleNotifier;

    let resolver = Resolver::builder()
        .settings(ResolverSettings::from(&context.config))
        .prompter(prompter.as_ref())
        .notifier(&notifier)
        .build()?;

    let target = resolver.resolve(&context.root)?;
    Ok(LaunchTemplate::from(&context.config).resolve(target))
}
