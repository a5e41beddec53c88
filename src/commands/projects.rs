//! Projects command implementation
//!
//! Lists the startup projects of a workspace with their framework builds
//! and launch profile, without prompting for anything.

use std::path::{Path, PathBuf};

use console::Style;

use crate::artifacts;
use crate::cli::ProjectsArgs;
use crate::commands::helpers::DiscoveryContext;
use crate::domain::StartupProject;
use crate::error::Result;
use crate::resolver::{Resolver, ResolverSettings};
use crate::selection::{ConsoleNotifier, LinePrompter};

/// Run projects command
pub fn run(workspace: Option<PathBuf>, args: &ProjectsArgs) -> Result<()> {
    let context = DiscoveryContext::new(workspace, &args.discovery)?;

    // Listing never prompts; the prompter only satisfies the builder.
    let prompter = LinePrompter;
    let notifier = ConsoleNotifier;
    let resolver = Resolver::builder()
        .settings(ResolverSettings::from(&context.config))
        .prompter(&prompter)
        .notifier(&notifier)
        .build()?;

    let projects = resolver.startup_projects(&context.root);
    if projects.is_empty() {
        println!(
            "No startup projects found (looked for bin/{} builds under {}).",
            context.config.build_configuration,
            context.root.display()
        );
        return Ok(());
    }

    println!("Startup projects ({}):", projects.len());
    println!();
    for project in &projects {
        display_project(&context.root, project);
        println!();
    }

    Ok(())
}

fn display_project(root: &Path, project: &StartupProject) {
    println!("  {}", Style::new().bold().yellow().apply_to(project.name()));

    let project_file = &project.artifacts.project.project_file_path;
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Project:"),
        project_file.strip_prefix(root).unwrap_or(project_file).display()
    );

    let frameworks: Vec<String> = project
        .artifacts
        .artifact_paths
        .iter()
        .map(|path| artifacts::artifact_label(path))
        .collect();
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Frameworks:"),
        if frameworks.is_empty() {
            "-".to_string()
        } else {
            frameworks.join(", ")
        }
    );

    match &project.profile {
        Some(profile) => println!(
            "    {} {}",
            Style::new().bold().apply_to("Profile:"),
            Style::new().cyan().apply_to(&profile.name)
        ),
        None => println!("    {} -", Style::new().bold().apply_to("Profile:")),
    }
}
