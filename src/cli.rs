//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::workspace::LanguageServerRoot;

/// dotnet-dap - resolve .NET projects for debug adapters
///
/// Finds the built startup project of a workspace and prints a launch
/// configuration for a .NET debug adapter.
#[derive(Parser, Debug)]
#[command(
    name = "dotnet-dap",
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve .NET startup projects into debug launch configurations",
    long_about = "dotnet-dap finds built .NET startup projects in a workspace, picks the \
                  DLL to debug and derives its environment from launchSettings.json, asking \
                  only when there is more than one candidate. The result is printed as a \
                  launch configuration for a DAP client.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  dotnet-dap resolve\n    \
                  dotnet-dap resolve --configuration Release\n    \
                  dotnet-dap resolve --lsp-root omnisharp=$HOME/src/shop\n    \
                  dotnet-dap projects\n    \
                  dotnet-dap profile src/Api/Properties/launchSettings.json\n    \
                  dotnet-dap adapter"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the project to debug and print its launch configuration
    Resolve(ResolveArgs),

    /// List built startup projects
    Projects(ProjectsArgs),

    /// Show the launch profile derived from a launchSettings.json file
    Profile(ProfileArgs),

    /// Print the debug adapter definition
    Adapter,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by commands that search the workspace
#[derive(Args, Debug, Default, Clone)]
pub struct DiscoveryArgs {
    /// Build configuration to look for under bin/ (default: Debug)
    #[arg(long, short = 'c', value_name = "NAME")]
    pub configuration: Option<String>,

    /// Root reported by an active language server, as NAME=PATH (repeatable)
    #[arg(long = "lsp-root", value_name = "NAME=PATH")]
    pub lsp_roots: Vec<LanguageServerRoot>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve from the current directory:\n    dotnet-dap resolve\n\n\
                  Use the solution root known to the language server:\n    \
                  dotnet-dap resolve --lsp-root omnisharp=/src/shop\n\n\
                  Debug the Release build:\n    dotnet-dap resolve -c Release\n\n\
                  When several candidates exist, a list is shown. Without a terminal the\n\
                  choice number is read from stdin; an empty answer or 0 aborts.")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Print the configuration on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the projects command
#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

/// Arguments for the profile command
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Path to a launchSettings.json file
    pub path: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dotnet-dap completions --shell bash > ~/.bash_completion.d/dotnet-dap\n\n\
                  Generate zsh completions:\n    dotnet-dap completions --shell zsh > ~/.zfunc/_dotnet-dap\n\n\
                  Generate fish completions:\n    dotnet-dap completions --shell fish > ~/.config/fish/completions/dotnet-dap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short)]
    pub shell: String,
}
