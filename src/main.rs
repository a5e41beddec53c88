//! dotnet-dap - resolve .NET startup projects for debug adapters
//!
//! Prints launch configurations on stdout for a DAP client to consume.

use clap::Parser;

use dotnet_dap::cli::{Cli, Commands};
use dotnet_dap::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.workspace, &args),
        Commands::Projects(args) => commands::projects::run(cli.workspace, &args),
        Commands::Profile(args) => commands::profile::run(&args),
        Commands::Adapter => commands::adapter::run(cli.workspace),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
