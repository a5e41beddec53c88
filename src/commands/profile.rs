//! Profile command implementation

use crate::cli::ProfileArgs;
use crate::error::Result;
use crate::launch_profile;
use crate::selection::{ConsoleNotifier, Notifier};

/// Parse one launch-settings file and print the derived profile as JSON
pub fn run(args: &ProfileArgs) -> Result<()> {
    match launch_profile::parse(&args.path) {
        Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
        None => ConsoleNotifier.notify(&format!(
            "No \"{}\" launch profile available in {}",
            launch_profile::PROJECT_COMMAND,
            args.path.display()
        )),
    }

    Ok(())
}
