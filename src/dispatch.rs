//! Command dispatch: resolve a name against the registry and run the
//! handler behind a guard, so a failing command never takes the process
//! down with it.

use crate::commands::execute;
use crate::error::Result;
use crate::generator::Generator;
use crate::registry::CommandRegistry;
use log::error;

/// Dispatches the raw argument tokens (argv minus the program name).
///
/// * Empty input prints the categorized help and succeeds.
/// * An unknown command name is reported with a hint and succeeds.
/// * A handler error is caught, reported with the command name, and the
///   dispatcher still returns `Ok`. Only errors outside this guard are
///   fatal to the process.
pub fn dispatch(
    registry: &CommandRegistry,
    generator: &Generator,
    tokens: &[String],
) -> Result<()> {
    let Some((name, args)) = tokens.split_first() else {
        registry.print_help();
        return Ok(());
    };

    let Some(command) = registry.lookup(name) else {
        eprintln!("Unknown command '{}'. Run 'crafter list' to see all available commands.", name);
        return Ok(());
    };

    if let Err(err) = execute(registry, generator, command, args) {
        error!("Command '{}' failed: {}", name, err);
        eprintln!("Command '{}' failed: {}", name, err);
    }
    Ok(())
}
