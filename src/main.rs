//! crafter's main application entry point.
//! Parses the command line, wires the configuration, renderer and registry
//! together, and hands the tokens to the dispatcher.

use std::path::Path;

use crafter::{
    cli::{get_args, Args},
    commands::build_registry,
    config::ProjectConfig,
    dispatch::dispatch,
    error::{default_error_handler, Result},
    generator::Generator,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// Per-command and per-artifact failures are handled inside the dispatcher;
/// an error reaching the caller here is fatal and exits non-zero.
fn run(args: Args) -> Result<()> {
    let config = ProjectConfig::load(Path::new("."))?;
    let renderer = Box::new(MiniJinjaRenderer::new());
    let generator = Generator::new(config, renderer);
    let registry = build_registry();

    dispatch(&registry, &generator, &args.tokens)
}
