//! The full command surface: registration and execution of every command.

use crate::error::{Error, Result};
use crate::flags::parse_key_value_flags;
use crate::generator::{ArtifactKind, Generator};
use crate::registry::{Action, Command, CommandRegistry};
use rand::RngCore;
use std::process::Command as ProcessCommand;

const MAKE_KINDS: [ArtifactKind; 9] = [
    ArtifactKind::Controller,
    ArtifactKind::Model,
    ArtifactKind::Service,
    ArtifactKind::Validator,
    ArtifactKind::Route,
    ArtifactKind::Middleware,
    ArtifactKind::Test,
    ArtifactKind::Seeder,
    ArtifactKind::Migration,
];

fn make_command(kind: ArtifactKind) -> Command {
    let name = format!("make:{}", kind.suffix());
    let description = match kind {
        ArtifactKind::Migration => "Generate a timestamped migration file".to_string(),
        ArtifactKind::Route => "Generate a route file".to_string(),
        ArtifactKind::Test => "Generate a test file".to_string(),
        _ => format!("Generate a {} class", kind.suffix()),
    };
    let usage = format!("{} <name>", name);
    Command::new(&name, &description, &usage, Action::Make(kind))
}

fn stub_command(name: &str, description: &str, usage: &str, message: &'static str) -> Command {
    Command::new(name, description, usage, Action::Stub { message })
}

/// Builds the registry for one CLI invocation. Registration order is the
/// order of the flat `list` output.
pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    for kind in MAKE_KINDS {
        registry.register(make_command(kind));
    }
    registry.register(Command::new(
        "make:resource",
        "Generate controller, model, service, validator and route",
        "make:resource <name>",
        Action::MakeResource,
    ));

    registry.register(Command::new(
        "list",
        "List all registered commands",
        "list",
        Action::List,
    ));
    registry.register(Command::new(
        "route:list",
        "Show the application route table",
        "route:list",
        Action::RouteList,
    ));

    registry.register(stub_command(
        "db:migrate",
        "Run pending database migrations",
        "db:migrate",
        "Migrations are up to date.",
    ));
    registry.register(Command::new(
        "db:seed",
        "Seed the database",
        "db:seed [name]",
        Action::DbSeed,
    ));
    registry.register(Command::new(
        "db:rollback",
        "Roll back migration batches",
        "db:rollback [steps]",
        Action::DbRollback,
    ));

    registry.register(stub_command(
        "clear:cache",
        "Clear the application cache",
        "clear:cache",
        "Application cache cleared.",
    ));
    registry.register(stub_command(
        "clear:logs",
        "Clear the application log files",
        "clear:logs",
        "Log files cleared.",
    ));
    registry.register(stub_command(
        "config:cache",
        "Cache the application configuration",
        "config:cache",
        "Configuration cached.",
    ));
    registry.register(stub_command(
        "config:clear",
        "Clear the cached configuration",
        "config:clear",
        "Configuration cache cleared.",
    ));

    registry.register(Command::new(
        "serve",
        "Start the development server",
        "serve [--port=P] [--host=H]",
        Action::Serve,
    ));
    registry.register(Command::new(
        "key:generate",
        "Generate a random application secret",
        "key:generate",
        Action::KeyGenerate,
    ));
    registry.register(stub_command(
        "optimize",
        "Optimize the application for production",
        "optimize",
        "Application optimized.",
    ));

    registry
}

fn first_arg(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("")
}

/// Executes a resolved command against its arguments.
///
/// Any error returned here is per-command: the dispatcher reports it and
/// carries on.
pub fn execute(
    registry: &CommandRegistry,
    generator: &Generator,
    command: &Command,
    args: &[String],
) -> Result<()> {
    match &command.action {
        Action::Make(kind) => {
            generator.generate_artifact(*kind, first_arg(args))?;
            Ok(())
        }
        Action::MakeResource => {
            let results = generator.generate_resource(first_arg(args));
            let succeeded = results.iter().filter(|result| result.succeeded()).count();
            println!("Resource generation finished ({}/{} artifacts).", succeeded, results.len());
            Ok(())
        }
        Action::List => {
            registry.print_list();
            Ok(())
        }
        Action::RouteList => {
            print_route_table();
            Ok(())
        }
        Action::Stub { message } => {
            println!("{}", message);
            Ok(())
        }
        Action::DbSeed => {
            match args.first() {
                Some(name) => println!("Seeding database using '{}'...", name),
                None => println!("Seeding database..."),
            }
            println!("Seeding completed.");
            Ok(())
        }
        Action::DbRollback => {
            let steps: u32 = args
                .first()
                .and_then(|value| value.parse().ok())
                .unwrap_or(1);
            println!("Rolled back {} migration batch(es).", steps);
            Ok(())
        }
        Action::Serve => serve(generator, args),
        Action::KeyGenerate => {
            let mut secret = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            println!("Application key: {}", hex::encode(secret));
            Ok(())
        }
    }
}

/// Illustrative route table; not derived from real routes.
fn print_route_table() {
    let rows = [
        ("GET", "/", "HomeController.index"),
        ("GET", "/users", "UserController.index"),
        ("GET", "/users/:id", "UserController.show"),
        ("POST", "/users", "UserController.store"),
        ("PUT", "/users/:id", "UserController.update"),
        ("DELETE", "/users/:id", "UserController.destroy"),
    ];
    println!("{:<8} {:<12} {}", "Method", "Path", "Handler");
    for (method, path, handler) in rows {
        println!("{:<8} {:<12} {}", method, path, handler);
    }
}

/// Launches the configured development command as a blocking foreground
/// process, with host and port exported in the environment.
fn serve(generator: &Generator, args: &[String]) -> Result<()> {
    let config = generator.config();
    let flags = parse_key_value_flags(args);
    let host = flags.get("host").cloned().unwrap_or_else(|| config.host.clone());
    let port = flags.get("port").cloned().unwrap_or_else(|| config.port.to_string());

    let mut parts = config.dev_command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| Error::ConfigError("dev_command is empty".to_string()))?;

    println!("Starting development server at http://{}:{}", host, port);
    let status = ProcessCommand::new(program)
        .args(parts)
        .env("HOST", &host)
        .env("PORT", &port)
        .status()
        .map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::ProcessError(format!(
            "Development server exited with status: {}",
            status
        )));
    }
    Ok(())
}
