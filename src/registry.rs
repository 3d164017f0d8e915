//! Command registry: maps command names to tagged handlers with metadata.
//! The registry is built once per invocation, dispatched against, and
//! discarded; there is no process-wide singleton.

use crate::generator::ArtifactKind;
use indexmap::IndexMap;

/// What a command does when executed. Handlers are tagged data rather than
/// closures so the dispatcher can execute them against shared services and
/// `list` can enumerate the registry without self-referential borrows.
#[derive(Debug, Clone)]
pub enum Action {
    /// Generate a single artifact of the given kind
    Make(ArtifactKind),
    /// Generate the full resource batch
    MakeResource,
    /// Print every registered command
    List,
    /// Print the illustrative route table
    RouteList,
    /// Acknowledge and do nothing else
    Stub { message: &'static str },
    DbSeed,
    DbRollback,
    Serve,
    KeyGenerate,
}

/// One registered command.
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub action: Action,
}

impl Command {
    pub fn new(name: &str, description: &str, usage: &str, action: Action) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            usage: usage.to_string(),
            action,
        }
    }
}

/// Fixed, hand-assigned category table used for the help screen. A command
/// that is registered but not listed here is still reachable and shows up
/// in the flat `list` output; it just has no category.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Make",
        &[
            "make:controller",
            "make:model",
            "make:service",
            "make:validator",
            "make:route",
            "make:middleware",
            "make:test",
            "make:seeder",
            "make:migration",
            "make:resource",
        ],
    ),
    ("Database", &["db:migrate", "db:seed", "db:rollback"]),
    ("Route", &["route:list"]),
    ("Cache", &["clear:cache", "clear:logs", "config:cache", "config:clear"]),
    ("Server", &["serve"]),
    ("Utility", &["list", "key:generate", "optimize"]),
];

/// Registry of all commands for one CLI invocation.
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: IndexMap::new() }
    }

    /// Inserts a command, keyed by name. Registering the same name again
    /// replaces the earlier command; there is no duplicate error.
    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.clone(), command);
    }

    /// Looks a command up by exact name.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Groups registered commands by the static category table, preserving
    /// table order. Uncategorized commands are omitted.
    pub fn categorized(&self) -> Vec<(&'static str, Vec<&Command>)> {
        CATEGORIES
            .iter()
            .map(|(category, names)| {
                let commands =
                    names.iter().filter_map(|name| self.lookup(name)).collect();
                (*category, commands)
            })
            .collect()
    }

    fn usage_column_width(&self) -> usize {
        self.iter().map(|command| command.usage.len()).max().unwrap_or(0)
    }

    /// Prints every registered command with its usage, in registration
    /// order.
    pub fn print_list(&self) {
        let width = self.usage_column_width();
        println!("Available commands:");
        for command in self.iter() {
            println!("  {:<width$}  {}", command.usage, command.description);
        }
    }

    /// Prints the categorized help screen.
    pub fn print_help(&self) {
        println!("crafter {}", env!("CARGO_PKG_VERSION"));
        println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        println!();
        println!("Usage: crafter <command> [arguments]");
        let width = self.usage_column_width();
        for (category, commands) in self.categorized() {
            if commands.is_empty() {
                continue;
            }
            println!();
            println!("{}:", category);
            for command in commands {
                println!("  {:<width$}  {}", command.usage, command.description);
            }
        }
    }
}
