//! Artifact generation.
//! Turns a resource name into one or more rendered source files, one
//! template render and one write per artifact.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::naming::NamingContext;
use crate::renderer::TemplateRenderer;
use crate::writer;
use chrono::Utc;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Every artifact kind crafter knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Model,
    Service,
    Validator,
    Route,
    Middleware,
    Test,
    Seeder,
    Migration,
}

/// The fixed subset generated by `make:resource`. Test, seeder and
/// migration artifacts are only reachable through their own commands.
pub const RESOURCE_KINDS: [ArtifactKind; 5] = [
    ArtifactKind::Controller,
    ArtifactKind::Model,
    ArtifactKind::Service,
    ArtifactKind::Validator,
    ArtifactKind::Route,
];

impl ArtifactKind {
    /// Human-readable label, used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Model => "Model",
            ArtifactKind::Service => "Service",
            ArtifactKind::Validator => "Validator",
            ArtifactKind::Route => "Route",
            ArtifactKind::Middleware => "Middleware",
            ArtifactKind::Test => "Test",
            ArtifactKind::Seeder => "Seeder",
            ArtifactKind::Migration => "Migration",
        }
    }

    /// The kind segment of generated file names.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Model => "model",
            ArtifactKind::Service => "service",
            ArtifactKind::Validator => "validator",
            ArtifactKind::Route => "route",
            ArtifactKind::Middleware => "middleware",
            ArtifactKind::Test => "test",
            ArtifactKind::Seeder => "seeder",
            ArtifactKind::Migration => "migration",
        }
    }

    /// Template file name inside the templates directory.
    pub fn template_file(&self) -> String {
        format!("{}.ts.j2", self.suffix())
    }

    /// Output directory for this kind, as configured.
    pub fn output_dir<'a>(&self, config: &'a ProjectConfig) -> &'a Path {
        match self {
            ArtifactKind::Controller => &config.controllers_dir,
            ArtifactKind::Model => &config.models_dir,
            ArtifactKind::Service => &config.services_dir,
            ArtifactKind::Validator => &config.validators_dir,
            ArtifactKind::Route => &config.routes_dir,
            ArtifactKind::Middleware => &config.middlewares_dir,
            ArtifactKind::Test => &config.tests_dir,
            ArtifactKind::Seeder => &config.seeders_dir,
            ArtifactKind::Migration => &config.migrations_dir,
        }
    }

    /// Output file name for this kind. Migrations carry a timestamp prefix
    /// so they sort chronologically; everything else is
    /// `<stem>.<kind>.ts`.
    pub fn output_file_name(&self, context: &NamingContext) -> String {
        match self {
            ArtifactKind::Migration => {
                let timestamp = context.timestamp.as_deref().unwrap_or_default();
                format!("{}_{}.ts", timestamp, context.class_name_lower_case)
            }
            _ => format!("{}.{}.ts", context.class_name_lower_case, self.suffix()),
        }
    }
}

/// Outcome of one artifact generation attempt.
#[derive(Debug)]
pub struct GenerationResult {
    pub kind: ArtifactKind,
    pub output_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl GenerationResult {
    fn success(kind: ArtifactKind, output_path: PathBuf) -> Self {
        Self { kind, output_path: Some(output_path), error: None }
    }

    fn failure(kind: ArtifactKind, error: String) -> Self {
        Self { kind, output_path: None, error: Some(error) }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Current time truncated to whole seconds, punctuation stripped. Two
/// migrations generated for the same name within one second compute the
/// same path and overwrite each other; the prefix is not deduplicated.
fn migration_timestamp() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Orchestrates artifact generation for a resource name.
pub struct Generator {
    config: ProjectConfig,
    renderer: Box<dyn TemplateRenderer>,
}

impl Generator {
    pub fn new(config: ProjectConfig, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Generates a single artifact for `name`.
    ///
    /// Validates the name, derives the naming context, renders the kind's
    /// template and writes the output file, returning its path. The same
    /// name and kind always produce the same path, so re-running overwrites
    /// rather than duplicates.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `name` is empty; no file I/O happens
    /// * `Error::IoError` if the template is missing or the write fails
    /// * `Error::MinijinjaError` if the template fails to render
    pub fn generate_artifact(&self, kind: ArtifactKind, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::ValidationError(format!(
                "Missing resource name. Usage: make:{} <name>",
                kind.suffix()
            )));
        }

        let mut context = NamingContext::derive(name);
        if kind == ArtifactKind::Migration {
            context.timestamp = Some(migration_timestamp());
        }

        let template_path = self.config.templates_dir.join(kind.template_file());
        debug!("Rendering template {}", template_path.display());
        let rendered =
            self.renderer.render_file(&template_path, &context.template_context())?;

        let output_dir = kind.output_dir(&self.config);
        writer::ensure_dir(output_dir)?;
        let output_path = output_dir.join(kind.output_file_name(&context));
        writer::write_file(&output_path, &rendered)?;

        Ok(output_path)
    }

    /// Generates the full `make:resource` batch for `name`.
    ///
    /// The batch is best-effort: a failing artifact is reported and recorded,
    /// and the remaining artifacts are still attempted in their fixed order.
    pub fn generate_resource(&self, name: &str) -> Vec<GenerationResult> {
        RESOURCE_KINDS
            .iter()
            .map(|kind| match self.generate_artifact(*kind, name) {
                Ok(path) => GenerationResult::success(*kind, path),
                Err(err) => {
                    warn!("{} generation failed: {}", kind.label(), err);
                    eprintln!("{} generation failed: {}", kind.label(), err);
                    GenerationResult::failure(*kind, err.to_string())
                }
            })
            .collect()
    }
}
