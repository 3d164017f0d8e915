use crafter::config::ProjectConfig;
use crafter::error::Error;
use crafter::generator::{ArtifactKind, Generator};
use crafter::renderer::MiniJinjaRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn shipped_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

fn test_config(root: &Path) -> ProjectConfig {
    let mut config = ProjectConfig::default();
    config.templates_dir = shipped_templates_dir();
    config.controllers_dir = root.join("src/controllers");
    config.models_dir = root.join("src/models");
    config.services_dir = root.join("src/services");
    config.validators_dir = root.join("src/validators");
    config.routes_dir = root.join("src/routes");
    config.middlewares_dir = root.join("src/middlewares");
    config.tests_dir = root.join("src/tests");
    config.seeders_dir = root.join("src/database/seeders");
    config.migrations_dir = root.join("src/database/migrations");
    config
}

fn test_generator(root: &Path) -> Generator {
    Generator::new(test_config(root), Box::new(MiniJinjaRenderer::new()))
}

#[test]
fn test_generate_controller() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let path = generator.generate_artifact(ArtifactKind::Controller, "Post").unwrap();
    assert_eq!(path, temp_dir.path().join("src/controllers/post.controller.ts"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("export class PostController"));
    assert!(content.contains("PostService"));
}

#[test]
fn test_generate_artifact_file_names() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let cases = [
        (ArtifactKind::Model, "src/models/post.model.ts"),
        (ArtifactKind::Service, "src/services/post.service.ts"),
        (ArtifactKind::Validator, "src/validators/post.validator.ts"),
        (ArtifactKind::Route, "src/routes/post.route.ts"),
        (ArtifactKind::Middleware, "src/middlewares/post.middleware.ts"),
        (ArtifactKind::Test, "src/tests/post.test.ts"),
        (ArtifactKind::Seeder, "src/database/seeders/post.seeder.ts"),
    ];
    for (kind, expected) in cases {
        let path = generator.generate_artifact(kind, "Post").unwrap();
        assert_eq!(path, temp_dir.path().join(expected));
        assert!(path.exists());
    }
}

#[test]
fn test_empty_name_is_rejected_before_io() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let err = generator.generate_artifact(ArtifactKind::Controller, "").unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));
    let err = generator.generate_artifact(ArtifactKind::Controller, "   ").unwrap_err();
    assert!(matches!(err, Error::ValidationError(_)));

    // No file I/O happened: the output tree was never created
    assert!(!temp_dir.path().join("src").exists());
}

#[test]
fn test_generate_resource_batch() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let results = generator.generate_resource("Post");
    assert_eq!(results.len(), 5);
    for result in &results {
        assert!(result.succeeded(), "{:?} failed: {:?}", result.kind, result.error);
        let path = result.output_path.as_ref().unwrap();
        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("post."));
        assert!(path.exists());
    }

    let kinds: Vec<ArtifactKind> = results.iter().map(|result| result.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ArtifactKind::Controller,
            ArtifactKind::Model,
            ArtifactKind::Service,
            ArtifactKind::Validator,
            ArtifactKind::Route,
        ]
    );
}

#[test]
fn test_generate_resource_does_not_short_circuit() {
    let temp_dir = TempDir::new().unwrap();
    let partial_templates = temp_dir.path().join("partial-templates");
    fs::create_dir_all(&partial_templates).unwrap();
    // Only the first three resource templates are available
    for name in ["controller.ts.j2", "model.ts.j2", "service.ts.j2"] {
        fs::copy(shipped_templates_dir().join(name), partial_templates.join(name)).unwrap();
    }

    let mut config = test_config(temp_dir.path());
    config.templates_dir = partial_templates;
    let generator = Generator::new(config, Box::new(MiniJinjaRenderer::new()));

    let results = generator.generate_resource("Post");
    assert_eq!(results.len(), 5);
    assert!(results[0].succeeded());
    assert!(results[1].succeeded());
    assert!(results[2].succeeded());
    assert!(!results[3].succeeded());
    assert!(!results[4].succeeded());
    assert!(results[3].error.is_some());

    // The successful siblings were still written
    assert!(temp_dir.path().join("src/controllers/post.controller.ts").exists());
    assert!(temp_dir.path().join("src/services/post.service.ts").exists());
    // The failing artifacts never touched the filesystem
    assert!(!temp_dir.path().join("src/validators").exists());
    assert!(!temp_dir.path().join("src/routes").exists());
}

#[test]
fn test_migration_file_name_is_timestamp_prefixed() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let path = generator.generate_artifact(ArtifactKind::Migration, "Post").unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap();

    // <14-digit timestamp>_post.ts
    assert_eq!(file_name.len(), 14 + "_post.ts".len());
    assert!(file_name.chars().take(14).all(|c| c.is_ascii_digit()));
    assert!(file_name.ends_with("_post.ts"));
    assert_eq!(path.parent().unwrap(), temp_dir.path().join("src/database/migrations"));
}

#[test]
fn test_migrations_for_distinct_names_never_collide() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let first = generator.generate_artifact(ArtifactKind::Migration, "A").unwrap();
    let second = generator.generate_artifact(ArtifactKind::Migration, "B").unwrap();
    assert_ne!(first, second);
    assert!(first.file_name().unwrap().to_str().unwrap().ends_with("_a.ts"));
    assert!(second.file_name().unwrap().to_str().unwrap().ends_with("_b.ts"));
}

#[test]
fn test_regeneration_overwrites_same_path() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let first = generator.generate_artifact(ArtifactKind::Model, "Post").unwrap();
    let second = generator.generate_artifact(ArtifactKind::Model, "Post").unwrap();
    assert_eq!(first, second);

    // Still exactly one file in the output directory
    let entries: Vec<_> = fs::read_dir(first.parent().unwrap()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_missing_template_reports_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(temp_dir.path());
    config.templates_dir = temp_dir.path().join("nonexistent");
    let generator = Generator::new(config, Box::new(MiniJinjaRenderer::new()));

    let err = generator.generate_artifact(ArtifactKind::Controller, "Post").unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn test_route_artifact_uses_kebab_case_paths() {
    let temp_dir = TempDir::new().unwrap();
    let generator = test_generator(temp_dir.path());

    let path = generator.generate_artifact(ArtifactKind::Route, "UserProfile").unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"/user-profile\""));
    assert!(content.contains("UserProfileController"));
}
