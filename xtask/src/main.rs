//! Developer tasks (schema generation, sample validation, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use mhguard_settings::{Overrides, QuestionnaireFormat};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(mhguard_types::AssessmentReport)
}

fn generate_questionnaire_schema() -> schemars::Schema {
    schema_for!(mhguard_settings::QuestionnaireV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "mhguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "mhguard.questionnaire.v1.json",
            generate: generate_questionnaire_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let mut value = schema.as_value().clone();
    if let Some(obj) = value.as_object_mut() {
        obj.remove("$id");
    }
    jsonschema::draft7::new(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Load a fixture questionnaire as JSON regardless of its on-disk format.
fn load_fixture_questionnaire(path: &Path) -> anyhow::Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    match QuestionnaireFormat::from_path(&path.to_string_lossy()) {
        QuestionnaireFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} as JSON", path.display())),
        QuestionnaireFormat::Toml => {
            let table: toml::Table = toml::from_str(&text)
                .with_context(|| format!("Failed to parse {} as TOML", path.display()))?;
            serde_json::to_value(table).context("Failed to convert TOML to JSON")
        }
    }
}

/// Validate built-in samples, the fixtures that expect success, and the
/// reports they produce against the generated schemas.
fn validate_samples() -> anyhow::Result<()> {
    let questionnaire_schema = compile(&generate_questionnaire_schema())?;
    let report_schema = compile(&generate_report_schema())?;
    let mut errors = Vec::new();
    let mut checked = 0usize;

    for name in mhguard_settings::sample_names() {
        let text = mhguard_app::run_sample(name, QuestionnaireFormat::Json)?;
        let doc: Value = serde_json::from_str(&text).context("Failed to parse sample")?;
        for err in questionnaire_schema.iter_errors(&doc) {
            errors.push(format!("sample {}: {}", name, err));
        }

        let parsed = mhguard_settings::parse_questionnaire(&text, QuestionnaireFormat::Json)?;
        let resolved = mhguard_settings::resolve_questionnaire(&parsed, &Overrides::default())?;
        let now = time::OffsetDateTime::now_utc();
        let report = mhguard_app::build_report(
            &resolved.questionnaire,
            mhguard_domain::evaluate(&resolved.questionnaire),
            now,
            now,
        );
        let report_value = serde_json::to_value(&report).context("Failed to serialize report")?;
        for err in report_schema.iter_errors(&report_value) {
            errors.push(format!("report for sample {}: {}", name, err));
        }
        checked += 1;
    }

    let fixtures = mhguard_test_util::fixtures_dir();
    for entry in fs::read_dir(&fixtures)
        .with_context(|| format!("Failed to read {}", fixtures.display()))?
    {
        let dir = entry?.path();
        // Fixtures without an expected.json are error cases and may be incomplete.
        if !dir.join("expected.json").exists() {
            continue;
        }
        let candidates = [dir.join("questionnaire.json"), dir.join("questionnaire.toml")];
        let Some(path) = candidates.iter().find(|p| p.exists()) else {
            errors.push(format!("{}: no questionnaire file", dir.display()));
            continue;
        };
        let doc = load_fixture_questionnaire(path)?;
        for err in questionnaire_schema.iter_errors(&doc) {
            errors.push(format!("{}: {}", path.display(), err));
        }
        checked += 1;
    }

    if errors.is_empty() {
        println!("✓ {} questionnaires validate against their schemas", checked);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Sample validation failed with {} errors", errors.len())
    }
}

/// Validate that all check IDs and law names have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = mhguard_types::explain::all_check_ids();
    let laws = mhguard_types::ids::all_laws();
    let mut errors = Vec::new();

    for (kind, id) in check_ids
        .iter()
        .map(|id| ("Check ID", id))
        .chain(laws.iter().map(|law| ("Law", law)))
    {
        match mhguard_types::lookup_explanation(id) {
            Some(exp) => {
                for (field, text) in [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("triggers", exp.triggers),
                    ("obligations", exp.obligations),
                ] {
                    if text.is_empty() {
                        errors.push(format!("{} '{}' has empty {}", kind, id, field));
                    }
                }
            }
            None => errors.push(format!("{} '{}' has no explanation", kind, id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} laws have explanations", laws.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  validate-samples  Validate samples, fixtures, and their reports against schemas");
    eprintln!("  explain-coverage  Validate all check IDs and laws have explanations");
    eprintln!("  print-schema-ids  Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-samples" => validate_samples(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", mhguard_types::SCHEMA_REPORT_V1);
            println!("{}", mhguard_types::SCHEMA_QUESTIONNAIRE_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
