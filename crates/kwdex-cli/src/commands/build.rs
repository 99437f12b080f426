use std::path::PathBuf;

use anyhow::Context;
use kwdex_config::KwdexConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;
use crate::pipeline::{KeywordPipeline, RunReport};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct BuildResponse {
    output: String,
    prefix: String,
    versions: Vec<String>,
    entries: usize,
    #[serde(flatten)]
    report: RunReport,
}

/// Handle `kwdex build` (and bare `kwdex`).
pub fn handle(args: &BuildArgs, config: &KwdexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = apply_overrides(args, config)?;
    let response = execute(&config, args.compact)?;
    if flags.quiet {
        return Ok(());
    }
    output(&response, flags.format)
}

/// Command-line flags win over configuration.
fn apply_overrides(args: &BuildArgs, config: &KwdexConfig) -> anyhow::Result<KwdexConfig> {
    let mut config = config.clone();
    if let Some(path) = &args.output {
        config.output.path = path.to_string_lossy().into_owned();
    }
    if !args.versions.is_empty() {
        config.versions.clone_from(&args.versions);
    }
    config.validate().context("invalid build options")?;
    Ok(config)
}

fn execute(config: &KwdexConfig, compact: bool) -> anyhow::Result<BuildResponse> {
    let pipeline = KeywordPipeline::new(config);
    let total = u64::try_from(pipeline.directory_count()).unwrap_or(u64::MAX);
    let progress = Progress::bar(total, "scanning");
    let (table, report) = pipeline.run(&progress);
    progress.finish_clear();

    let path = PathBuf::from(&config.output.path);
    let pretty = config.output.pretty && !compact;
    table
        .write_json(&path, pretty)
        .with_context(|| format!("failed to write keyword table to {}", path.display()))?;

    Ok(BuildResponse {
        output: path.display().to_string(),
        prefix: table.prefix.clone(),
        versions: config.versions.clone(),
        entries: table.len(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use kwdex_config::{ApplicationConfig, KwdexConfig};
    use kwdex_core::KeywordTable;
    use pretty_assertions::assert_eq;

    use super::{apply_overrides, execute};
    use crate::cli::root_commands::BuildArgs;

    fn corpus_config(root: &Path, output: &Path) -> KwdexConfig {
        let dir = root.join("2022.10/IMEX/Content/IMEX/Recurrent Data");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("date.htm"),
            r#"<html><body><div role="main"><h1>Date (<span class="keyword">*DATE</span>)</h1>
               <h3>PURPOSE:</h3><p>Sets the date.</p></div></body></html>"#,
        )
        .unwrap();

        let mut config = KwdexConfig::default();
        config.corpus.root = root.to_string_lossy().into_owned();
        config.applications = vec![ApplicationConfig::new(
            "IMEX",
            &["IMEX/Content/IMEX/Recurrent Data"],
        )];
        config.output.path = output.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn writes_the_table_and_reports() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("keywordData.json");
        let config = corpus_config(&tmp.path().join("Manuals"), &out);

        let response = execute(&config, false).unwrap();
        assert_eq!(response.entries, 1);
        assert_eq!(response.report.documents_single, 1);

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains('\n'));
        let table = KeywordTable::from_json(&written).unwrap();
        assert_eq!(table.lookup("2022.10", "IMEX", "date").unwrap().description, "Sets the date.");
    }

    #[test]
    fn compact_output_is_one_line() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("compact.json");
        let config = corpus_config(&tmp.path().join("Manuals"), &out);

        execute(&config, true).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap().trim_end().lines().count(), 1);
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("missing-dir").join("table.json");
        let config = corpus_config(&tmp.path().join("Manuals"), &out);

        let err = execute(&config, false).unwrap_err();
        assert!(format!("{err:#}").contains("failed to write keyword table"));
    }

    #[test]
    fn flags_override_configuration() {
        let config = KwdexConfig::default();
        let args = BuildArgs {
            output: Some("out/table.json".into()),
            versions: vec!["2023.10".to_string()],
            compact: false,
        };

        let merged = apply_overrides(&args, &config).unwrap();
        assert_eq!(merged.output.path, "out/table.json");
        assert_eq!(merged.versions, vec!["2023.10"]);
    }

    #[test]
    fn blank_version_flag_is_rejected() {
        let args = BuildArgs {
            versions: vec![" ".to_string()],
            ..BuildArgs::default()
        };
        assert!(apply_overrides(&args, &KwdexConfig::default()).is_err());
    }
}
