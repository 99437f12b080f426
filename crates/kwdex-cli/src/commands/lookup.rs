use std::path::PathBuf;

use anyhow::Context;
use kwdex_config::KwdexConfig;
use kwdex_core::KeywordTable;
use kwdex_core::table::KeywordHit;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::output::output;

/// Handle `kwdex lookup WORD`.
pub fn handle(args: &LookupArgs, config: &KwdexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args
        .table
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.path));
    let table = KeywordTable::read_json(&path)
        .with_context(|| format!("failed to load keyword table from {}", path.display()))?;

    let hits = search(&table, args);
    if hits.is_empty() {
        tracing::info!(word = %args.word, "no matching keyword or file");
    }
    output(&hits, flags.format)
}

/// Keywords may be typed the way they appear in an input deck, with the
/// leading `*`.
fn search(table: &KeywordTable, args: &LookupArgs) -> Vec<KeywordHit> {
    let word = args.word.trim().trim_start_matches('*');
    table.search(word, args.version.as_deref(), args.app.as_deref())
}
