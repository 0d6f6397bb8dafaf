//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{debug, info, warn};

use frete_ingest::{DecimalSeparator, build_rate_rows, ingest_table};
use frete_map::{analyze_document, apply_override, build_preview, parse_document};
use frete_model::{
    ColumnMapping, FieldMapping, FieldRole, NormalizedOption, NormalizedRateRow, SemanticField,
};

use crate::cli::{DecimalSeparatorArg, PreviewArgs, QuoteArgs, TableArgs};

pub fn run_table(args: &TableArgs) -> Result<()> {
    let text = read_file(&args.file)?;
    let separator = match args.decimal_separator {
        DecimalSeparatorArg::Comma => DecimalSeparator::Comma,
        DecimalSeparatorArg::Dot => DecimalSeparator::Dot,
    };

    let analysis = ingest_table(&text, Some(separator))?;
    let rows = build_rate_rows(&analysis.table, &analysis.mapping, separator);
    info!(
        columns = analysis.table.headers.len(),
        rows = rows.len(),
        "rate table analyzed"
    );

    if args.json {
        let payload = serde_json::json!({
            "delimiter": analysis.table.delimiter,
            "headers": analysis.table.headers,
            "mapping": analysis.mapping,
            "rows": rows.iter().take(args.limit).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_binding_table(&analysis.table.headers, &analysis.mapping);
    print_rate_rows(&rows, args.limit);
    Ok(())
}

pub fn run_quote(args: &QuoteArgs) -> Result<()> {
    let text = read_file(&args.file)?;
    let document = parse_document(&text)?;
    let analysis = analyze_document(&document, Some(args.limit));

    if analysis.mapping.is_none() {
        warn!("no array of records found in the payload; nothing to map");
    }

    if args.json {
        let payload = serde_json::json!({
            "candidates": analysis.candidates,
            "mapping": analysis.mapping,
            "preview": analysis.preview,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_candidates(&analysis);
    if let Some(mapping) = &analysis.mapping {
        print_mapping(mapping);
        print_preview(&analysis.preview);
    } else {
        println!("No candidate found: the payload holds no array of records.");
    }
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let mapping_text = read_file(&args.mapping)?;
    let mut mapping: FieldMapping = serde_json::from_str(&mapping_text)
        .with_context(|| format!("invalid field mapping in {}", args.mapping.display()))?;

    for assignment in &args.set {
        let (role, key) = parse_override(assignment)?;
        debug!(role = %role, key = key.as_deref().unwrap_or("-"), "slot override");
        mapping = apply_override(&mapping, role, key);
    }

    let text = read_file(&args.file)?;
    let document = parse_document(&text)?;
    let preview = build_preview(&document, &mapping, args.limit);

    if args.json {
        let payload = serde_json::json!({
            "mapping": mapping,
            "preview": preview,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_mapping(&mapping);
    print_preview(&preview);
    Ok(())
}

/// Parses a `role=key` override; an empty key clears the slot.
pub fn parse_override(assignment: &str) -> Result<(FieldRole, Option<String>)> {
    let Some((role, key)) = assignment.split_once('=') else {
        bail!("expected ROLE=KEY, got {assignment:?}");
    };
    let role: FieldRole = role
        .trim()
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))?;
    let key = key.trim();
    Ok((
        role,
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        },
    ))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn print_binding_table(headers: &[String], mapping: &ColumnMapping) {
    let mut table = new_table(vec!["#", "Header", "Field"]);
    for (index, header) in headers.iter().enumerate() {
        let field = SemanticField::ALL
            .iter()
            .find(|field| mapping.column(**field) == Some(index))
            .map_or("", |field| field.as_str());
        table.add_row(vec![index.to_string(), header.clone(), field.to_string()]);
    }
    println!("{table}");
}

fn print_rate_rows(rows: &[NormalizedRateRow], limit: usize) {
    let mut table = new_table(vec![
        "Range start",
        "Range end",
        "Weight min",
        "Weight max",
        "Price",
        "Lead time",
    ]);
    for row in rows.iter().take(limit) {
        table.add_row(vec![
            row.range_start.clone(),
            row.range_end.clone(),
            row.weight_min.to_string(),
            row.weight_max.to_string(),
            format!("{:.2}", row.price),
            row.lead_time_days.to_string(),
        ]);
    }
    println!("{table}");
    if rows.len() > limit {
        println!("... {} more row(s)", rows.len() - limit);
    }
}

fn print_candidates(analysis: &frete_map::DocumentAnalysis) {
    let mut table = new_table(vec!["Path", "Records", "Score", "Detected roles"]);
    for candidate in &analysis.candidates {
        let roles: Vec<&str> = candidate
            .fields
            .iter()
            .filter_map(|field| field.detected_role.map(|role| role.as_str()))
            .collect();
        table.add_row(vec![
            if candidate.path.is_empty() {
                "(root)".to_string()
            } else {
                candidate.path.clone()
            },
            candidate.length.to_string(),
            candidate.score.to_string(),
            roles.join(", "),
        ]);
    }
    println!("{table}");
}

fn print_mapping(mapping: &FieldMapping) {
    let mut table = new_table(vec!["Slot", "Key"]);
    table.add_row(vec!["optionsPath", mapping.options_path.as_str()]);
    for role in FieldRole::ALL {
        table.add_row(vec![role.as_str(), mapping.slot(role).unwrap_or("—")]);
    }
    println!("{table}");
}

fn print_preview(preview: &[NormalizedOption]) {
    let mut table = new_table(vec!["Carrier", "Price", "Days", "Id"]);
    for option in preview {
        table.add_row(vec![
            option.carrier_name.clone(),
            format!("{:.2}", option.price),
            option.delivery_days.to_string(),
            option.carrier_id.clone(),
        ]);
    }
    println!("{table}");
}
