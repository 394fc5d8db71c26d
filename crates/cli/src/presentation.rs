// crates/cli/src/presentation.rs
use crate::config::AppConfig;
use crate::error::Result;
use crate::options::{OutputFormat, SortKey};
use doc_metrics_core::LabelLocale;
use doc_metrics_engine::stats::{DocumentReport, Totals};
use std::cmp::Ordering;
use std::io::Write;

pub fn clear_screen<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        write!(out, "\x1B[2J\x1B[1;1H")?;
    }
    Ok(())
}

/// Writes `reports` in the configured format and order.
pub fn write_results<W: Write>(out: &mut W, reports: &[DocumentReport], config: &AppConfig) -> Result<()> {
    let mut reports: Vec<&DocumentReport> = reports.iter().collect();
    sort_reports(&mut reports, &config.sort);

    if config.print_text {
        return write_text(out, &reports);
    }

    let totals = Totals::from_reports(reports.iter().copied());
    let locale = config.locale();

    match config.format {
        OutputFormat::Json => write_json(out, &reports),
        OutputFormat::Yaml => write_yaml(out, &reports),
        OutputFormat::Jsonl => write_jsonl(out, &reports, &totals),
        OutputFormat::Md => write_markdown(out, &reports, &totals, locale),
        OutputFormat::Csv => write_sv(out, &reports, &totals, locale, ','),
        OutputFormat::Tsv => write_sv(out, &reports, &totals, locale, '\t'),
        OutputFormat::Table => write_table(out, &reports, &totals, locale),
    }
}

fn sort_reports(reports: &mut [&DocumentReport], keys: &[(SortKey, bool)]) {
    if keys.is_empty() {
        return;
    }
    reports.sort_by(|a, b| {
        for (key, desc) in keys {
            let order = match key {
                SortKey::Words => a.metrics.word_count.cmp(&b.metrics.word_count),
                SortKey::Chars => a.metrics.char_count.cmp(&b.metrics.char_count),
                SortKey::Score => a.metrics.readability_score.cmp(&b.metrics.readability_score),
                SortKey::Name => a.path.cmp(&b.path),
            };
            if order != Ordering::Equal {
                return if *desc { order.reverse() } else { order };
            }
        }
        Ordering::Equal
    });
}

fn mean_score(totals: &Totals) -> String {
    totals.mean_score.map_or_else(|| "-".to_string(), |m| format!("{m:.1}"))
}

fn write_table<W: Write>(out: &mut W, reports: &[&DocumentReport], totals: &Totals, locale: LabelLocale) -> Result<()> {
    writeln!(out, "doc_metrics v{}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(out, "    WORDS      CHARS  SCORE  LABEL                   DOCUMENT")?;
    writeln!(out, "--------------------------------------------------------------------")?;

    for r in reports {
        let m = &r.metrics;
        writeln!(
            out,
            "{:>9}{:>11}{:>7}  {:<22}  {}",
            m.word_count,
            m.char_count,
            m.readability_score,
            m.readability_label.localized(locale),
            r.path.display()
        )?;
    }

    if reports.len() > 1 {
        writeln!(out, "---")?;
        writeln!(
            out,
            "{:>9}{:>11}{:>7}  {:<22}  TOTAL ({} documents)",
            totals.words,
            totals.chars,
            mean_score(totals),
            "",
            totals.documents
        )?;
    }

    writeln!(out)?;
    writeln!(out, "[doc_metrics] Completed: {} documents analyzed.", reports.len())?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, reports: &[&DocumentReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write>(out: &mut W, reports: &[&DocumentReport]) -> Result<()> {
    serde_yaml::to_writer(&mut *out, reports)?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, reports: &[&DocumentReport], totals: &Totals) -> Result<()> {
    for r in reports {
        let mut v = serde_json::to_value(r)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "document".into());
        }
        writeln!(out, "{v}")?;
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "documents": totals.documents,
        "words": totals.words,
        "chars": totals.chars,
        "meanScore": totals.mean_score,
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}

fn write_markdown<W: Write>(out: &mut W, reports: &[&DocumentReport], totals: &Totals, locale: LabelLocale) -> Result<()> {
    writeln!(out, "### Document Metrics")?;
    writeln!(out)?;
    writeln!(out, "| Words | Chars | Score | Label | Document |")?;
    writeln!(out, "|---:|---:|---:|:---|:---|")?;

    for r in reports {
        let m = &r.metrics;
        let path = r.path.display().to_string().replace('|', "\\|");
        writeln!(
            out,
            "| {} | {} | {} | {} | {path} |",
            m.word_count,
            m.char_count,
            m.readability_score,
            m.readability_label.localized(locale)
        )?;
    }

    if reports.len() > 1 {
        writeln!(out, "| {} | {} | {} |  | **TOTAL** |", totals.words, totals.chars, mean_score(totals))?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_sv<W: Write>(
    out: &mut W,
    reports: &[&DocumentReport],
    totals: &Totals,
    locale: LabelLocale,
    delimiter: char,
) -> Result<()> {
    let d = delimiter;
    writeln!(out, "words{d}chars{d}score{d}label{d}path")?;

    for r in reports {
        let m = &r.metrics;
        writeln!(
            out,
            "{}{d}{}{d}{}{d}{}{d}{}",
            m.word_count,
            m.char_count,
            m.readability_score,
            m.readability_label.localized(locale),
            escape_field(&r.path.display().to_string(), delimiter)
        )?;
    }

    if reports.len() > 1 {
        writeln!(out, "{}{d}{}{d}{}{d}{d}TOTAL", totals.words, totals.chars, mean_score(totals))?;
    }
    Ok(())
}

fn escape_field(field: &str, delimiter: char) -> String {
    if delimiter == ',' && (field.contains(',') || field.contains('"') || field.contains('\n')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else if delimiter == '\t' {
        field.replace(['\t', '\n'], " ")
    } else {
        field.to_string()
    }
}

fn write_text<W: Write>(out: &mut W, reports: &[&DocumentReport]) -> Result<()> {
    let headed = reports.len() > 1;
    for r in reports {
        if headed {
            writeln!(out, "==> {} <==", r.path.display())?;
        }
        let text = r.text.as_deref().unwrap_or_default();
        write!(out, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}
