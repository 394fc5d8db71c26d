use clap::ValueEnum;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

/// Language of readability labels in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    #[value(name = "en")]
    English,
    #[value(name = "pt")]
    Portuguese,
}

/// Unit used for the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharUnitArg {
    /// Unicode scalar values
    Chars,
    /// UTF-16 code units
    Utf16,
    /// UTF-8 bytes
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Words,
    Chars,
    Score,
    Name,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) = match part.split_once(':') {
        None => (part, false),
        Some((k, d)) => match d.trim().to_ascii_lowercase().as_str() {
            "desc" => (k.trim(), true),
            "asc" => (k.trim(), false),
            other => return Err(format!("Unknown sort direction: {other}")),
        },
    };

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "words" => Ok(SortKey::Words),
        "chars" => Ok(SortKey::Chars),
        "score" => Ok(SortKey::Score),
        "name" | "path" => Ok(SortKey::Name),
        other => Err(format!("Unknown sort key: {other}")),
    }
}
