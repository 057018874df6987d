use serde::{Deserialize, Serialize};

/// Default substituted for missing trailing fields, and the sentinel that
/// suppresses rationale rendering.
pub const PLACEHOLDER: &str = "...";

/// The statically declared dataset variant: how many tab-separated columns
/// one record spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    /// tip, rationale, category
    Three,
    /// tip, rationale, category, author
    Four,
}

impl RecordShape {
    #[must_use]
    pub fn field_count(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

/// One tip entry. Arity is fixed by the dataset's [`RecordShape`]; missing
/// trailing fields have already been padded with [`PLACEHOLDER`] by the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub tip: String,
    pub rationale: String,
    pub category: String,
    /// Only present for [`RecordShape::Four`] datasets.
    pub author: Option<String>,
}

impl Record {
    /// The primary display field.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.tip
    }

    /// Rationale lines for the bulleted list, or `None` when the field is
    /// empty or still the padding placeholder.
    #[must_use]
    pub fn rationale_items(&self) -> Option<Vec<String>> {
        if self.rationale.is_empty() || self.rationale == PLACEHOLDER {
            return None;
        }
        Some(self.rationale.lines().map(str::to_owned).collect())
    }
}

/// Result of parsing one tips document: the normalized header row plus every
/// full (or placeholder-padded) record that followed it.
#[derive(Debug, Clone, Default)]
pub struct ParsedTips {
    pub field_names: Vec<String>,
    pub records: Vec<Record>,
}

/// Parse a raw tab-separated tips document.
///
/// The document is one flat tab-delimited token stream: the first
/// `shape.field_count()` tokens are the header row, and the rest are grouped
/// into consecutive chunks of the same size, one chunk per record. Newlines
/// at token edges are stripped and empty tokens dropped, so row breaks in
/// the file carry no meaning. A short trailing chunk is padded with
/// [`PLACEHOLDER`]. Malformed input never errors: anything shorter than a
/// header plus one full row parses to zero records.
#[must_use]
pub fn parse_tips(raw: &str, shape: RecordShape) -> ParsedTips {
    let n = shape.field_count();
    let tokens: Vec<&str> = raw
        .split('\t')
        .map(|token| token.trim_matches('\n'))
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() < n * 2 {
        return ParsedTips::default();
    }

    let field_names = normalize_field_names(&tokens[..n]);
    let records = tokens[n..]
        .chunks(n)
        .map(|chunk| make_record(chunk, shape))
        .collect();

    ParsedTips {
        field_names,
        records,
    }
}

fn make_record(chunk: &[&str], shape: RecordShape) -> Record {
    let field = |i: usize| chunk.get(i).copied().unwrap_or(PLACEHOLDER).to_owned();
    Record {
        tip: field(0),
        rationale: field(1),
        category: field(2),
        author: match shape {
            RecordShape::Three => None,
            RecordShape::Four => Some(field(3)),
        },
    }
}

/// Lowercase with spaces replaced by underscores; names that collide or are
/// not valid identifiers fall back to a positional `field_<i>` placeholder.
fn normalize_field_names(headers: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let name = header.to_lowercase().replace(' ', "_");
        if is_identifier(&name) && !names.contains(&name) {
            names.push(name);
        } else {
            names.push(format!("field_{i}"));
        }
    }
    names
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
