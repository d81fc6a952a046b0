// Permissive CSV parsing for published spreadsheet tabs
use std::sync::Arc;

/// One data line of a sheet, keyed by the uppercased header names.
///
/// Every row of a sheet shares the same header list; cells missing from a
/// short line read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Value of `field`, matched case-insensitively. Unknown fields read as "".
    pub fn get(&self, field: &str) -> &str {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(field))
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First non-empty value among `fields`.
    pub fn first_of(&self, fields: &[&str]) -> &str {
        fields
            .iter()
            .map(|f| self.get(f))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }
}

#[cfg(test)]
impl Row {
    /// Build a row from `(field, value)` pairs. Field names are uppercased.
    pub fn from_pairs<K: AsRef<str>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_uppercase(), v.into()))
            .unzip();
        Self {
            headers: headers.into(),
            values,
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }
}

/// Published sheets answer with an HTML page when they are not public or the
/// id is wrong; such bodies are not tabular.
pub fn looks_like_markup(text: &str) -> bool {
    text.contains("<!DOCTYPE") || text.contains("<html")
}

/// Parse header-plus-rows CSV text. Never fails: empty, markup, or
/// header-only input yields no rows.
///
/// Each line is tokenized on its own, so a stray quote in one line cannot
/// pull the following lines into its last cell.
pub fn parse_rows(text: &str) -> Vec<Row> {
    if text.trim().is_empty() || looks_like_markup(text) {
        return Vec::new();
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header, data)) = lines.split_first() else {
        return Vec::new();
    };
    if data.is_empty() {
        return Vec::new();
    }

    let headers: Arc<[String]> = header.split(',').map(|h| clean_cell(h).to_uppercase()).collect();

    data.iter()
        .map(|line| {
            let cells = split_line(line);
            Row {
                headers: headers.clone(),
                values: (0..headers.len())
                    .map(|idx| cells.get(idx).cloned().unwrap_or_default())
                    .collect(),
            }
        })
        .collect()
}

/// Quote-aware split of one line; lines with an unbalanced quote or that the
/// reader rejects fall back to a plain comma split.
fn split_line(line: &str) -> Vec<String> {
    if line.matches('"').count() % 2 == 0 {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());
        match reader.records().next() {
            Some(Ok(record)) => return record.iter().map(clean_cell).collect(),
            Some(Err(e)) => tracing::warn!("Falling back to plain split for CSV line: {}", e),
            None => {}
        }
    }
    line.split(',').map(clean_cell).collect()
}

/// Trim whitespace and one layer of quotes the CSV reader left in place
/// (e.g. a quoted value preceded by spaces).
fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}
