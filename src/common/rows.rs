//! Renderer-independent table row descriptions. Each view maps its decoded
//! response records into `RowSpec`s with a pure function; the UI layer
//! decides how a tone or unit is actually drawn.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Bad,
    Muted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellSpec {
    pub text: String,
    /// Unit suffix drawn dimmed after the value (ms, hrs, ...).
    pub unit: Option<&'static str>,
    pub tone: Tone,
    /// Sort key override. Without it the cell sorts by its text.
    pub raw: Option<f64>,
}

impl CellSpec {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unit: None,
            tone: Tone::Plain,
            raw: None,
        }
    }

    pub fn numeric(text: impl Into<String>, raw: f64) -> Self {
        Self {
            raw: Some(raw),
            ..Self::text(text)
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            tone,
            ..Self::text(text)
        }
    }

    /// Green/red status marker, sortable so failing rows group together.
    pub fn status(healthy: bool) -> Self {
        Self {
            text: "\u{25cf}".to_string(),
            unit: None,
            tone: if healthy { Tone::Good } else { Tone::Bad },
            raw: Some(if healthy { 0.0 } else { 1.0 }),
        }
    }

    fn sort_key(&self) -> f64 {
        match self.raw {
            Some(raw) => raw,
            None => f64::NAN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowSpec {
    pub cells: Vec<CellSpec>,
    /// Placeholder rows span the table and are exempt from sorting.
    pub placeholder: bool,
}

impl RowSpec {
    pub fn new(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            placeholder: false,
        }
    }

    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            cells: vec![CellSpec::toned(message, Tone::Muted)],
            placeholder: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub descending: bool,
}

impl SortSpec {
    pub fn descending(column: usize) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    pub fn toggle(&mut self) {
        self.descending = !self.descending;
    }
}

/// Re-sorts rows in place. Cells with a raw value sort numerically; the rest
/// sort by case-insensitive text. Called after every refresh, so a rebuilt
/// table keeps its ordering.
pub fn sort_rows(rows: &mut [RowSpec], sort: SortSpec) {
    rows.sort_by(|a, b| {
        let (ka, kb) = (row_key(a, sort.column), row_key(b, sort.column));
        let ordering = match (ka, kb) {
            ((Some(na), _), (Some(nb), _)) => na.total_cmp(&nb),
            ((Some(_), _), (None, _)) => std::cmp::Ordering::Less,
            ((None, _), (Some(_), _)) => std::cmp::Ordering::Greater,
            ((None, ta), (None, tb)) => ta.cmp(&tb),
        };
        if sort.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn row_key(row: &RowSpec, column: usize) -> (Option<f64>, String) {
    match row.cells.get(column) {
        Some(cell) => {
            let key = cell.sort_key();
            if key.is_nan() {
                (None, cell.text.to_lowercase())
            } else {
                (Some(key), String::new())
            }
        }
        None => (None, String::new()),
    }
}

/// Prepends a "1." style ordinal cell to every row, skipping placeholders.
pub fn label_rows(rows: &mut [RowSpec]) {
    let mut ordinal = 0;
    for row in rows.iter_mut() {
        if row.placeholder {
            continue;
        }
        ordinal += 1;
        row.cells.insert(
            0,
            CellSpec::numeric(format!("{}.", ordinal), ordinal as f64),
        );
    }
}

/// Case-insensitive substring filter on the first cell, mirroring a hide/show
/// pass over already rendered rows. An empty filter keeps everything.
pub fn filter_rows(rows: &[RowSpec], filter: &str) -> Vec<RowSpec> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.placeholder
                || row
                    .cells
                    .first()
                    .is_some_and(|cell| cell.text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, raw: f64) -> RowSpec {
        RowSpec::new(vec![CellSpec::text(name), CellSpec::numeric("x", raw)])
    }

    #[test]
    fn sorts_by_raw_value_descending() {
        let mut rows = vec![row("a", 1.0), row("b", 3.0), row("c", 2.0)];
        sort_rows(&mut rows, SortSpec::descending(1));
        let names: Vec<_> = rows.iter().map(|r| r.cells[0].text.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn text_cells_sort_case_insensitively() {
        let mut rows = vec![row("Zed", 0.0), row("alpha", 0.0), row("Mid", 0.0)];
        sort_rows(
            &mut rows,
            SortSpec {
                column: 0,
                descending: false,
            },
        );
        let names: Vec<_> = rows.iter().map(|r| r.cells[0].text.as_str()).collect();
        assert_eq!(names, ["alpha", "Mid", "Zed"]);
    }

    #[test]
    fn labels_skip_placeholder_rows() {
        let mut rows = vec![row("a", 0.0), RowSpec::placeholder("empty"), row("b", 0.0)];
        label_rows(&mut rows);
        assert_eq!(rows[0].cells[0].text, "1.");
        assert_eq!(rows[1].cells.len(), 1);
        assert_eq!(rows[2].cells[0].text, "2.");
    }

    #[test]
    fn filter_matches_first_cell_substring() {
        let rows = vec![row("http.requests", 0.0), row("db.queries", 0.0)];
        let visible = filter_rows(&rows, "HTTP");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].cells[0].text, "http.requests");
        assert_eq!(filter_rows(&rows, "  ").len(), 2);
    }

    #[test]
    fn status_cells_sort_failing_rows_first() {
        let ok = CellSpec::status(true);
        let bad = CellSpec::status(false);
        assert_eq!(ok.raw, Some(0.0));
        assert_eq!(bad.raw, Some(1.0));
        assert_eq!(ok.tone, Tone::Good);
        assert_eq!(bad.tone, Tone::Bad);
    }
}
