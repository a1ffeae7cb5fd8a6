use super::model::Table;

// ---------------------------------------------------------------------------
// Display grid: the pure half of the table renderer
// ---------------------------------------------------------------------------

/// Background style of a body row, alternating by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShade {
    Even,
    Odd,
}

impl RowShade {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowShade::Even
        } else {
            RowShade::Odd
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub shade: RowShade,
    pub cells: Vec<String>,
}

/// A rectangular, display-ready version of a [`Table`].
///
/// Ragged input is padded rather than truncated: the grid is as wide as the
/// widest row (or the header), and missing labels/cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayGrid {
    pub headers: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayGrid {
    pub fn from_table(table: &Table) -> Self {
        let width = table.column_count();
        if table.is_ragged() {
            log::debug!("Padding ragged table to {width} columns");
        }

        let mut headers = table.headers.clone();
        headers.resize(width, String::new());

        let rows = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                cells.resize(width, String::new());
                DisplayRow {
                    shade: RowShade::for_index(i),
                    cells,
                }
            })
            .collect();

        DisplayGrid { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::model::CellValue;

    #[test]
    fn rows_alternate_starting_even() {
        let table = Table {
            headers: vec!["n".into()],
            rows: (0..4).map(|i| vec![CellValue::Integer(i)]).collect(),
        };
        let grid = DisplayGrid::from_table(&table);
        let shades: Vec<RowShade> = grid.rows.iter().map(|r| r.shade).collect();
        assert_eq!(
            shades,
            vec![RowShade::Even, RowShade::Odd, RowShade::Even, RowShade::Odd]
        );
        assert_eq!(grid.rows[3].cells, vec!["3"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let table = Table {
            headers: vec!["a".into(), "b".into(), "c".into()],
            rows: vec![vec!["1".into()]],
        };
        let grid = DisplayGrid::from_table(&table);
        assert_eq!(grid.rows[0].cells, vec!["1", "", ""]);
    }

    #[test]
    fn long_rows_widen_the_header() {
        let table = Table {
            headers: vec!["a".into()],
            rows: vec![vec![CellValue::Integer(1), CellValue::Null, CellValue::Bool(true)]],
        };
        let grid = DisplayGrid::from_table(&table);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.headers, vec!["a", "", ""]);
        assert_eq!(grid.rows[0].cells, vec!["1", "", "true"]);
    }

    #[test]
    fn empty_table_gives_empty_grid() {
        assert_eq!(DisplayGrid::from_table(&Table::empty()), DisplayGrid::default());
    }
}
