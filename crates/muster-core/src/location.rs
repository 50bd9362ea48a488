use serde::{Deserialize, Serialize};

/// Row and column of a diagnostic in its file.
///
/// Rows are 1-based, columns are 0-based byte offsets from the start of the
/// row. Emitters add 1 to the column before printing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }

    /// Current row
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Byte offsets of every `\n` in `contents`, used to turn ranges into rows.
pub fn find_new_lines(contents: &str) -> Vec<usize> {
    contents.match_indices('\n').map(|x| x.0).collect()
}

pub fn find_row_col(start: usize, loc_new_lines: &[usize]) -> Location {
    // Number of line breaks strictly before `start`.
    let n_new_lines = loc_new_lines.partition_point(|x| *x < start);
    let col = match n_new_lines {
        0 => start,
        n => start - loc_new_lines[n - 1] - 1,
    };
    Location::new(n_new_lines + 1, col)
}
