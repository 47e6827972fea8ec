use std::fmt;

use crate::indexed::Index;

const CONSOLE_WIDTH: usize = 80;
const MAX_ROWS: usize = 20;

/// Values written the way a literal would spell them.
pub(crate) trait ToLiteral {
    fn to_literal(&self) -> String;
}

impl ToLiteral for bool {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl ToLiteral for i32 {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl ToLiteral for i64 {
    fn to_literal(&self) -> String {
        format!("{self}L")
    }
}

impl ToLiteral for f64 {
    fn to_literal(&self) -> String {
        match self {
            x if x.is_nan() => "NaN".to_string(),
            x if x.is_infinite() && x.is_sign_positive() => "Inf".to_string(),
            x if x.is_infinite() => "-Inf".to_string(),
            x => format!("{x:?}"),
        }
    }
}

impl ToLiteral for Option<String> {
    fn to_literal(&self) -> String {
        match self {
            Some(s) => format!("{s:?}"),
            None => "null".to_string(),
        }
    }
}

/// Write values in index-labelled lines no wider than the console.
pub(crate) fn print_vector(f: &mut fmt::Formatter<'_>, values: &[String]) -> fmt::Result {
    let n = values.len();
    if n == 0 {
        return Ok(());
    }

    let nlen = format!("{}", n).len();
    let max_len = values.iter().map(String::len).max().unwrap_or(0).max(1);

    let mut col = 0;
    let gutterlen = 2 + nlen + 1;

    let maxprint = MAX_ROWS * ((CONSOLE_WIDTH - gutterlen) / max_len).max(1);

    values
        .iter()
        .take(maxprint)
        .enumerate()
        .try_for_each(|(i, x_str)| {
            if i == 0 {
                col = gutterlen + max_len;
                write!(f, "{:>3$}[{}] {:>4$}", "", i, x_str, nlen - 1, max_len)
            } else if col + 1 + max_len > CONSOLE_WIDTH {
                col = gutterlen + max_len;
                let i_str = format!("{}", i);
                let gutter = nlen - i_str.len();
                write!(f, "\n{:>3$}[{}] {:>4$}", "", i_str, x_str, gutter, max_len)
            } else {
                col += 1 + max_len;
                write!(f, " {:>1$}", x_str, max_len)
            }
        })?;

    if n > maxprint {
        write!(f, "\n[ omitting {} entries ]", n - maxprint)?;
    }

    Ok(())
}

/// Write a row-major grid with `[r,]` row and `[,c]` column labels. Grids
/// wider than the console are written in blocks of columns.
pub(crate) fn print_matrix(
    f: &mut fmt::Formatter<'_>,
    rows: Index,
    columns: Index,
    cells: &[String],
) -> fmt::Result {
    if rows <= 0 || columns <= 0 {
        return Ok(());
    }
    let (rows, columns) = (rows as usize, columns as usize);

    let row_labels: Vec<String> = (0..rows.min(MAX_ROWS)).map(|r| format!("[{r},]")).collect();
    let gutter = row_labels.iter().map(String::len).max().unwrap_or(0);
    let width = cells
        .iter()
        .map(String::len)
        .chain((0..columns).map(|c| format!("[,{c}]").len()))
        .max()
        .unwrap_or(1);
    let per_block = (CONSOLE_WIDTH.saturating_sub(gutter) / (width + 1)).max(1);

    for start in (0..columns).step_by(per_block) {
        let end = (start + per_block).min(columns);
        if start > 0 {
            writeln!(f)?;
        }

        write!(f, "{:>1$}", "", gutter)?;
        for c in start..end {
            write!(f, " {:>1$}", format!("[,{c}]"), width)?;
        }

        for (r, label) in row_labels.iter().enumerate() {
            write!(f, "\n{:>1$}", label, gutter)?;
            for cell in &cells[r * columns + start..r * columns + end] {
                write!(f, " {:>1$}", cell, width)?;
            }
        }
    }

    if rows > MAX_ROWS {
        write!(f, "\n[ omitting {} rows ]", rows - MAX_ROWS)?;
    }

    Ok(())
}
