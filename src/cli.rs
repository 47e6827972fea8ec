use clap::{Parser, Subcommand};
use tracing::debug;

use crate::container::hash::{sample_cells, sample_indices, SAMPLE_THRESHOLD};
use crate::error::Error;
use crate::indexed::{Index, Kind};
use crate::parser::parse_literal;

/// Inspect vector and matrix literals.
#[derive(Parser, Debug, Clone)]
#[command(name = "matmax", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the hash code of a literal
    Hash { literal: String },

    /// Print a literal with its kind and dimensions
    Show {
        literal: String,

        /// Convert values to this kind before printing
        #[arg(long = "as")]
        kind: Option<Kind>,
    },

    /// Print the positions read when hashing a container of the given shape
    Sample {
        #[arg(long, conflicts_with_all = ["rows", "cols"], required_unless_present = "rows")]
        len: Option<Index>,

        #[arg(long, requires = "cols")]
        rows: Option<Index>,

        #[arg(long, requires = "rows")]
        cols: Option<Index>,
    },
}

impl Cli {
    pub fn run(&self) -> Result<String, Error> {
        debug!(command = ?self.command, "running");
        match &self.command {
            Command::Hash { literal } => Ok(parse_literal(literal)?.hash_code().to_string()),
            Command::Show { literal, kind } => {
                let literal = parse_literal(literal)?;
                let literal = match kind {
                    Some(kind) => literal.cast(*kind),
                    None => literal,
                };
                Ok(literal.to_string())
            }
            Command::Sample { len, rows, cols } => match (len, rows, cols) {
                (Some(len), _, _) => sample_vector(*len),
                (None, Some(rows), Some(cols)) => sample_matrix(*rows, *cols),
                _ => Err(Error::Other("expected --len or both --rows and --cols".into())),
            },
        }
    }
}

fn sample_vector(len: Index) -> Result<String, Error> {
    if len < 0 {
        return Err(Error::NegativeLength(len));
    }
    let positions: Vec<String> = if i64::from(len) <= SAMPLE_THRESHOLD {
        (0..len).map(|i| i.to_string()).collect()
    } else {
        sample_indices(len).map(|i| i.to_string()).collect()
    };
    Ok(positions.join(" "))
}

fn sample_matrix(rows: Index, cols: Index) -> Result<String, Error> {
    if rows < 0 {
        return Err(Error::NegativeRows(rows));
    }
    if cols < 0 {
        return Err(Error::NegativeColumns(cols));
    }
    let positions: Vec<String> = if i64::from(rows) * i64::from(cols) <= SAMPLE_THRESHOLD {
        (0..rows)
            .flat_map(|r| (0..cols).map(move |c| format!("{r},{c}")))
            .collect()
    } else {
        sample_cells(rows, cols)
            .map(|(r, c)| format!("{r},{c}"))
            .collect()
    };
    Ok(positions.join(" "))
}
