//! Symmetric sparse Gaussian elimination.
//!
//! Columns are eliminated in strictly descending index order, so a pivot row
//! is never referenced again once its column is done and both its stores can
//! be dropped immediately. For each pivot, the column mirror lists exactly
//! the rows above that still reference it; each such row is updated with the
//! usual row operation, with every touched mirror entry co-updated through
//! [`LinearSystem::accumulate`].
//!
//! Correctness does not depend on the order entries are drained, only on
//! visiting each exactly once; the hash stores deliberately randomize that
//! order between runs.

use num::Zero;
use thiserror::Error;

use crate::system::LinearSystem;
use crate::Ratio;

/// Fatal elimination failures. Both indicate a malformed system (or a bug):
/// the board validation up front is meant to make them unreachable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The diagonal entry of a pivot column is missing entirely.
    #[error("no pivot entry on the diagonal of column {column}")]
    MissingPivot { column: usize },

    /// The diagonal entry of a pivot column is exactly zero, so the
    /// division defining the elimination factors is undefined.
    #[error("zero pivot on the diagonal of column {column}")]
    ZeroPivot { column: usize },
}

/// Eliminate one pivot column: divide out its diagonal, fold the pivot row
/// into every row above that references the column, and drop the pivot's
/// stores.
pub fn process_column(system: &mut LinearSystem, pivot: usize) -> Result<(), SolveError> {
    let mut pivot_row = std::mem::take(&mut system.rows[pivot]);
    let mut column = std::mem::take(&mut system.columns[pivot]);

    let diagonal = pivot_row
        .take(pivot)
        .ok_or(SolveError::MissingPivot { column: pivot })?;
    if diagonal.is_zero() {
        return Err(SolveError::ZeroPivot { column: pivot });
    }

    while let Some((row, value)) = column.pop() {
        let factor = value / &diagonal;
        let removed = system.rows[row].remove(pivot);
        debug_assert!(removed, "row {row} lost its mirror of column {pivot}");
        for (&col, entry) in pivot_row.iter() {
            let adjustment = &factor * entry;
            system.accumulate(row, col, -adjustment);
        }
    }
    Ok(())
}

/// Reduce the system to row 0 and return `results / diagonal`, the exact
/// solution of the first unknown.
pub fn eliminate(system: &mut LinearSystem) -> Result<Ratio, SolveError> {
    for pivot in (1..system.row_count).rev() {
        process_column(system, pivot)?;
    }
    let results_column = system.results_column();
    let row = &mut system.rows[0];
    let diagonal = row.take(0).ok_or(SolveError::MissingPivot { column: 0 })?;
    if diagonal.is_zero() {
        return Err(SolveError::ZeroPivot { column: 0 });
    }
    let result = row.take(results_column).unwrap_or_else(Ratio::zero);
    Ok(result / diagonal)
}
