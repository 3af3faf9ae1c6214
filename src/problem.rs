//! The caller-side problem description: a sparse constraint matrix in
//! compressed-column form together with bounds, objective, optional names,
//! and the integer-programming extras (integrality flags, branching
//! priorities, special-ordered sets, semi-continuous columns).
//!
//! The description is plain data; nothing here talks to the engines. The
//! loader copies it into the solver handle and never mutates it.

use crate::error::Error;

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjSense {
    /// Minimize the objective function value.
    Minimize,
    /// Maximize the objective function value.
    Maximize,
}

impl ObjSense {
    /// The engine's optimization-direction encoding.
    pub(crate) fn direction(self) -> f64 {
        match self {
            ObjSense::Minimize => 1.0,
            ObjSense::Maximize => -1.0,
        }
    }
}

/// One special-ordered-set constraint: at most one (type 1) or two adjacent
/// (type 2) members may be nonzero.
#[derive(Debug, Clone)]
pub struct SosConstraint {
    /// SOS type; passed to the engine verbatim, no validation.
    pub sos_type: i32,
    /// Member columns.
    pub columns: Vec<i32>,
    /// Optional reference weights, one per member.
    pub weights: Option<Vec<f64>>,
}

/// A complete problem description.
///
/// The matrix is compressed-column: `col_starts[j]..col_starts[j + 1]`
/// indexes the entries of column `j` in `row_indices`/`values`.
#[derive(Debug, Clone)]
pub struct Problem {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) obj_sense: ObjSense,
    pub(crate) col_starts: Vec<i32>,
    pub(crate) row_indices: Vec<i32>,
    pub(crate) values: Vec<f64>,
    pub(crate) col_lower: Vec<f64>,
    pub(crate) col_upper: Vec<f64>,
    pub(crate) objective: Vec<f64>,
    pub(crate) row_lower: Vec<f64>,
    pub(crate) row_upper: Vec<f64>,
    pub(crate) row_names: Option<Vec<String>>,
    pub(crate) col_names: Option<Vec<String>>,
    pub(crate) integer: Vec<bool>,
    pub(crate) solve_as_mip: bool,
    pub(crate) priorities: Vec<(i32, i32)>,
    pub(crate) sos: Vec<SosConstraint>,
    pub(crate) semi_continuous: Vec<usize>,
}

impl Problem {
    /// Builds a continuous problem description, validating the matrix shape.
    ///
    /// # Errors
    ///
    /// Fails when the column starts are not monotonically non-decreasing
    /// with `cols + 1` offsets, when index/value/bound/objective lengths do
    /// not match the counts, or when a row index is out of range.
    pub fn new(
        cols: usize,
        rows: usize,
        obj_sense: ObjSense,
        col_starts: Vec<i32>,
        row_indices: Vec<i32>,
        values: Vec<f64>,
        col_lower: Vec<f64>,
        col_upper: Vec<f64>,
        objective: Vec<f64>,
        row_lower: Vec<f64>,
        row_upper: Vec<f64>,
    ) -> Result<Self, Error> {
        if col_starts.len() != cols + 1 {
            return Err(Error::InvalidProblem(format!(
                "expected {} column starts, got {}",
                cols + 1,
                col_starts.len()
            )));
        }
        if col_starts.windows(2).any(|w| w[1] < w[0]) || col_starts.first() != Some(&0) {
            return Err(Error::InvalidProblem(
                "column starts must begin at 0 and be non-decreasing".into(),
            ));
        }
        let nnz = col_starts[cols] as usize;
        if row_indices.len() != nnz || values.len() != nnz {
            return Err(Error::InvalidProblem(format!(
                "matrix has {} entries but {} indices and {} values",
                nnz,
                row_indices.len(),
                values.len()
            )));
        }
        if let Some(&bad) = row_indices.iter().find(|&&r| r < 0 || r as usize >= rows) {
            return Err(Error::InvalidProblem(format!(
                "row index {bad} outside 0..{rows}"
            )));
        }
        if col_lower.len() != cols || col_upper.len() != cols || objective.len() != cols {
            return Err(Error::InvalidProblem(
                "column bound/objective lengths must equal the column count".into(),
            ));
        }
        if row_lower.len() != rows || row_upper.len() != rows {
            return Err(Error::InvalidProblem(
                "row bound lengths must equal the row count".into(),
            ));
        }
        Ok(Problem {
            cols,
            rows,
            obj_sense,
            col_starts,
            row_indices,
            values,
            col_lower,
            col_upper,
            objective,
            row_lower,
            row_upper,
            row_names: None,
            col_names: None,
            integer: vec![false; cols],
            solve_as_mip: false,
            priorities: Vec::new(),
            sos: Vec::new(),
            semi_continuous: Vec::new(),
        })
    }

    /// Attaches optional row/column name lists. A `None` list keeps the
    /// engine's generated names for that side.
    pub fn set_names(
        &mut self,
        row_names: Option<Vec<String>>,
        col_names: Option<Vec<String>>,
    ) -> Result<(), Error> {
        if let Some(names) = &row_names {
            if names.len() != self.rows {
                return Err(Error::InvalidProblem(format!(
                    "{} row names for {} rows",
                    names.len(),
                    self.rows
                )));
            }
        }
        if let Some(names) = &col_names {
            if names.len() != self.cols {
                return Err(Error::InvalidProblem(format!(
                    "{} column names for {} columns",
                    names.len(),
                    self.cols
                )));
            }
        }
        self.row_names = row_names;
        self.col_names = col_names;
        Ok(())
    }

    /// Flags the given columns integer and marks the problem as an integer
    /// program.
    pub fn set_integer(&mut self, columns: &[usize]) -> Result<(), Error> {
        if let Some(&bad) = columns.iter().find(|&&c| c >= self.cols) {
            return Err(Error::InvalidProblem(format!(
                "integer column {bad} outside 0..{}",
                self.cols
            )));
        }
        for &c in columns {
            self.integer[c] = true;
        }
        self.solve_as_mip = true;
        Ok(())
    }

    /// Overrides whether the integer-programming solve path is taken.
    ///
    /// Normally derived from the integrality flags; an explicit override
    /// lets a caller solve the continuous relaxation of a flagged problem.
    pub fn set_solve_as_mip(&mut self, solve_as_mip: bool) {
        self.solve_as_mip = solve_as_mip;
    }

    /// Stores branching-priority pairs `(column, priority)`.
    ///
    /// Indices are validated at load time: one bad index rejects the whole
    /// list and applies nothing.
    pub fn set_priorities(&mut self, pairs: Vec<(i32, i32)>) {
        self.priorities = pairs;
    }

    /// Adds one special-ordered-set constraint.
    pub fn add_sos(&mut self, sos: SosConstraint) -> Result<(), Error> {
        if let Some(weights) = &sos.weights {
            if weights.len() != sos.columns.len() {
                return Err(Error::InvalidProblem(format!(
                    "{} weights for {} SOS members",
                    weights.len(),
                    sos.columns.len()
                )));
            }
        }
        self.sos.push(sos);
        Ok(())
    }

    /// Marks columns semi-continuous: each may be zero or anywhere within
    /// its declared nonzero bound range.
    pub fn set_semi_continuous(&mut self, columns: &[usize]) -> Result<(), Error> {
        if let Some(&bad) = columns.iter().find(|&&c| c >= self.cols) {
            return Err(Error::InvalidProblem(format!(
                "semi-continuous column {bad} outside 0..{}",
                self.cols
            )));
        }
        self.semi_continuous = columns.to_vec();
        Ok(())
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns flagged integer.
    pub fn num_integers(&self) -> usize {
        self.integer.iter().filter(|&&flag| flag).count()
    }

    /// Whether the integer-programming solve path will be taken.
    pub fn solve_as_mip(&self) -> bool {
        self.solve_as_mip
    }

    /// The caller-supplied column lower bounds.
    pub fn col_lower(&self) -> &[f64] {
        &self.col_lower
    }

    /// The caller-supplied column upper bounds.
    pub fn col_upper(&self) -> &[f64] {
        &self.col_upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_var_problem() -> Problem {
        // max x + y s.t. x + y <= 10, 0 <= x, y <= 1e30
        Problem::new(
            2,
            1,
            ObjSense::Maximize,
            vec![0, 1, 2],
            vec![0, 0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1e30, 1e30],
            vec![1.0, 1.0],
            vec![-1e30],
            vec![10.0],
        )
        .unwrap()
    }

    #[test]
    fn valid_problem() {
        let problem = two_var_problem();
        assert_eq!(problem.num_cols(), 2);
        assert_eq!(problem.num_rows(), 1);
        assert!(!problem.solve_as_mip());
        assert_eq!(problem.num_integers(), 0);
    }

    #[test]
    fn rejects_bad_column_starts() {
        let result = Problem::new(
            2,
            1,
            ObjSense::Minimize,
            vec![0, 2, 1], // decreasing
            vec![0, 0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0],
            vec![1.0],
        );
        assert!(matches!(result, Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn rejects_start_count_mismatch() {
        let result = Problem::new(
            2,
            1,
            ObjSense::Minimize,
            vec![0, 1], // needs cols + 1 entries
            vec![0],
            vec![1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0],
            vec![1.0],
        );
        assert!(matches!(result, Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn rejects_row_index_out_of_range() {
        let result = Problem::new(
            2,
            1,
            ObjSense::Minimize,
            vec![0, 1, 2],
            vec![0, 1], // row 1 does not exist
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
            vec![0.0],
            vec![1.0],
        );
        assert!(matches!(result, Err(Error::InvalidProblem(_))));
    }

    #[test]
    fn integer_flags_imply_mip() {
        let mut problem = two_var_problem();
        problem.set_integer(&[0, 1]).unwrap();
        assert!(problem.solve_as_mip());
        assert_eq!(problem.num_integers(), 2);
        assert!(problem.set_integer(&[7]).is_err());
    }

    #[test]
    fn mip_override() {
        let mut problem = two_var_problem();
        problem.set_integer(&[0]).unwrap();
        problem.set_solve_as_mip(false);
        assert!(!problem.solve_as_mip());
    }

    #[test]
    fn name_lengths_checked() {
        let mut problem = two_var_problem();
        assert!(problem
            .set_names(Some(vec!["c1".into()]), Some(vec!["x".into(), "y".into()]))
            .is_ok());
        assert!(problem
            .set_names(None, Some(vec!["only-one".into()]))
            .is_err());
    }

    #[test]
    fn sos_weight_lengths_checked() {
        let mut problem = two_var_problem();
        assert!(problem
            .add_sos(SosConstraint {
                sos_type: 1,
                columns: vec![0, 1],
                weights: Some(vec![1.0]),
            })
            .is_err());
        assert!(problem
            .add_sos(SosConstraint {
                sos_type: 1,
                columns: vec![0, 1],
                weights: None,
            })
            .is_ok());
    }
}
