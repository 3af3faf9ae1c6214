//! Caller-owned snapshot of a finished solve: status, objective figures,
//! work counts, and the solution vectors.

use crate::status::Status;

/// The extracted results of one solve.
///
/// For a continuous solve all four vectors are populated and sized exactly
/// to the loaded column/row counts; best bound and node count are zero. For
/// an integer solve only the column activities are defined (reduced costs,
/// slacks, and shadow prices are not meaningful for an integer program) and
/// best bound and node count carry the search figures.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub(crate) status: Status,
    pub(crate) objective: f64,
    pub(crate) best_bound: f64,
    pub(crate) iterations: i32,
    pub(crate) nodes: i32,
    pub(crate) col_activity: Vec<f64>,
    pub(crate) reduced_cost: Vec<f64>,
    pub(crate) row_slack: Vec<f64>,
    pub(crate) shadow_price: Vec<f64>,
}

impl SolveResult {
    /// Solution status of the solve.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The fixed human-readable rendering of the status.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Objective value of the reported solution.
    pub fn objective_value(&self) -> f64 {
        self.objective
    }

    /// Best bound on the optimal objective; zero for a continuous solve.
    pub fn best_bound(&self) -> f64 {
        self.best_bound
    }

    /// Simplex iterations performed.
    pub fn iterations(&self) -> i32 {
        self.iterations
    }

    /// Branch-and-bound nodes processed; zero for a continuous solve.
    pub fn nodes(&self) -> i32 {
        self.nodes
    }

    /// Primal values of the columns.
    pub fn col_activity(&self) -> &[f64] {
        &self.col_activity
    }

    /// Reduced costs of the columns; empty for an integer solve.
    pub fn reduced_cost(&self) -> &[f64] {
        &self.reduced_cost
    }

    /// Primal row activities; empty for an integer solve.
    pub fn row_slack(&self) -> &[f64] {
        &self.row_slack
    }

    /// Dual values of the rows; empty for an integer solve.
    pub fn shadow_price(&self) -> &[f64] {
        &self.shadow_price
    }
}
