//! Internal owner of the CLP simplex engine and its solve-options object.
//! All unsafe calls into the continuous engine live here; the public API in
//! [`crate::solver`] only ever goes through these safe methods.

use crate::error::Error;
use crate::ffi;
use std::ffi::CString;

/// Owns one CLP simplex engine instance.
pub(crate) struct ClpPtr {
    pub(crate) raw: *mut ffi::Clp_Simplex,
}

impl ClpPtr {
    pub(crate) fn new() -> Result<Self, Error> {
        let raw = unsafe { ffi::Clp_newModel() };
        if raw.is_null() {
            return Err(Error::EngineCreate);
        }
        Ok(ClpPtr { raw })
    }

    pub(crate) fn set_direction(&self, direction: f64) {
        unsafe { ffi::Clp_setOptimizationDirection(self.raw, direction) };
    }

    pub(crate) fn load_problem(
        &self,
        cols: usize,
        rows: usize,
        col_starts: &[i32],
        row_indices: &[i32],
        values: &[f64],
        col_lower: &[f64],
        col_upper: &[f64],
        objective: &[f64],
        row_lower: &[f64],
        row_upper: &[f64],
    ) {
        unsafe {
            ffi::Clp_loadProblem(
                self.raw,
                cols as i32,
                rows as i32,
                col_starts.as_ptr(),
                row_indices.as_ptr(),
                values.as_ptr(),
                col_lower.as_ptr(),
                col_upper.as_ptr(),
                objective.as_ptr(),
                row_lower.as_ptr(),
                row_upper.as_ptr(),
            )
        };
    }

    pub(crate) fn set_row_name(&self, row: usize, name: &str) -> Result<(), Error> {
        let name = CString::new(name)?;
        unsafe { ffi::Clp_setRowName(self.raw, row as i32, name.as_ptr()) };
        Ok(())
    }

    pub(crate) fn set_column_name(&self, column: usize, name: &str) -> Result<(), Error> {
        let name = CString::new(name)?;
        unsafe { ffi::Clp_setColumnName(self.raw, column as i32, name.as_ptr()) };
        Ok(())
    }

    pub(crate) fn read_mps(&self, path: &str) -> Result<(), Error> {
        let filename = CString::new(path)?;
        let code = unsafe { ffi::Clp_readMps(self.raw, filename.as_ptr(), 1, 0) };
        if code != 0 {
            return Err(Error::MpsRead {
                path: path.to_string(),
                code,
            });
        }
        Ok(())
    }

    // -- simplex tuning --

    pub(crate) fn scaling(&self, mode: i32) {
        unsafe { ffi::Clp_scaling(self.raw, mode) };
    }

    pub(crate) fn set_perturbation(&self, value: i32) {
        unsafe { ffi::Clp_setPerturbation(self.raw, value) };
    }

    pub(crate) fn set_maximum_iterations(&self, value: i32) {
        unsafe { ffi::Clp_setMaximumIterations(self.raw, value) };
    }

    pub(crate) fn set_maximum_seconds(&self, value: f64) {
        unsafe { ffi::Clp_setMaximumSeconds(self.raw, value) };
    }

    pub(crate) fn set_primal_objective_limit(&self, value: f64) {
        unsafe { ffi::Clp_setPrimalObjectiveLimit(self.raw, value) };
    }

    pub(crate) fn set_dual_objective_limit(&self, value: f64) {
        unsafe { ffi::Clp_setDualObjectiveLimit(self.raw, value) };
    }

    pub(crate) fn set_primal_tolerance(&self, value: f64) {
        unsafe { ffi::Clp_setPrimalTolerance(self.raw, value) };
    }

    pub(crate) fn set_dual_tolerance(&self, value: f64) {
        unsafe { ffi::Clp_setDualTolerance(self.raw, value) };
    }

    pub(crate) fn set_primal_pivot_algorithm(&self, algorithm: i32) {
        unsafe { ffi::Clp_setPrimalPivotAlgorithm(self.raw, algorithm) };
    }

    pub(crate) fn set_dual_pivot_algorithm(&self, algorithm: i32) {
        unsafe { ffi::Clp_setDualPivotAlgorithm(self.raw, algorithm) };
    }

    pub(crate) fn crash(&self, gap: f64, pivot: i32) {
        unsafe { ffi::Clp_crash(self.raw, gap, pivot) };
    }

    pub(crate) fn set_log_level(&self, level: i32) {
        unsafe { ffi::Clp_setLogLevel(self.raw, level) };
    }

    // -- solving --

    pub(crate) fn initial_solve(&self) {
        unsafe { ffi::Clp_initialSolve(self.raw) };
    }

    pub(crate) fn initial_solve_with_options(&self, options: &SolveOptionsPtr) {
        unsafe { ffi::Clp_initialSolveWithOptions(self.raw, options.raw) };
    }

    // -- retrieval --

    pub(crate) fn status(&self) -> i32 {
        unsafe { ffi::Clp_status(self.raw) }
    }

    pub(crate) fn objective_value(&self) -> f64 {
        unsafe { ffi::Clp_objectiveValue(self.raw) }
    }

    pub(crate) fn iterations(&self) -> i32 {
        unsafe { ffi::Clp_numberIterations(self.raw) }
    }

    pub(crate) fn num_rows(&self) -> usize {
        unsafe { ffi::Clp_numberRows(self.raw) as usize }
    }

    pub(crate) fn num_cols(&self) -> usize {
        unsafe { ffi::Clp_numberColumns(self.raw) as usize }
    }

    pub(crate) fn primal_column_solution(&self, cols: usize) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_primalColumnSolution(self.raw) }, cols)
    }

    pub(crate) fn dual_column_solution(&self, cols: usize) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_dualColumnSolution(self.raw) }, cols)
    }

    pub(crate) fn primal_row_solution(&self, rows: usize) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_primalRowSolution(self.raw) }, rows)
    }

    pub(crate) fn dual_row_solution(&self, rows: usize) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_dualRowSolution(self.raw) }, rows)
    }

    pub(crate) fn column_lower(&self) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_columnLower(self.raw) }, self.num_cols())
    }

    pub(crate) fn column_upper(&self) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_columnUpper(self.raw) }, self.num_cols())
    }

    pub(crate) fn row_lower(&self) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_rowLower(self.raw) }, self.num_rows())
    }

    pub(crate) fn row_upper(&self) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_rowUpper(self.raw) }, self.num_rows())
    }

    pub(crate) fn objective_coefficients(&self) -> Vec<f64> {
        copy_vector(unsafe { ffi::Clp_objective(self.raw) }, self.num_cols())
    }
}

impl Drop for ClpPtr {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::Clp_deleteModel(self.raw) };
        }
    }
}

/// Owns one CLP solve-options object (solve type, presolve type).
pub(crate) struct SolveOptionsPtr {
    pub(crate) raw: *mut ffi::ClpSolve,
}

impl SolveOptionsPtr {
    pub(crate) fn new() -> Result<Self, Error> {
        let raw = unsafe { ffi::ClpSolve_new() };
        if raw.is_null() {
            return Err(Error::EngineCreate);
        }
        Ok(SolveOptionsPtr { raw })
    }

    pub(crate) fn set_solve_type(&self, method: i32) {
        unsafe { ffi::ClpSolve_setSolveType(self.raw, method, -1) };
    }

    pub(crate) fn set_presolve_type(&self, amount: i32) {
        unsafe { ffi::ClpSolve_setPresolveType(self.raw, amount, -1) };
    }
}

impl Drop for SolveOptionsPtr {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::ClpSolve_delete(self.raw) };
        }
    }
}

/// Copies an engine-owned vector into caller-owned memory. The engine hands
/// out a null pointer before any problem is loaded; that reads as zeros.
fn copy_vector(ptr: *const f64, len: usize) -> Vec<f64> {
    if ptr.is_null() {
        return vec![0.0; len];
    }
    unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec()
}
