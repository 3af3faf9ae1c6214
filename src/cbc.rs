//! Internal owners of the branch-and-bound side: the OSI constraint
//! interface bound to the simplex engine, the CBC model built from it, and
//! the CGL cut generator instances. As in [`crate::clp`], every unsafe call
//! is confined to these wrappers.

use crate::clp::ClpPtr;
use crate::error::Error;
use crate::ffi;
use std::ffi::CString;

/// Owns one OSI constraint-interface object bound to a CLP engine.
pub(crate) struct OsiPtr {
    pub(crate) raw: *mut ffi::OsiSolver,
}

impl OsiPtr {
    pub(crate) fn new(clp: &ClpPtr) -> Result<Self, Error> {
        let raw = unsafe { ffi::OsiClp_new(clp.raw) };
        if raw.is_null() {
            return Err(Error::EngineCreate);
        }
        Ok(OsiPtr { raw })
    }

    pub(crate) fn set_integer(&self, column: usize) {
        unsafe { ffi::Osi_setInteger(self.raw, column as i32) };
    }

    pub(crate) fn write_mps(&self, path: &str) -> Result<(), Error> {
        let filename = CString::new(path)?;
        let code = unsafe { ffi::Osi_writeMps(self.raw, filename.as_ptr()) };
        if code != 0 {
            return Err(Error::MpsWrite {
                path: path.to_string(),
                code,
            });
        }
        Ok(())
    }
}

impl Drop for OsiPtr {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::Osi_delete(self.raw) };
        }
    }
}

/// Owns one CBC branch-and-bound model, created from a constraint-interface
/// snapshot on the first integer-programming load.
pub(crate) struct CbcPtr {
    pub(crate) raw: *mut ffi::Cbc_Model,
}

impl CbcPtr {
    pub(crate) fn new(osi: &OsiPtr) -> Result<Self, Error> {
        let raw = unsafe { ffi::Cbc_newModel(osi.raw) };
        if raw.is_null() {
            return Err(Error::EngineCreate);
        }
        Ok(CbcPtr { raw })
    }

    pub(crate) fn set_integer(&self, column: usize) {
        unsafe { ffi::Cbc_setInteger(self.raw, column as i32) };
    }

    /// Hands the engine one priority value per integer column, in column
    /// order.
    pub(crate) fn pass_in_priorities(&self, priorities: &[i32]) {
        unsafe { ffi::Cbc_passInPriorities(self.raw, priorities.as_ptr(), 0) };
    }

    pub(crate) fn add_sos(&self, columns: &[i32], weights: Option<&[f64]>, sos_type: i32) {
        let weights_ptr = weights.map_or(std::ptr::null(), |w| w.as_ptr());
        unsafe {
            ffi::Cbc_addSOS(
                self.raw,
                columns.len() as i32,
                columns.as_ptr(),
                weights_ptr,
                sos_type,
            )
        };
    }

    /// Installs a two-range lot-size object: the column may sit in
    /// `[points[0], points[1]]` or `[points[2], points[3]]`.
    pub(crate) fn add_lotsize(&self, column: usize, points: &[f64; 4]) {
        unsafe { ffi::Cbc_addLotsize(self.raw, column as i32, 2, points.as_ptr(), 1) };
    }

    // -- search tuning --

    pub(crate) fn set_maximum_nodes(&self, value: i32) {
        unsafe { ffi::Cbc_setMaximumNodes(self.raw, value) };
    }

    pub(crate) fn set_maximum_solutions(&self, value: i32) {
        unsafe { ffi::Cbc_setMaximumSolutions(self.raw, value) };
    }

    pub(crate) fn set_maximum_seconds(&self, value: f64) {
        unsafe { ffi::Cbc_setMaximumSeconds(self.raw, value) };
    }

    pub(crate) fn set_fathom_discipline(&self, value: i32) {
        unsafe { ffi::Cbc_setFathomDiscipline(self.raw, value) };
    }

    pub(crate) fn set_minimum_drop(&self, value: i32) {
        unsafe { ffi::Cbc_setMinimumDrop(self.raw, value) };
    }

    pub(crate) fn set_maximum_cut_passes(&self, value: i32) {
        unsafe { ffi::Cbc_setMaximumCutPasses(self.raw, value) };
    }

    pub(crate) fn set_maximum_cut_passes_at_root(&self, value: i32) {
        unsafe { ffi::Cbc_setMaximumCutPassesAtRoot(self.raw, value) };
    }

    pub(crate) fn set_number_strong(&self, value: i32) {
        unsafe { ffi::Cbc_setNumberStrong(self.raw, value) };
    }

    pub(crate) fn set_how_often_global_scan(&self, value: i32) {
        unsafe { ffi::Cbc_setHowOftenGlobalScan(self.raw, value) };
    }

    pub(crate) fn set_integer_tolerance(&self, value: f64) {
        unsafe { ffi::Cbc_setIntegerTolerance(self.raw, value) };
    }

    pub(crate) fn set_infeasibility_weight(&self, value: f64) {
        unsafe { ffi::Cbc_setInfeasibilityWeight(self.raw, value) };
    }

    pub(crate) fn set_cutoff_increment(&self, value: f64) {
        unsafe { ffi::Cbc_setCutoffIncrement(self.raw, value) };
    }

    pub(crate) fn set_allowable_gap(&self, value: f64) {
        unsafe { ffi::Cbc_setAllowableGap(self.raw, value) };
    }

    pub(crate) fn set_allowable_fraction_gap(&self, value: f64) {
        unsafe { ffi::Cbc_setAllowableFractionGap(self.raw, value) };
    }

    pub(crate) fn set_log_level(&self, level: i32) {
        unsafe { ffi::Cbc_setLogLevel(self.raw, level) };
    }

    pub(crate) fn add_cut_generator(&self, generator: &CutGeneratorPtr, how_often: i32, name: &str) {
        let name = CString::new(name).unwrap();
        unsafe { ffi::Cbc_addCutGenerator(self.raw, generator.raw, how_often, name.as_ptr()) };
    }

    // -- solving --

    pub(crate) fn initial_solve(&self) {
        unsafe { ffi::Cbc_initialSolve(self.raw) };
    }

    pub(crate) fn branch_and_bound(&self) {
        unsafe { ffi::Cbc_branchAndBound(self.raw) };
    }

    /// Prepares the engine's integrated top-level driver.
    pub(crate) fn main0(&self) {
        unsafe { ffi::CbcMain0(self.raw) };
    }

    /// Runs the integrated driver with the given command words; the driver
    /// applies its own cut-generator defaults.
    pub(crate) fn main1(&self, args: &[&str]) {
        let owned: Vec<CString> = args
            .iter()
            .map(|arg| CString::new(*arg).unwrap())
            .collect();
        let argv: Vec<*const std::os::raw::c_char> =
            owned.iter().map(|arg| arg.as_ptr()).collect();
        unsafe { ffi::CbcMain1(argv.len() as i32, argv.as_ptr(), self.raw) };
    }

    // -- retrieval --

    pub(crate) fn status(&self) -> i32 {
        unsafe { ffi::Cbc_status(self.raw) }
    }

    pub(crate) fn objective_value(&self) -> f64 {
        unsafe { ffi::Cbc_getObjValue(self.raw) }
    }

    pub(crate) fn best_possible_objective_value(&self) -> f64 {
        unsafe { ffi::Cbc_getBestPossibleObjValue(self.raw) }
    }

    pub(crate) fn iterations(&self) -> i32 {
        unsafe { ffi::Cbc_getIterationCount(self.raw) }
    }

    pub(crate) fn nodes(&self) -> i32 {
        unsafe { ffi::Cbc_getNodeCount(self.raw) }
    }

    pub(crate) fn column_solution(&self, cols: usize) -> Vec<f64> {
        let ptr = unsafe { ffi::Cbc_getColSolution(self.raw) };
        if ptr.is_null() {
            return vec![0.0; cols];
        }
        unsafe { std::slice::from_raw_parts(ptr, cols) }.to_vec()
    }
}

impl Drop for CbcPtr {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::Cbc_deleteModel(self.raw) };
        }
    }
}

/// Owns one CGL cut generator instance of any family. The handle keeps the
/// instance alive for the lifetime of the solve; the engine works on its own
/// copy once the generator is attached.
pub(crate) struct CutGeneratorPtr {
    pub(crate) raw: *mut ffi::Cgl_CutGenerator,
}

impl CutGeneratorPtr {
    fn wrap(raw: *mut ffi::Cgl_CutGenerator) -> Result<Self, Error> {
        if raw.is_null() {
            return Err(Error::EngineCreate);
        }
        Ok(CutGeneratorPtr { raw })
    }

    pub(crate) fn probing() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglProbing_new() })
    }

    pub(crate) fn gomory() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglGomory_new() })
    }

    pub(crate) fn knapsack_cover() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglKnapsackCover_new() })
    }

    pub(crate) fn odd_hole() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglOddHole_new() })
    }

    pub(crate) fn clique(packing: bool) -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglClique_new(packing as i32) })
    }

    pub(crate) fn lift_and_project() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglLiftAndProject_new() })
    }

    pub(crate) fn simple_rounding() -> Result<Self, Error> {
        Self::wrap(unsafe { ffi::CglSimpleRounding_new() })
    }

    // probing knobs

    pub(crate) fn set_probe_mode(&self, mode: i32) {
        unsafe { ffi::CglProbing_setMode(self.raw, mode) };
    }

    pub(crate) fn set_probe_using_objective(&self, use_objective: bool) {
        unsafe { ffi::CglProbing_setUsingObjective(self.raw, use_objective as i32) };
    }

    pub(crate) fn set_probe_max_pass(&self, value: i32) {
        unsafe { ffi::CglProbing_setMaxPass(self.raw, value) };
    }

    pub(crate) fn set_probe_max_probe(&self, value: i32) {
        unsafe { ffi::CglProbing_setMaxProbe(self.raw, value) };
    }

    pub(crate) fn set_probe_max_look(&self, value: i32) {
        unsafe { ffi::CglProbing_setMaxLook(self.raw, value) };
    }

    pub(crate) fn set_probe_row_cuts(&self, value: i32) {
        unsafe { ffi::CglProbing_setRowCuts(self.raw, value) };
    }

    // gomory knobs

    pub(crate) fn set_gomory_limit(&self, value: i32) {
        unsafe { ffi::CglGomory_setLimit(self.raw, value) };
    }

    pub(crate) fn set_gomory_away(&self, value: f64) {
        unsafe { ffi::CglGomory_setAway(self.raw, value) };
    }

    // knapsack knobs

    pub(crate) fn set_knapsack_max_in(&self, value: i32) {
        unsafe { ffi::CglKnapsackCover_setMaxInKnapsack(self.raw, value) };
    }

    // odd-hole knobs

    pub(crate) fn set_odd_hole_minimum_violation(&self, value: f64) {
        unsafe { ffi::CglOddHole_setMinimumViolation(self.raw, value) };
    }

    pub(crate) fn set_odd_hole_minimum_violation_per(&self, value: f64) {
        unsafe { ffi::CglOddHole_setMinimumViolationPer(self.raw, value) };
    }

    pub(crate) fn set_odd_hole_maximum_entries(&self, value: i32) {
        unsafe { ffi::CglOddHole_setMaximumEntries(self.raw, value) };
    }

    // clique knobs

    pub(crate) fn set_clique_star(&self, value: bool) {
        unsafe { ffi::CglClique_setDoStarClique(self.raw, value as i32) };
    }

    pub(crate) fn set_clique_star_method(&self, method: i32) {
        unsafe { ffi::CglClique_setStarCliqueNextNodeMethod(self.raw, method) };
    }

    pub(crate) fn set_clique_star_max_len(&self, value: i32) {
        unsafe { ffi::CglClique_setStarCliqueCandidateLengthThreshold(self.raw, value) };
    }

    pub(crate) fn set_clique_star_report(&self, value: bool) {
        unsafe { ffi::CglClique_setStarCliqueReport(self.raw, value as i32) };
    }

    pub(crate) fn set_clique_row(&self, value: bool) {
        unsafe { ffi::CglClique_setDoRowClique(self.raw, value as i32) };
    }

    pub(crate) fn set_clique_row_max_len(&self, value: i32) {
        unsafe { ffi::CglClique_setRowCliqueCandidateLengthThreshold(self.raw, value) };
    }

    pub(crate) fn set_clique_row_report(&self, value: bool) {
        unsafe { ffi::CglClique_setRowCliqueReport(self.raw, value as i32) };
    }

    pub(crate) fn set_clique_min_violation(&self, value: f64) {
        unsafe { ffi::CglClique_setMinViolation(self.raw, value) };
    }

    // lift-and-project knobs

    pub(crate) fn set_lift_beta(&self, beta_one: bool) {
        unsafe { ffi::CglLiftAndProject_setBeta(self.raw, if beta_one { 1 } else { -1 }) };
    }
}

impl Drop for CutGeneratorPtr {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::Cgl_delete(self.raw) };
        }
    }
}
