//! The solver handle: an opaque bundle of one simplex engine, its presolve
//! settings, the constraint interface, a lazily created branch-and-bound
//! model, the active cut generators, and the installed callback trampolines.
//!
//! The handle is not meant for concurrent use; independent handles on
//! independent threads are fine. Everything it owns is torn down on drop.

use tracing::{debug, trace};

use crate::cbc::{CbcPtr, CutGeneratorPtr, OsiPtr};
use crate::clp::{ClpPtr, SolveOptionsPtr};
use crate::error::Error;
use crate::handler::{
    IterationCallback, IterationHandler, MessageCallback, MessageHandler, NodeCallback, NodeHandler,
};
use crate::options::{OptionId, OptionRegistry};
use crate::problem::Problem;
use crate::result::SolveResult;
use crate::status::Status;

/// Branching priority given to integer columns without an explicit entry.
const DEFAULT_PRIORITY: i32 = 1000;

/// One slot per cut family; a slot is filled only when the family's toggle
/// option is on at solve time. The handle keeps the instances alive until
/// teardown; the engine works on its own copies.
#[allow(dead_code)]
#[derive(Default)]
struct CutGenerators {
    probing: Option<CutGeneratorPtr>,
    gomory: Option<CutGeneratorPtr>,
    knapsack: Option<CutGeneratorPtr>,
    odd_hole: Option<CutGeneratorPtr>,
    clique: Option<CutGeneratorPtr>,
    lift_and_project: Option<CutGeneratorPtr>,
    rounding: Option<CutGeneratorPtr>,
}

/// Shape of the problem currently loaded into the handle.
struct LoadedProblem {
    cols: usize,
    rows: usize,
    mip: bool,
}

/// A solver handle.
///
/// The usual sequence is create, load, register callbacks, solve, extract;
/// [`optimize`] runs the whole sequence on a fresh handle.
pub struct Solver {
    clp: ClpPtr,
    solve_options: SolveOptionsPtr,
    osi: OsiPtr,
    cbc: Option<CbcPtr>,
    cuts: CutGenerators,
    message_handler: Option<MessageHandler>,
    #[allow(dead_code)]
    iteration_handler: Option<IterationHandler>,
    node_handler: Option<NodeHandler>,
    options: OptionRegistry,
    loaded: Option<LoadedProblem>,
    solved: bool,
}

impl Solver {
    /// Creates a handle: a fresh simplex engine, its presolve settings, and
    /// the constraint interface bound to the engine. The branch-and-bound
    /// model, cut generators, and trampolines all start absent.
    ///
    /// # Errors
    ///
    /// Fails only when an engine allocator returns no instance.
    pub fn new() -> Result<Self, Error> {
        let clp = ClpPtr::new()?;
        let solve_options = SolveOptionsPtr::new()?;
        let osi = OsiPtr::new(&clp)?;
        debug!("created solver handle");
        Ok(Solver {
            clp,
            solve_options,
            osi,
            cbc: None,
            cuts: CutGenerators::default(),
            message_handler: None,
            iteration_handler: None,
            node_handler: None,
            options: OptionRegistry::new(),
            loaded: None,
            solved: false,
        })
    }

    /// Creates a fresh handle and reads an MPS file into it through the
    /// engine's own reader (the reader's MPS dialect applies verbatim).
    pub fn from_mps_file(path: &str) -> Result<Self, Error> {
        let mut solver = Solver::new()?;
        solver.clp.read_mps(path)?;
        solver.loaded = Some(LoadedProblem {
            cols: solver.clp.num_cols(),
            rows: solver.clp.num_rows(),
            mip: false,
        });
        debug!(path, "read problem from MPS file");
        Ok(solver)
    }

    /// Writes the currently loaded problem through the constraint
    /// interface's MPS writer.
    pub fn write_mps(&self, path: &str) -> Result<(), Error> {
        self.osi.write_mps(path)
    }

    /// This handle's option registry.
    pub fn options(&self) -> &OptionRegistry {
        &self.options
    }

    /// Mutable access to this handle's option registry.
    pub fn options_mut(&mut self) -> &mut OptionRegistry {
        &mut self.options
    }

    /// Installs a log-line callback on every engine the handle currently
    /// holds, replacing any earlier one. The LogLevel option is applied to
    /// the engines alongside the handler.
    pub fn set_message_callback(&mut self, callback: MessageCallback) {
        let handler = MessageHandler::new(callback);
        let log_level = self.options.int_option(OptionId::LogLevel);
        self.clp.set_log_level(log_level);
        handler.install_clp(&self.clp);
        if let Some(cbc) = &self.cbc {
            cbc.set_log_level(log_level);
            handler.install_cbc(cbc);
        }
        self.message_handler = Some(handler);
    }

    /// Installs a simplex-iteration callback, replacing any earlier one.
    pub fn set_iteration_callback(&mut self, callback: IterationCallback) {
        let handler = IterationHandler::new(callback);
        handler.install(&self.clp);
        self.iteration_handler = Some(handler);
    }

    /// Installs a branch-and-bound node callback, replacing any earlier
    /// one. Takes effect on the branch-and-bound model; when the model is
    /// created by a later integer load, the handler is installed on it then.
    pub fn set_node_callback(&mut self, callback: NodeCallback) {
        let handler = NodeHandler::new(callback);
        if let Some(cbc) = &self.cbc {
            handler.install(cbc);
        }
        self.node_handler = Some(handler);
    }

    /// Copies a problem description into the handle.
    ///
    /// Loads sense, matrix, bounds, and objective into the continuous
    /// engine in one call, copies names when supplied, and for an integer
    /// problem creates the branch-and-bound model (first load only), marks
    /// integer columns, and installs priorities, special-ordered sets, and
    /// semi-continuous lot-size objects. Declared-but-empty optional
    /// features are skipped, not failures.
    ///
    /// Semi-continuous columns are loaded with a zero lower bound so the
    /// relaxation treats them as ordinarily bounded; the scratch copy keeps
    /// the caller's arrays untouched, and the lot-size breakpoints use the
    /// original bounds.
    pub fn load_problem(&mut self, problem: &Problem) -> Result<(), Error> {
        let scratch_lower;
        let col_lower = if problem.semi_continuous.is_empty() {
            &problem.col_lower
        } else {
            let mut lower = problem.col_lower.clone();
            for &column in &problem.semi_continuous {
                lower[column] = 0.0;
            }
            scratch_lower = lower;
            &scratch_lower
        };

        self.clp.set_direction(problem.obj_sense.direction());
        self.clp.load_problem(
            problem.cols,
            problem.rows,
            &problem.col_starts,
            &problem.row_indices,
            &problem.values,
            col_lower,
            &problem.col_upper,
            &problem.objective,
            &problem.row_lower,
            &problem.row_upper,
        );
        self.copy_names(problem)?;

        if problem.solve_as_mip {
            if self.cbc.is_none() {
                let cbc = CbcPtr::new(&self.osi)?;
                if let Some(handler) = &self.message_handler {
                    cbc.set_log_level(self.options.int_option(OptionId::LogLevel));
                    handler.install_cbc(&cbc);
                }
                if let Some(handler) = &self.node_handler {
                    handler.install(&cbc);
                }
                self.cbc = Some(cbc);
            }
            if let Some(cbc) = &self.cbc {
                mark_integer_columns(cbc, &self.osi, problem);
                install_priorities(cbc, problem)?;
                install_sos(cbc, problem);
                install_semi_continuous(cbc, problem);
            }
        }

        self.loaded = Some(LoadedProblem {
            cols: problem.cols,
            rows: problem.rows,
            mip: problem.solve_as_mip,
        });
        self.solved = false;
        debug!(
            cols = problem.cols,
            rows = problem.rows,
            mip = problem.solve_as_mip,
            "loaded problem"
        );
        Ok(())
    }

    fn copy_names(&self, problem: &Problem) -> Result<(), Error> {
        if problem.row_names.is_none() && problem.col_names.is_none() {
            return Ok(());
        }
        if let Some(names) = &problem.row_names {
            for (row, name) in names.iter().enumerate() {
                self.clp.set_row_name(row, name)?;
            }
        }
        if let Some(names) = &problem.col_names {
            for (column, name) in names.iter().enumerate() {
                self.clp.set_column_name(column, name)?;
            }
        }
        Ok(())
    }

    /// Runs the solve for the loaded problem.
    ///
    /// The continuous path applies changed simplex options and calls the
    /// initial solve, through the presolve-settings object iff the
    /// PresolveType option was explicitly changed. The integer path applies
    /// changed simplex and search options and then either delegates to the
    /// engine's integrated driver (`MipUseCbcMain`, on by default; the
    /// driver picks its own cut defaults) or attaches each enabled cut
    /// generator explicitly and runs the relaxation solve followed by the
    /// tree search. Options that were never set are left at the engine's
    /// own defaults.
    pub fn solve(&mut self) -> Result<(), Error> {
        let mip = self.loaded.as_ref().ok_or(Error::NoProblem)?.mip;
        debug!(mip, "starting solve");
        if !mip {
            self.apply_simplex_options();
            if self.options.changed(OptionId::PresolveType) {
                self.clp.initial_solve_with_options(&self.solve_options);
            } else {
                self.clp.initial_solve();
            }
        } else {
            let cbc = self.cbc.as_ref().ok_or(Error::NoProblem)?;
            if self.options.int_option(OptionId::MipUseCbcMain) != 0 {
                cbc.main0();
                self.apply_simplex_options();
                apply_search_options(&self.options, cbc);
                // the driver attaches its own cut generators
                cbc.main1(&["ruscbc", "-solve", "-quit"]);
            } else {
                self.apply_simplex_options();
                apply_search_options(&self.options, cbc);
                apply_cut_options(&mut self.cuts, &self.options, cbc)?;
                cbc.initial_solve();
                cbc.branch_and_bound();
            }
        }
        self.solved = true;
        Ok(())
    }

    /// Pushes every changed simplex-tuning option onto the live engine and
    /// the presolve-settings object.
    fn apply_simplex_options(&self) {
        let opts = &self.options;
        trace!("applying changed simplex options");

        if opts.changed(OptionId::Scaling) {
            self.clp.scaling(opts.int_option(OptionId::Scaling));
        }
        if opts.changed(OptionId::Perturbation) {
            self.clp.set_perturbation(opts.int_option(OptionId::Perturbation));
        }

        if opts.changed(OptionId::MaxSeconds) {
            self.clp.set_maximum_seconds(opts.real_option(OptionId::MaxSeconds));
        }
        if opts.changed(OptionId::MaxIterations) {
            self.clp.set_maximum_iterations(opts.int_option(OptionId::MaxIterations));
        }

        if opts.changed(OptionId::PrimalObjectLimit) {
            self.clp.set_primal_objective_limit(opts.real_option(OptionId::PrimalObjectLimit));
        }
        if opts.changed(OptionId::DualObjectLimit) {
            self.clp.set_dual_objective_limit(opts.real_option(OptionId::DualObjectLimit));
        }
        if opts.changed(OptionId::PrimalTolerance) {
            self.clp.set_primal_tolerance(opts.real_option(OptionId::PrimalTolerance));
        }
        if opts.changed(OptionId::DualTolerance) {
            self.clp.set_dual_tolerance(opts.real_option(OptionId::DualTolerance));
        }

        if opts.changed(OptionId::PrimalColPivotAlg) {
            self.clp.set_primal_pivot_algorithm(opts.int_option(OptionId::PrimalColPivotAlg));
        }
        if opts.changed(OptionId::DualRowPivotAlg) {
            self.clp.set_dual_pivot_algorithm(opts.int_option(OptionId::DualRowPivotAlg));
        }

        if opts.changed(OptionId::CrashInd) && opts.int_option(OptionId::CrashInd) != 0 {
            self.clp.crash(
                opts.real_option(OptionId::CrashGap),
                opts.int_option(OptionId::CrashPivot),
            );
        }

        if opts.changed(OptionId::SolveMethod) {
            let method = match opts.int_option(OptionId::SolveMethod) {
                method @ 0..=5 => method,
                _ => 1,
            };
            self.solve_options.set_solve_type(method);
        }
        if opts.changed(OptionId::PresolveType) {
            let presolve = match opts.int_option(OptionId::PresolveType) {
                presolve @ 0..=2 => presolve,
                _ => 0,
            };
            self.solve_options.set_presolve_type(presolve);
        }
    }

    /// Copies status, objective figures, work counts, and solution vectors
    /// out of the engines into a caller-owned [`SolveResult`].
    ///
    /// # Errors
    ///
    /// Fails when no problem is loaded or no solve has been run.
    pub fn results(&self) -> Result<SolveResult, Error> {
        let loaded = self.loaded.as_ref().ok_or(Error::NoProblem)?;
        if !self.solved {
            return Err(Error::NotSolved);
        }
        if !loaded.mip {
            Ok(SolveResult {
                status: Status::from(self.clp.status()),
                objective: self.clp.objective_value(),
                best_bound: 0.0,
                iterations: self.clp.iterations(),
                nodes: 0,
                col_activity: self.clp.primal_column_solution(loaded.cols),
                reduced_cost: self.clp.dual_column_solution(loaded.cols),
                row_slack: self.clp.primal_row_solution(loaded.rows),
                shadow_price: self.clp.dual_row_solution(loaded.rows),
            })
        } else {
            let cbc = self.cbc.as_ref().ok_or(Error::NoProblem)?;
            Ok(SolveResult {
                status: Status::from(cbc.status()),
                objective: cbc.objective_value(),
                best_bound: cbc.best_possible_objective_value(),
                iterations: cbc.iterations(),
                nodes: cbc.nodes(),
                col_activity: cbc.column_solution(loaded.cols),
                reduced_cost: Vec::new(),
                row_slack: Vec::new(),
                shadow_price: Vec::new(),
            })
        }
    }

    /// Number of columns currently loaded.
    pub fn num_cols(&self) -> usize {
        self.clp.num_cols()
    }

    /// Number of rows currently loaded.
    pub fn num_rows(&self) -> usize {
        self.clp.num_rows()
    }

    /// Column lower bounds as the engine holds them.
    pub fn col_lower(&self) -> Vec<f64> {
        self.clp.column_lower()
    }

    /// Column upper bounds as the engine holds them.
    pub fn col_upper(&self) -> Vec<f64> {
        self.clp.column_upper()
    }

    /// Row lower bounds as the engine holds them.
    pub fn row_lower(&self) -> Vec<f64> {
        self.clp.row_lower()
    }

    /// Row upper bounds as the engine holds them.
    pub fn row_upper(&self) -> Vec<f64> {
        self.clp.row_upper()
    }

    /// Objective coefficients as the engine holds them.
    pub fn objective_coefficients(&self) -> Vec<f64> {
        self.clp.objective_coefficients()
    }
}

/// Marks the declared integer columns on both the constraint interface and
/// the branch-and-bound model. A problem without integer columns is a skip.
fn mark_integer_columns(cbc: &CbcPtr, osi: &OsiPtr, problem: &Problem) {
    if problem.num_integers() == 0 {
        return;
    }
    for (column, &is_integer) in problem.integer.iter().enumerate() {
        if is_integer {
            cbc.set_integer(column);
            osi.set_integer(column);
        }
    }
}

/// Installs branching priorities, all-or-nothing: any out-of-range column
/// index rejects the whole list before anything reaches the engine.
/// Columns without an entry default to [`DEFAULT_PRIORITY`]; the engine
/// receives one value per integer column, in column order.
fn install_priorities(cbc: &CbcPtr, problem: &Problem) -> Result<(), Error> {
    if problem.priorities.is_empty() || problem.num_integers() == 0 {
        return Ok(());
    }
    let mut by_column = vec![DEFAULT_PRIORITY; problem.cols];
    for &(column, priority) in &problem.priorities {
        if column < 0 || column as usize >= problem.cols {
            return Err(Error::PriorityIndexOutOfRange {
                index: column,
                cols: problem.cols,
            });
        }
        by_column[column as usize] = priority;
    }
    let dense: Vec<i32> = problem
        .integer
        .iter()
        .enumerate()
        .filter(|(_, &is_integer)| is_integer)
        .map(|(column, _)| by_column[column])
        .collect();
    cbc.pass_in_priorities(&dense);
    Ok(())
}

/// Installs one SOS object per declared group, type and members verbatim.
fn install_sos(cbc: &CbcPtr, problem: &Problem) {
    for sos in &problem.sos {
        cbc.add_sos(&sos.columns, sos.weights.as_deref(), sos.sos_type);
    }
}

/// Installs one lot-size object per semi-continuous column, with the
/// two-range breakpoint set {0, 0, lower, upper} taken from the original
/// bounds.
fn install_semi_continuous(cbc: &CbcPtr, problem: &Problem) {
    for &column in &problem.semi_continuous {
        let points = [
            0.0,
            0.0,
            problem.col_lower[column],
            problem.col_upper[column],
        ];
        cbc.add_lotsize(column, &points);
    }
}

/// Pushes every changed search-limit and tolerance option onto the
/// branch-and-bound model.
fn apply_search_options(opts: &OptionRegistry, cbc: &CbcPtr) {
    trace!("applying changed search options");

    if opts.changed(OptionId::MipMaxNodes) {
        cbc.set_maximum_nodes(opts.int_option(OptionId::MipMaxNodes));
    }
    if opts.changed(OptionId::MipMaxSolutions) {
        cbc.set_maximum_solutions(opts.int_option(OptionId::MipMaxSolutions));
    }
    if opts.changed(OptionId::MipMaxSeconds) {
        cbc.set_maximum_seconds(opts.real_option(OptionId::MipMaxSeconds));
    }

    if opts.changed(OptionId::MipFathomDiscipline) {
        cbc.set_fathom_discipline(opts.int_option(OptionId::MipFathomDiscipline));
    }

    if opts.changed(OptionId::MipMinimumDrop) {
        cbc.set_minimum_drop(opts.int_option(OptionId::MipMinimumDrop));
    }
    if opts.changed(OptionId::MipMaxCutPassAtRoot) {
        cbc.set_maximum_cut_passes_at_root(opts.int_option(OptionId::MipMaxCutPassAtRoot));
    }
    if opts.changed(OptionId::MipMaxCutPasses) {
        cbc.set_maximum_cut_passes(opts.int_option(OptionId::MipMaxCutPasses));
    }
    if opts.changed(OptionId::MipStrongBranching) {
        cbc.set_number_strong(opts.int_option(OptionId::MipStrongBranching));
    }
    if opts.changed(OptionId::MipScanGlobalCuts) {
        cbc.set_how_often_global_scan(opts.int_option(OptionId::MipScanGlobalCuts));
    }

    if opts.changed(OptionId::MipIntegerTolerance) {
        cbc.set_integer_tolerance(opts.real_option(OptionId::MipIntegerTolerance));
    }
    if opts.changed(OptionId::MipInfeasWeight) {
        cbc.set_infeasibility_weight(opts.real_option(OptionId::MipInfeasWeight));
    }
    if opts.changed(OptionId::MipCutoffIncrement) {
        cbc.set_cutoff_increment(opts.real_option(OptionId::MipCutoffIncrement));
    }
    if opts.changed(OptionId::MipAllowableGap) {
        cbc.set_allowable_gap(opts.real_option(OptionId::MipAllowableGap));
    }
    if opts.changed(OptionId::MipFractionalGap) {
        cbc.set_allowable_fraction_gap(opts.real_option(OptionId::MipFractionalGap));
    }
}

/// Constructs each enabled cut family from its option sub-block and
/// attaches it with its frequency option. Families are enabled by option
/// value; the inner knobs are applied only when explicitly changed.
fn apply_cut_options(
    cuts: &mut CutGenerators,
    opts: &OptionRegistry,
    cbc: &CbcPtr,
) -> Result<(), Error> {
    trace!("attaching enabled cut generators");

    if opts.int_option(OptionId::MipCutProbing) != 0 {
        let probing = CutGeneratorPtr::probing()?;
        if opts.changed(OptionId::MipProbeMode) {
            probing.set_probe_mode(opts.int_option(OptionId::MipProbeMode));
        }
        if opts.changed(OptionId::MipProbeUseObjective) {
            probing.set_probe_using_objective(opts.int_option(OptionId::MipProbeUseObjective) != 0);
        }
        if opts.changed(OptionId::MipProbeMaxPass) {
            probing.set_probe_max_pass(opts.int_option(OptionId::MipProbeMaxPass));
        }
        if opts.changed(OptionId::MipProbeMaxProbe) {
            probing.set_probe_max_probe(opts.int_option(OptionId::MipProbeMaxProbe));
        }
        if opts.changed(OptionId::MipProbeMaxLook) {
            probing.set_probe_max_look(opts.int_option(OptionId::MipProbeMaxLook));
        }
        if opts.changed(OptionId::MipProbeRowCuts) {
            probing.set_probe_row_cuts(opts.int_option(OptionId::MipProbeRowCuts));
        }
        cbc.add_cut_generator(&probing, opts.int_option(OptionId::MipProbeFrequency), "Probing");
        cuts.probing = Some(probing);
    }

    if opts.int_option(OptionId::MipCutGomory) != 0 {
        let gomory = CutGeneratorPtr::gomory()?;
        if opts.changed(OptionId::MipGomoryLimit) {
            gomory.set_gomory_limit(opts.int_option(OptionId::MipGomoryLimit));
        }
        if opts.changed(OptionId::MipGomoryAway) {
            gomory.set_gomory_away(opts.real_option(OptionId::MipGomoryAway));
        }
        cbc.add_cut_generator(&gomory, opts.int_option(OptionId::MipGomoryFrequency), "Gomory");
        cuts.gomory = Some(gomory);
    }

    if opts.int_option(OptionId::MipCutKnapsack) != 0 {
        let knapsack = CutGeneratorPtr::knapsack_cover()?;
        if opts.changed(OptionId::MipKnapsackMaxIn) {
            knapsack.set_knapsack_max_in(opts.int_option(OptionId::MipKnapsackMaxIn));
        }
        cbc.add_cut_generator(
            &knapsack,
            opts.int_option(OptionId::MipKnapsackFrequency),
            "Knapsack",
        );
        cuts.knapsack = Some(knapsack);
    }

    if opts.int_option(OptionId::MipCutOddHole) != 0 {
        let odd_hole = CutGeneratorPtr::odd_hole()?;
        if opts.changed(OptionId::MipOddHoleMinViolation) {
            odd_hole.set_odd_hole_minimum_violation(opts.real_option(OptionId::MipOddHoleMinViolation));
        }
        if opts.changed(OptionId::MipOddHoleMinViolPer) {
            odd_hole
                .set_odd_hole_minimum_violation_per(opts.real_option(OptionId::MipOddHoleMinViolPer));
        }
        if opts.changed(OptionId::MipOddHoleMaxEntries) {
            odd_hole.set_odd_hole_maximum_entries(opts.int_option(OptionId::MipOddHoleMaxEntries));
        }
        cbc.add_cut_generator(
            &odd_hole,
            opts.int_option(OptionId::MipOddHoleFrequency),
            "OddHole",
        );
        cuts.odd_hole = Some(odd_hole);
    }

    if opts.int_option(OptionId::MipCutClique) != 0 {
        let clique = CutGeneratorPtr::clique(opts.int_option(OptionId::MipCliquePacking) != 0)?;
        if opts.changed(OptionId::MipCliqueStar) {
            clique.set_clique_star(opts.int_option(OptionId::MipCliqueStar) != 0);
        }
        if opts.changed(OptionId::MipCliqueStarMethod) {
            clique.set_clique_star_method(opts.int_option(OptionId::MipCliqueStarMethod));
        }
        if opts.changed(OptionId::MipCliqueStarMaxLen) {
            clique.set_clique_star_max_len(opts.int_option(OptionId::MipCliqueStarMaxLen));
        }
        if opts.changed(OptionId::MipCliqueStarReport) {
            clique.set_clique_star_report(opts.int_option(OptionId::MipCliqueStarReport) != 0);
        }
        if opts.changed(OptionId::MipCliqueRow) {
            clique.set_clique_row(opts.int_option(OptionId::MipCliqueRow) != 0);
        }
        if opts.changed(OptionId::MipCliqueRowMaxLen) {
            clique.set_clique_row_max_len(opts.int_option(OptionId::MipCliqueRowMaxLen));
        }
        if opts.changed(OptionId::MipCliqueRowReport) {
            clique.set_clique_row_report(opts.int_option(OptionId::MipCliqueRowReport) != 0);
        }
        if opts.changed(OptionId::MipCliqueMinViolation) {
            clique.set_clique_min_violation(opts.real_option(OptionId::MipCliqueMinViolation));
        }
        cbc.add_cut_generator(&clique, opts.int_option(OptionId::MipCliqueFrequency), "Clique");
        cuts.clique = Some(clique);
    }

    if opts.int_option(OptionId::MipCutLiftAndProject) != 0 {
        let lift = CutGeneratorPtr::lift_and_project()?;
        if opts.changed(OptionId::MipLiftCoverBetaOne) {
            lift.set_lift_beta(opts.int_option(OptionId::MipLiftCoverBetaOne) != 0);
        }
        cbc.add_cut_generator(
            &lift,
            opts.int_option(OptionId::MipLiftCoverFrequency),
            "LiftProject",
        );
        cuts.lift_and_project = Some(lift);
    }

    if opts.int_option(OptionId::MipCutSimpleRounding) != 0 {
        let rounding = CutGeneratorPtr::simple_rounding()?;
        cbc.add_cut_generator(
            &rounding,
            opts.int_option(OptionId::MipSimpleRoundFrequency),
            "Rounding",
        );
        cuts.rounding = Some(rounding);
    }

    Ok(())
}

/// The optional callback bundle for [`optimize`].
#[derive(Default)]
pub struct Callbacks {
    /// Receives engine log lines.
    pub message: Option<MessageCallback>,
    /// Observes simplex iterations; may cancel.
    pub iteration: Option<IterationCallback>,
    /// Observes branch-and-bound nodes; may cancel.
    pub node: Option<NodeCallback>,
}

/// One-shot driver: create a handle, load the problem, register the given
/// callbacks, solve, and extract the results. The handle is torn down
/// before returning.
pub fn optimize(problem: &Problem, callbacks: Callbacks) -> Result<SolveResult, Error> {
    let mut solver = Solver::new()?;
    solver.load_problem(problem)?;
    if let Some(callback) = callbacks.message {
        solver.set_message_callback(callback);
    }
    if let Some(callback) = callbacks.iteration {
        solver.set_iteration_callback(callback);
    }
    if let Some(callback) = callbacks.node {
        solver.set_node_callback(callback);
    }
    solver.solve()?;
    solver.results()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ObjSense, SosConstraint};
    use rayon::prelude::*;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    /// max x + y  s.t.  x + y <= 10,  x, y >= 0
    fn max_lp() -> Problem {
        Problem::new(
            2,
            1,
            ObjSense::Maximize,
            vec![0, 1, 2],
            vec![0, 0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![f64::INFINITY, f64::INFINITY],
            vec![1.0, 1.0],
            vec![-f64::INFINITY],
            vec![10.0],
        )
        .unwrap()
    }

    /// min -x - y  s.t.  2x + 3y <= 7,  3x + 2y <= 7,  x, y in [0, 10]
    ///
    /// The relaxation optimum sits at x = y = 1.4 (objective -2.8); the
    /// integer optimum is x = y = 1 (objective -2).
    fn fractional_mip() -> Problem {
        let mut problem = Problem::new(
            2,
            2,
            ObjSense::Minimize,
            vec![0, 2, 4],
            vec![0, 1, 0, 1],
            vec![2.0, 3.0, 3.0, 2.0],
            vec![0.0, 0.0],
            vec![10.0, 10.0],
            vec![-1.0, -1.0],
            vec![-f64::INFINITY, -f64::INFINITY],
            vec![7.0, 7.0],
        )
        .unwrap();
        problem.set_integer(&[0, 1]).unwrap();
        problem
    }

    #[test]
    fn create_and_drop() {
        let solver = Solver::new().unwrap();
        drop(solver);
    }

    #[test]
    fn drop_with_partial_state() {
        // load without solving, and with the MIP side never created
        let mut solver = Solver::new().unwrap();
        solver.load_problem(&max_lp()).unwrap();
        drop(solver);
    }

    #[test]
    fn solve_without_problem_fails() {
        let mut solver = Solver::new().unwrap();
        assert!(matches!(solver.solve(), Err(Error::NoProblem)));
    }

    #[test]
    fn results_before_solve_fail() {
        let mut solver = Solver::new().unwrap();
        solver.load_problem(&max_lp()).unwrap();
        assert!(matches!(solver.results(), Err(Error::NotSolved)));
    }

    #[test]
    fn lp_end_to_end() {
        let mut solver = Solver::new().unwrap();
        solver.load_problem(&max_lp()).unwrap();
        solver.solve().unwrap();
        let result = solver.results().unwrap();

        assert_eq!(result.status(), Status::Optimal);
        assert_eq!(result.status_text(), "Optimal solution found");
        assert!((result.objective_value() - 10.0).abs() < 1e-6);
        let activity_sum: f64 = result.col_activity().iter().sum();
        assert!((activity_sum - 10.0).abs() < 1e-6);
        assert_eq!(result.col_activity().len(), 2);
        assert_eq!(result.reduced_cost().len(), 2);
        assert_eq!(result.row_slack().len(), 1);
        assert_eq!(result.shadow_price().len(), 1);
        assert_eq!(result.best_bound(), 0.0);
        assert_eq!(result.nodes(), 0);
    }

    #[test]
    fn lp_with_changed_options() {
        let mut solver = Solver::new().unwrap();
        solver.options_mut().set_int_option(OptionId::Scaling, 0).unwrap();
        solver
            .options_mut()
            .set_int_option(OptionId::PresolveType, 1)
            .unwrap();
        solver
            .options_mut()
            .set_real_option(OptionId::PrimalTolerance, 1e-8)
            .unwrap();
        solver.load_problem(&max_lp()).unwrap();
        solver.solve().unwrap();
        let result = solver.results().unwrap();
        assert_eq!(result.status(), Status::Optimal);
        assert!((result.objective_value() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn lp_with_callbacks() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = lines.clone();
        let iterations = Rc::new(RefCell::new(0));
        let counter = iterations.clone();

        let result = optimize(
            &max_lp(),
            Callbacks {
                message: Some(Rc::new(move |line: &str| {
                    sink.borrow_mut().push(line.to_string());
                })),
                iteration: Some(Rc::new(move |_event: crate::IterationEvent| {
                    *counter.borrow_mut() += 1;
                    false
                })),
                node: None,
            },
        )
        .unwrap();

        assert_eq!(result.status(), Status::Optimal);
    }

    #[test]
    fn mip_end_to_end() {
        let result = optimize(&fractional_mip(), Callbacks::default()).unwrap();

        assert_eq!(result.status(), Status::Optimal);
        // integer optimum -2, bounded below by the relaxation's -2.8
        assert!((result.objective_value() + 2.0).abs() < 1e-6);
        assert!(result.objective_value() >= -2.8 - 1e-6);
        assert!(result.nodes() >= 0);
        for value in result.col_activity() {
            assert!((value - value.round()).abs() < 1e-6);
        }
        // duals are not defined for an integer solve
        assert!(result.reduced_cost().is_empty());
        assert!(result.shadow_price().is_empty());
    }

    #[test]
    fn mip_explicit_cut_path() {
        let mut solver = Solver::new().unwrap();
        solver
            .options_mut()
            .set_int_option(OptionId::MipUseCbcMain, 0)
            .unwrap();
        solver
            .options_mut()
            .set_int_option(OptionId::MipCutOddHole, 1)
            .unwrap();
        solver
            .options_mut()
            .set_real_option(OptionId::MipGomoryAway, 0.08)
            .unwrap();
        solver.load_problem(&fractional_mip()).unwrap();
        solver.solve().unwrap();
        let result = solver.results().unwrap();
        assert_eq!(result.status(), Status::Optimal);
        assert!((result.objective_value() + 2.0).abs() < 1e-6);
    }

    #[test]
    fn sos_limits_nonzero_members() {
        // max x + y s.t. x + y <= 10, x, y in [0, 6], SOS1 over {x, y}
        let mut problem = Problem::new(
            2,
            1,
            ObjSense::Maximize,
            vec![0, 1, 2],
            vec![0, 0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![6.0, 6.0],
            vec![1.0, 1.0],
            vec![-f64::INFINITY],
            vec![10.0],
        )
        .unwrap();
        problem
            .add_sos(SosConstraint {
                sos_type: 1,
                columns: vec![0, 1],
                weights: None,
            })
            .unwrap();
        problem.set_solve_as_mip(true);

        let result = optimize(&problem, Callbacks::default()).unwrap();
        assert_eq!(result.status(), Status::Optimal);
        assert!((result.objective_value() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn semi_continuous_load_preserves_caller_bounds() {
        // x is semi-continuous: zero, or anywhere within [2, 8]
        let mut problem = Problem::new(
            2,
            1,
            ObjSense::Maximize,
            vec![0, 1, 2],
            vec![0, 0],
            vec![1.0, 1.0],
            vec![2.0, 0.0],
            vec![8.0, f64::INFINITY],
            vec![1.0, 1.0],
            vec![-f64::INFINITY],
            vec![10.0],
        )
        .unwrap();
        problem.set_semi_continuous(&[0]).unwrap();
        problem.set_solve_as_mip(true);

        let before = problem.col_lower().to_vec();
        let mut solver = Solver::new().unwrap();
        solver.load_problem(&problem).unwrap();

        // the caller-side bounds are bitwise untouched even though the
        // engine was loaded with a zero lower bound for column 0
        assert_eq!(problem.col_lower()[0].to_bits(), before[0].to_bits());
        assert_eq!(problem.col_lower(), before.as_slice());
        assert_eq!(solver.col_lower()[0], 0.0);
    }

    #[test]
    fn priorities_are_all_or_nothing() {
        let mut problem = fractional_mip();
        problem.set_priorities(vec![(0, 10), (5, 20)]); // column 5 does not exist

        let mut solver = Solver::new().unwrap();
        let err = solver.load_problem(&problem).unwrap_err();
        assert!(matches!(
            err,
            Error::PriorityIndexOutOfRange { index: 5, cols: 2 }
        ));

        // the handle stays usable with a corrected list
        problem.set_priorities(vec![(0, 10), (1, 20)]);
        solver.load_problem(&problem).unwrap();
        solver.solve().unwrap();
        let result = solver.results().unwrap();
        assert!((result.objective_value() + 2.0).abs() < 1e-6);
    }

    #[test]
    fn mps_round_trip() {
        let path = "test_round_trip.mps";
        let mut problem = max_lp();
        problem
            .set_names(
                Some(vec!["capacity".into()]),
                Some(vec!["x".into(), "y".into()]),
            )
            .unwrap();

        let mut solver = Solver::new().unwrap();
        solver.load_problem(&problem).unwrap();
        solver.write_mps(path).unwrap();

        let read_back = Solver::from_mps_file(path).unwrap();
        assert_eq!(read_back.num_cols(), 2);
        assert_eq!(read_back.num_rows(), 1);
        for (read, original) in read_back.col_lower().iter().zip(problem.col_lower()) {
            assert!((read - original).abs() < 1e-9);
        }
        assert!((read_back.row_upper()[0] - 10.0).abs() < 1e-9);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_mps_file_fails() {
        assert!(matches!(
            Solver::from_mps_file("no-such-file.mps"),
            Err(Error::MpsRead { .. })
        ));
    }

    #[test]
    fn handles_are_independent() {
        let statuses = (0..64)
            .into_par_iter()
            .map(|_| {
                let mut solver = Solver::new().unwrap();
                solver.load_problem(&max_lp()).unwrap();
                solver.solve().unwrap();
                solver.results().unwrap().status()
            })
            .collect::<Vec<_>>();

        assert!(statuses.iter().all(|&status| status == Status::Optimal));
    }
}
