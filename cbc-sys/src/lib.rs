//! Raw bindings to the C interfaces of the [COIN-OR](https://www.coin-or.org/)
//! CBC and CLP solvers, covering the subset of the CBC/CLP/OSI/CGL surface the
//! `ruscbc` wrapper consumes: model lifecycle, problem loading, option
//! application, cut-generator construction, event/message handler
//! installation, solving, and solution retrieval. For the semantics of the
//! individual entry points please refer to the solvers' original
//! [documentation](https://coin-or.github.io/Cbc/).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

use std::os::raw::{c_char, c_double, c_int, c_void};

/// Column-start index type of the compressed-column matrix interface.
pub type CoinBigIndex = c_int;

/// The CLP simplex engine.
#[repr(C)]
pub struct Clp_Simplex {
    _unused: [u8; 0],
}

/// CLP solve options (solve type, presolve type).
#[repr(C)]
pub struct ClpSolve {
    _unused: [u8; 0],
}

/// An OSI solver interface bound to a CLP engine.
#[repr(C)]
pub struct OsiSolver {
    _unused: [u8; 0],
}

/// The CBC branch-and-bound model.
#[repr(C)]
pub struct Cbc_Model {
    _unused: [u8; 0],
}

/// A CGL cut generator of any family.
#[repr(C)]
pub struct Cgl_CutGenerator {
    _unused: [u8; 0],
}

/// Simplex event kind passed to an installed event handler.
pub const CLP_EVENT_END_OF_ITERATION: c_int = 2;
/// Event-handler return value: let the solve proceed.
pub const CLP_EVENT_CONTINUE: c_int = -1;
/// Event-handler return value: abort the solve as soon as possible.
pub const CLP_EVENT_STOP: c_int = 5;

/// Branch-and-bound event kind: a node has been processed.
pub const CBC_EVENT_NODE: c_int = 1;
/// Node-handler return value: no action.
pub const CBC_ACTION_NO_ACTION: c_int = -1;
/// Node-handler return value: stop the tree search.
pub const CBC_ACTION_STOP: c_int = 0;

/// Message-handler callback: one finished log line per invocation.
pub type ClpMessageExec =
    Option<unsafe extern "C" fn(model: *mut Clp_Simplex, message: *const c_char, user: *mut c_void)>;
/// Simplex event callback; returns [`CLP_EVENT_STOP`] or [`CLP_EVENT_CONTINUE`].
pub type ClpEventExec =
    Option<unsafe extern "C" fn(model: *mut Clp_Simplex, event: c_int, user: *mut c_void) -> c_int>;
pub type CbcMessageExec =
    Option<unsafe extern "C" fn(model: *mut Cbc_Model, message: *const c_char, user: *mut c_void)>;
/// Branch-and-bound event callback; returns [`CBC_ACTION_STOP`] or
/// [`CBC_ACTION_NO_ACTION`].
pub type CbcEventExec =
    Option<unsafe extern "C" fn(model: *mut Cbc_Model, event: c_int, user: *mut c_void) -> c_int>;
/// Destructor the engine calls on the handler's user pointer when the handler
/// is replaced or the engine is deleted.
pub type HandlerFree = Option<unsafe extern "C" fn(user: *mut c_void)>;

extern "C" {
    // ---- CLP: lifecycle ----
    pub fn Clp_newModel() -> *mut Clp_Simplex;
    pub fn Clp_deleteModel(model: *mut Clp_Simplex);
    pub fn ClpSolve_new() -> *mut ClpSolve;
    pub fn ClpSolve_delete(solve: *mut ClpSolve);
    pub fn OsiClp_new(model: *mut Clp_Simplex) -> *mut OsiSolver;
    pub fn Osi_delete(osi: *mut OsiSolver);

    // ---- CLP: loading ----
    pub fn Clp_setOptimizationDirection(model: *mut Clp_Simplex, direction: c_double);
    pub fn Clp_loadProblem(
        model: *mut Clp_Simplex,
        numcols: c_int,
        numrows: c_int,
        start: *const CoinBigIndex,
        index: *const c_int,
        value: *const c_double,
        collb: *const c_double,
        colub: *const c_double,
        obj: *const c_double,
        rowlb: *const c_double,
        rowub: *const c_double,
    );
    pub fn Clp_setRowName(model: *mut Clp_Simplex, row: c_int, name: *const c_char);
    pub fn Clp_setColumnName(model: *mut Clp_Simplex, column: c_int, name: *const c_char);
    pub fn Clp_readMps(
        model: *mut Clp_Simplex,
        filename: *const c_char,
        keep_names: c_int,
        ignore_errors: c_int,
    ) -> c_int;
    pub fn Osi_writeMps(osi: *mut OsiSolver, filename: *const c_char) -> c_int;

    // ---- CLP: simplex tuning ----
    pub fn Clp_scaling(model: *mut Clp_Simplex, mode: c_int);
    pub fn Clp_setPerturbation(model: *mut Clp_Simplex, value: c_int);
    pub fn Clp_setMaximumIterations(model: *mut Clp_Simplex, value: c_int);
    pub fn Clp_setMaximumSeconds(model: *mut Clp_Simplex, value: c_double);
    pub fn Clp_setPrimalObjectiveLimit(model: *mut Clp_Simplex, value: c_double);
    pub fn Clp_setDualObjectiveLimit(model: *mut Clp_Simplex, value: c_double);
    pub fn Clp_setPrimalTolerance(model: *mut Clp_Simplex, value: c_double);
    pub fn Clp_setDualTolerance(model: *mut Clp_Simplex, value: c_double);
    pub fn Clp_setPrimalPivotAlgorithm(model: *mut Clp_Simplex, algorithm: c_int);
    pub fn Clp_setDualPivotAlgorithm(model: *mut Clp_Simplex, algorithm: c_int);
    pub fn Clp_crash(model: *mut Clp_Simplex, gap: c_double, pivot: c_int) -> c_int;
    pub fn Clp_setLogLevel(model: *mut Clp_Simplex, level: c_int);
    pub fn ClpSolve_setSolveType(solve: *mut ClpSolve, method: c_int, extra_info: c_int);
    pub fn ClpSolve_setPresolveType(solve: *mut ClpSolve, amount: c_int, extra_info: c_int);

    // ---- CLP: solving & retrieval ----
    pub fn Clp_initialSolve(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_initialSolveWithOptions(model: *mut Clp_Simplex, solve: *mut ClpSolve) -> c_int;
    pub fn Clp_status(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_objectiveValue(model: *mut Clp_Simplex) -> c_double;
    pub fn Clp_numberIterations(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_numberRows(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_numberColumns(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_primalColumnSolution(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_dualColumnSolution(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_primalRowSolution(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_dualRowSolution(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_columnLower(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_columnUpper(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_rowLower(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_rowUpper(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_objective(model: *mut Clp_Simplex) -> *const c_double;
    pub fn Clp_primalFeasible(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_dualFeasible(model: *mut Clp_Simplex) -> c_int;
    pub fn Clp_sumPrimalInfeasibilities(model: *mut Clp_Simplex) -> c_double;

    // ---- CLP: handler installation ----
    pub fn Clp_passInMessageHandler(
        model: *mut Clp_Simplex,
        exec: ClpMessageExec,
        free: HandlerFree,
        user: *mut c_void,
    );
    pub fn Clp_passInEventHandler(
        model: *mut Clp_Simplex,
        exec: ClpEventExec,
        free: HandlerFree,
        user: *mut c_void,
    );

    // ---- CBC: lifecycle ----
    pub fn Cbc_newModel(osi: *mut OsiSolver) -> *mut Cbc_Model;
    pub fn Cbc_deleteModel(model: *mut Cbc_Model);

    // ---- CBC: integrality & branching objects ----
    pub fn Osi_setInteger(osi: *mut OsiSolver, column: c_int);
    pub fn Cbc_setInteger(model: *mut Cbc_Model, column: c_int);
    pub fn Cbc_passInPriorities(model: *mut Cbc_Model, priorities: *const c_int, if_object: c_int);
    pub fn Cbc_addSOS(
        model: *mut Cbc_Model,
        count: c_int,
        indices: *const c_int,
        weights: *const c_double,
        sos_type: c_int,
    );
    pub fn Cbc_addLotsize(
        model: *mut Cbc_Model,
        column: c_int,
        number_points: c_int,
        points: *const c_double,
        range: c_int,
    );

    // ---- CBC: search tuning ----
    pub fn Cbc_setMaximumNodes(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setMaximumSolutions(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setMaximumSeconds(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setFathomDiscipline(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setMinimumDrop(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setMaximumCutPasses(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setMaximumCutPassesAtRoot(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setNumberStrong(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setHowOftenGlobalScan(model: *mut Cbc_Model, value: c_int);
    pub fn Cbc_setIntegerTolerance(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setInfeasibilityWeight(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setCutoffIncrement(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setAllowableGap(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setAllowableFractionGap(model: *mut Cbc_Model, value: c_double);
    pub fn Cbc_setLogLevel(model: *mut Cbc_Model, level: c_int);

    // ---- CGL: cut generator construction & tuning ----
    pub fn CglProbing_new() -> *mut Cgl_CutGenerator;
    pub fn CglGomory_new() -> *mut Cgl_CutGenerator;
    pub fn CglKnapsackCover_new() -> *mut Cgl_CutGenerator;
    pub fn CglOddHole_new() -> *mut Cgl_CutGenerator;
    pub fn CglClique_new(packing: c_int) -> *mut Cgl_CutGenerator;
    pub fn CglLiftAndProject_new() -> *mut Cgl_CutGenerator;
    pub fn CglSimpleRounding_new() -> *mut Cgl_CutGenerator;
    pub fn Cgl_delete(generator: *mut Cgl_CutGenerator);

    pub fn CglProbing_setMode(generator: *mut Cgl_CutGenerator, mode: c_int);
    pub fn CglProbing_setUsingObjective(generator: *mut Cgl_CutGenerator, use_obj: c_int);
    pub fn CglProbing_setMaxPass(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglProbing_setMaxProbe(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglProbing_setMaxLook(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglProbing_setRowCuts(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglGomory_setLimit(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglGomory_setAway(generator: *mut Cgl_CutGenerator, value: c_double);
    pub fn CglKnapsackCover_setMaxInKnapsack(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglOddHole_setMinimumViolation(generator: *mut Cgl_CutGenerator, value: c_double);
    pub fn CglOddHole_setMinimumViolationPer(generator: *mut Cgl_CutGenerator, value: c_double);
    pub fn CglOddHole_setMaximumEntries(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglClique_setDoStarClique(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglClique_setStarCliqueNextNodeMethod(generator: *mut Cgl_CutGenerator, method: c_int);
    pub fn CglClique_setStarCliqueCandidateLengthThreshold(
        generator: *mut Cgl_CutGenerator,
        value: c_int,
    );
    pub fn CglClique_setStarCliqueReport(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglClique_setDoRowClique(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglClique_setRowCliqueCandidateLengthThreshold(
        generator: *mut Cgl_CutGenerator,
        value: c_int,
    );
    pub fn CglClique_setRowCliqueReport(generator: *mut Cgl_CutGenerator, value: c_int);
    pub fn CglClique_setMinViolation(generator: *mut Cgl_CutGenerator, value: c_double);
    pub fn CglLiftAndProject_setBeta(generator: *mut Cgl_CutGenerator, beta: c_int);
    pub fn Cbc_addCutGenerator(
        model: *mut Cbc_Model,
        generator: *mut Cgl_CutGenerator,
        how_often: c_int,
        name: *const c_char,
    );

    // ---- CBC: solving & retrieval ----
    pub fn Cbc_initialSolve(model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_branchAndBound(model: *mut Cbc_Model) -> c_int;
    pub fn CbcMain0(model: *mut Cbc_Model);
    pub fn CbcMain1(argc: c_int, argv: *const *const c_char, model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_status(model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_getObjValue(model: *mut Cbc_Model) -> c_double;
    pub fn Cbc_getBestPossibleObjValue(model: *mut Cbc_Model) -> c_double;
    pub fn Cbc_getIterationCount(model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_getNodeCount(model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_getSolutionCount(model: *mut Cbc_Model) -> c_int;
    pub fn Cbc_getColSolution(model: *mut Cbc_Model) -> *const c_double;

    // ---- CBC: handler installation ----
    pub fn Cbc_passInMessageHandler(
        model: *mut Cbc_Model,
        exec: CbcMessageExec,
        free: HandlerFree,
        user: *mut c_void,
    );
    pub fn Cbc_passInEventHandler(
        model: *mut Cbc_Model,
        exec: CbcEventExec,
        free: HandlerFree,
        user: *mut c_void,
    );
}
