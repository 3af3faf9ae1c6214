//! Callback trampolines: adapters between the engines' event notifications
//! and the three external callback shapes this layer exposes (log message,
//! simplex iteration, branch-and-bound node).
//!
//! An engine stores its own copy of an installed handler. Installation
//! therefore clones the trampoline, boxes the clone, and hands the box to
//! the engine together with an exec shim and a free shim; the engine calls
//! the free shim when the handler is replaced or the engine is deleted. The
//! original trampoline stays in the solver handle until teardown.

use crate::cbc::CbcPtr;
use crate::clp::ClpPtr;
use crate::ffi;
use std::cell::Cell;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::rc::Rc;

/// State of the simplex engine at the end of one iteration.
#[derive(Debug, Clone, Copy)]
pub struct IterationEvent {
    /// Iterations performed so far.
    pub iteration: i32,
    /// Current objective value.
    pub objective: f64,
    /// Whether the iterate is both primal and dual feasible.
    pub feasible: bool,
    /// Sum of primal infeasibilities.
    pub primal_infeasibility: f64,
}

/// State of the branch-and-bound search after one processed node.
#[derive(Debug, Clone, Copy)]
pub struct NodeEvent {
    /// Simplex iterations performed so far.
    pub iteration: i32,
    /// Nodes processed so far.
    pub node: i32,
    /// Best bound on the optimal objective value.
    pub best_bound: f64,
    /// Objective value of the current incumbent.
    pub objective: f64,
    /// Whether a new incumbent was found since the previous event.
    pub new_incumbent: bool,
}

/// Receives one engine log line per invocation.
pub type MessageCallback = Rc<dyn Fn(&str)>;
/// Observes simplex iterations; returning `true` cancels the solve.
pub type IterationCallback = Rc<dyn Fn(IterationEvent) -> bool>;
/// Observes branch-and-bound nodes; returning `true` stops the search.
pub type NodeCallback = Rc<dyn Fn(NodeEvent) -> bool>;

/// Forwards engine log lines to an external callback, then lets the
/// engine's own default handling continue.
#[derive(Clone)]
pub(crate) struct MessageHandler {
    callback: MessageCallback,
}

impl MessageHandler {
    pub(crate) fn new(callback: MessageCallback) -> Self {
        MessageHandler { callback }
    }

    fn print(&self, message: &str) {
        (self.callback)(message);
    }

    pub(crate) fn install_clp(&self, clp: &ClpPtr) {
        let copy = Box::new(self.clone());
        unsafe {
            ffi::Clp_passInMessageHandler(
                clp.raw,
                Some(clp_message_exec),
                Some(message_handler_free),
                Box::into_raw(copy) as *mut c_void,
            )
        };
    }

    pub(crate) fn install_cbc(&self, cbc: &CbcPtr) {
        let copy = Box::new(self.clone());
        unsafe {
            ffi::Cbc_passInMessageHandler(
                cbc.raw,
                Some(cbc_message_exec),
                Some(message_handler_free),
                Box::into_raw(copy) as *mut c_void,
            )
        };
    }
}

extern "C" fn clp_message_exec(
    _model: *mut ffi::Clp_Simplex,
    message: *const c_char,
    user: *mut c_void,
) {
    if message.is_null() || user.is_null() {
        return;
    }
    let handler = unsafe { &*(user as *const MessageHandler) };
    let text = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    handler.print(&text);
}

extern "C" fn cbc_message_exec(
    _model: *mut ffi::Cbc_Model,
    message: *const c_char,
    user: *mut c_void,
) {
    if message.is_null() || user.is_null() {
        return;
    }
    let handler = unsafe { &*(user as *const MessageHandler) };
    let text = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    handler.print(&text);
}

extern "C" fn message_handler_free(user: *mut c_void) {
    if user.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(user as *mut MessageHandler) });
}

/// Reports end-of-iteration engine state and relays a cancellation request
/// back into the simplex event loop.
#[derive(Clone)]
pub(crate) struct IterationHandler {
    callback: IterationCallback,
}

impl IterationHandler {
    pub(crate) fn new(callback: IterationCallback) -> Self {
        IterationHandler { callback }
    }

    fn observe(
        &self,
        iteration: i32,
        objective: f64,
        primal_feasible: bool,
        dual_feasible: bool,
        primal_infeasibility: f64,
    ) -> c_int {
        let event = IterationEvent {
            iteration,
            objective,
            feasible: primal_feasible && dual_feasible,
            primal_infeasibility,
        };
        if (self.callback)(event) {
            ffi::CLP_EVENT_STOP
        } else {
            ffi::CLP_EVENT_CONTINUE
        }
    }

    pub(crate) fn install(&self, clp: &ClpPtr) {
        let copy = Box::new(self.clone());
        unsafe {
            ffi::Clp_passInEventHandler(
                clp.raw,
                Some(clp_event_exec),
                Some(iteration_handler_free),
                Box::into_raw(copy) as *mut c_void,
            )
        };
    }
}

extern "C" fn clp_event_exec(model: *mut ffi::Clp_Simplex, event: c_int, user: *mut c_void) -> c_int {
    if user.is_null() || event != ffi::CLP_EVENT_END_OF_ITERATION {
        return ffi::CLP_EVENT_CONTINUE;
    }
    let handler = unsafe { &*(user as *const IterationHandler) };
    handler.observe(
        unsafe { ffi::Clp_numberIterations(model) },
        unsafe { ffi::Clp_objectiveValue(model) },
        unsafe { ffi::Clp_primalFeasible(model) } != 0,
        unsafe { ffi::Clp_dualFeasible(model) } != 0,
        unsafe { ffi::Clp_sumPrimalInfeasibilities(model) },
    )
}

extern "C" fn iteration_handler_free(user: *mut c_void) {
    if user.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(user as *mut IterationHandler) });
}

/// Reports per-node search state, tracking the solution count between
/// events to flag new incumbents.
#[derive(Clone)]
pub(crate) struct NodeHandler {
    callback: NodeCallback,
    last_solution_count: Cell<i32>,
}

impl NodeHandler {
    pub(crate) fn new(callback: NodeCallback) -> Self {
        NodeHandler {
            callback,
            last_solution_count: Cell::new(0),
        }
    }

    fn observe(
        &self,
        iteration: i32,
        node: i32,
        best_bound: f64,
        objective: f64,
        solution_count: i32,
    ) -> c_int {
        let event = NodeEvent {
            iteration,
            node,
            best_bound,
            objective,
            new_incumbent: solution_count != self.last_solution_count.get(),
        };
        self.last_solution_count.set(solution_count);
        if (self.callback)(event) {
            ffi::CBC_ACTION_STOP
        } else {
            ffi::CBC_ACTION_NO_ACTION
        }
    }

    pub(crate) fn install(&self, cbc: &CbcPtr) {
        let copy = Box::new(self.clone());
        unsafe {
            ffi::Cbc_passInEventHandler(
                cbc.raw,
                Some(cbc_event_exec),
                Some(node_handler_free),
                Box::into_raw(copy) as *mut c_void,
            )
        };
    }
}

extern "C" fn cbc_event_exec(model: *mut ffi::Cbc_Model, event: c_int, user: *mut c_void) -> c_int {
    if user.is_null() || event != ffi::CBC_EVENT_NODE {
        return ffi::CBC_ACTION_NO_ACTION;
    }
    let handler = unsafe { &*(user as *const NodeHandler) };
    handler.observe(
        unsafe { ffi::Cbc_getIterationCount(model) },
        unsafe { ffi::Cbc_getNodeCount(model) },
        unsafe { ffi::Cbc_getBestPossibleObjValue(model) },
        unsafe { ffi::Cbc_getObjValue(model) },
        unsafe { ffi::Cbc_getSolutionCount(model) },
    )
}

extern "C" fn node_handler_free(user: *mut c_void) {
    if user.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(user as *mut NodeHandler) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn message_handler_forwards_text() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = lines.clone();
        let handler = MessageHandler::new(Rc::new(move |line: &str| {
            sink.borrow_mut().push(line.to_string());
        }));
        handler.print("Coin0506I Presolve 1 rows, 2 columns");
        handler.print("Clp0006I 0  Obj 0");
        assert_eq!(lines.borrow().len(), 2);
        assert!(lines.borrow()[0].starts_with("Coin0506I"));
    }

    #[test]
    fn iteration_handler_relays_cancellation() {
        let handler = IterationHandler::new(Rc::new(|event: IterationEvent| {
            event.iteration >= 5 && event.feasible
        }));
        assert_eq!(
            handler.observe(1, 0.0, true, true, 0.0),
            ffi::CLP_EVENT_CONTINUE
        );
        assert_eq!(
            handler.observe(5, 0.0, true, false, 2.5),
            ffi::CLP_EVENT_CONTINUE
        );
        assert_eq!(handler.observe(5, 0.0, true, true, 0.0), ffi::CLP_EVENT_STOP);
    }

    #[test]
    fn node_handler_tracks_incumbents() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handler = NodeHandler::new(Rc::new(move |event: NodeEvent| {
            sink.borrow_mut().push(event.new_incumbent);
            false
        }));
        handler.observe(10, 1, 0.0, 5.0, 0);
        handler.observe(20, 2, 1.0, 4.0, 1); // first incumbent
        handler.observe(30, 3, 2.0, 4.0, 1);
        handler.observe(40, 4, 3.0, 3.0, 2); // improved incumbent
        assert_eq!(*seen.borrow(), vec![false, true, false, true]);
    }

    #[test]
    fn node_handler_clone_carries_state() {
        let handler = NodeHandler::new(Rc::new(|_| false));
        handler.observe(1, 1, 0.0, 0.0, 3);
        let copy = handler.clone();
        assert_eq!(copy.last_solution_count.get(), 3);
        // the copies track independently from here on
        copy.observe(2, 2, 0.0, 0.0, 4);
        assert_eq!(copy.last_solution_count.get(), 4);
        assert_eq!(handler.last_solution_count.get(), 3);
    }

    #[test]
    fn stop_request_maps_to_engine_action() {
        let handler = NodeHandler::new(Rc::new(|_| true));
        assert_eq!(handler.observe(1, 1, 0.0, 0.0, 0), ffi::CBC_ACTION_STOP);
    }
}
