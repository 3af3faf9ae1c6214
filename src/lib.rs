//! # ruscbc
//!
//! A safe Rust interface for the [COIN-OR](https://www.coin-or.org/) CBC and
//! CLP solvers: a handle-based wrapper over the simplex engine, the
//! branch-and-bound model, and the cut-generator library, with a typed
//! option registry and cancellable progress callbacks. The solving itself
//! (simplex pivoting, tree search, cut separation, presolve, MPS parsing)
//! is entirely the wrapped engines'; this crate owns the binding layer.
//!
//! ## Example
//!
//! ```no_run
//! use ruscbc::{Callbacks, ObjSense, Problem, Status};
//!
//! // maximize x + y subject to x + y <= 10
//! let problem = Problem::new(
//!     2,
//!     1,
//!     ObjSense::Maximize,
//!     vec![0, 1, 2],
//!     vec![0, 0],
//!     vec![1.0, 1.0],
//!     vec![0.0, 0.0],
//!     vec![f64::INFINITY, f64::INFINITY],
//!     vec![1.0, 1.0],
//!     vec![-f64::INFINITY],
//!     vec![10.0],
//! )
//! .unwrap();
//!
//! let result = ruscbc::optimize(&problem, Callbacks::default()).unwrap();
//! assert_eq!(result.status(), Status::Optimal);
//! assert_eq!(result.objective_value(), 10.0);
//! ```

/// Re-exports the raw C bindings this crate is built on.
pub use cbc_sys as ffi;

mod cbc;
mod clp;

pub mod error;
pub mod handler;
pub mod options;
pub mod problem;
pub mod result;
pub mod solver;
pub mod status;

pub use error::Error;
pub use handler::{
    IterationCallback, IterationEvent, MessageCallback, NodeCallback, NodeEvent,
};
pub use options::{OptionEntry, OptionGroup, OptionId, OptionKind, OptionRegistry, OPTION_TABLE};
pub use problem::{ObjSense, Problem, SosConstraint};
pub use result::SolveResult;
pub use solver::{optimize, Callbacks, Solver};
pub use status::Status;
