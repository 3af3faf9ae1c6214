//! The tunable-option registry: a fixed descriptor table for every solver,
//! simplex, search-limit, tolerance, and cut-generator knob this layer knows
//! about, plus the per-handle current values and changed flags.
//!
//! The changed flag is the only signal the solve path looks at: an option
//! that was never set through the registry is left at whatever default the
//! wrapped engine uses internally.

use crate::error::Error;

/// The value kind of an option entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A plain integer value.
    Int,
    /// A floating-point value.
    Real,
    /// A 0/1 toggle.
    OnOff,
    /// One of a small enumerated list of integer values.
    List,
}

/// The functional group an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionGroup {
    /// Simplex engine tuning.
    Simplex,
    /// Log output control.
    LogFile,
    /// Iteration/node/time limits.
    Limits,
    /// Branch-and-bound search strategy.
    MipStrategy,
    /// Branch-and-bound tolerances.
    MipTolerance,
    /// Cut generator toggles and tuning.
    MipCuts,
}

/// Identifies one entry of the option table.
///
/// The discriminants are the stable numeric identifiers shared with callers
/// that address options by number; [`OptionId::from_raw`] maps a number back
/// to an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum OptionId {
    SolveMethod = 1,
    PresolveType = 2,
    Scaling = 3,
    Perturbation = 4,
    PrimalColPivotAlg = 5,
    DualRowPivotAlg = 6,
    LogLevel = 7,
    MaxIterations = 8,
    MaxSeconds = 9,
    CrashInd = 10,
    CrashPivot = 11,
    CrashGap = 12,
    PrimalObjectLimit = 13,
    DualObjectLimit = 14,
    PrimalTolerance = 15,
    DualTolerance = 16,
    MipMaxNodes = 17,
    MipMaxSolutions = 18,
    MipMaxSeconds = 19,
    MipFathomDiscipline = 20,
    MipHotStart = 21,
    MipMinimumDrop = 22,
    MipMaxCutPasses = 23,
    MipMaxCutPassAtRoot = 24,
    MipStrongBranching = 25,
    MipScanGlobalCuts = 26,
    MipIntegerTolerance = 27,
    MipInfeasWeight = 28,
    MipCutoffIncrement = 29,
    MipAllowableGap = 30,
    MipFractionalGap = 31,
    MipCutProbing = 32,
    MipProbeFrequency = 33,
    MipProbeMode = 34,
    MipProbeUseObjective = 35,
    MipProbeMaxPass = 36,
    MipProbeMaxProbe = 37,
    MipProbeMaxLook = 38,
    MipProbeRowCuts = 39,
    MipCutGomory = 40,
    MipGomoryFrequency = 41,
    MipGomoryLimit = 42,
    MipGomoryAway = 43,
    MipCutKnapsack = 44,
    MipKnapsackFrequency = 45,
    MipKnapsackMaxIn = 46,
    MipCutOddHole = 47,
    MipOddHoleFrequency = 48,
    MipOddHoleMinViolation = 49,
    MipOddHoleMinViolPer = 50,
    MipOddHoleMaxEntries = 51,
    MipCutClique = 52,
    MipCliqueFrequency = 53,
    MipCliquePacking = 54,
    MipCliqueStar = 55,
    MipCliqueStarMethod = 56,
    MipCliqueStarMaxLen = 57,
    MipCliqueStarReport = 58,
    MipCliqueRow = 59,
    MipCliqueRowMaxLen = 60,
    MipCliqueRowReport = 61,
    MipCliqueMinViolation = 62,
    MipCutLiftAndProject = 63,
    MipLiftCoverFrequency = 64,
    MipLiftCoverBetaOne = 65,
    MipCutSimpleRounding = 66,
    MipSimpleRoundFrequency = 67,
    MipUseCbcMain = 68,
}

impl OptionId {
    /// The numeric identifier of this option.
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Looks up the identifier with the given numeric value.
    ///
    /// Returns `None` when no table entry carries the number; an unknown
    /// number is not a fault.
    pub fn from_raw(raw: i32) -> Option<OptionId> {
        OPTION_TABLE
            .iter()
            .find(|entry| entry.id.raw() == raw)
            .map(|entry| entry.id)
    }
}

/// The immutable descriptor of one option: names, group, default and legal
/// range, and value kind. Current value and changed flag live in the
/// per-handle [`OptionRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct OptionEntry {
    /// Internal (long) option name.
    pub name: &'static str,
    /// External (short) option name.
    pub short_name: &'static str,
    /// Functional group.
    pub group: OptionGroup,
    /// Default value, as the engine uses it when the option is never set.
    pub default_value: f64,
    /// Smallest legal value.
    pub min_value: f64,
    /// Largest legal value.
    pub max_value: f64,
    /// Value kind; integer accessors reject `Real` entries and vice versa.
    pub kind: OptionKind,
    /// Stable numeric identifier.
    pub id: OptionId,
}

impl OptionEntry {
    const fn new(
        name: &'static str,
        short_name: &'static str,
        group: OptionGroup,
        default_value: f64,
        min_value: f64,
        max_value: f64,
        kind: OptionKind,
        id: OptionId,
    ) -> Self {
        OptionEntry {
            name,
            short_name,
            group,
            default_value,
            min_value,
            max_value,
            kind,
            id,
        }
    }
}

const MAXINT: f64 = i32::MAX as f64;
const MAXREAL: f64 = f64::MAX;

use OptionGroup::*;
use OptionId as Id;
use OptionKind::*;

/// The full option table. Order is stable; identifiers are unique.
#[rustfmt::skip]
pub const OPTION_TABLE: [OptionEntry; 68] = [
    OptionEntry::new("SolveMethod",             "SolveMethod",   Simplex,      0.0,      0.0,     5.0, List,  Id::SolveMethod),
    // dual, primal, primal-or-sprint, barrier, barrier-no-crossover, automatic
    OptionEntry::new("PresolveType",            "Presolve",      Simplex,      0.0,      0.0,     2.0, List,  Id::PresolveType),
    // on, off, number-of-passes
    OptionEntry::new("Scaling",                 "Scaling",       Simplex,      3.0,      0.0,     4.0, List,  Id::Scaling),
    // off, equilibrium, geometric, auto, dynamic
    OptionEntry::new("Perturbation",            "Perturb",       Simplex,    100.0,      0.0,   100.0, Int,   Id::Perturbation),
    // 0 off, 50 on, 100 only if the simplex stalls
    OptionEntry::new("PrimalColPivotAlg",       "PrimPivAlg",    Simplex,      1.0,      0.0,     4.0, List,  Id::PrimalColPivotAlg),
    OptionEntry::new("DualRowPivotAlg",         "DualPivAlg",    Simplex,      1.0,      0.0,     3.0, List,  Id::DualRowPivotAlg),
    OptionEntry::new("LogLevel",                "LogLevel",      LogFile,      1.0,      0.0,     4.0, List,  Id::LogLevel),
    OptionEntry::new("MaxIterations",           "MaxIter",       Limits, 99999999.0,     0.0,  MAXINT, Int,   Id::MaxIterations),
    OptionEntry::new("MaxSeconds",              "MaxSeconds",    Limits,      -1.0,     -1.0, MAXREAL, Real,  Id::MaxSeconds),

    OptionEntry::new("CrashInd",                "CrashInd",      Simplex,      0.0,      0.0,     1.0, OnOff, Id::CrashInd),
    OptionEntry::new("CrashPivot",              "CrashPivot",    Simplex,      0.0,     -1.0,     2.0, List,  Id::CrashPivot),
    OptionEntry::new("CrashGap",                "CrashGap",      Simplex,   1000.0,      0.0, MAXREAL, Real,  Id::CrashGap),
    OptionEntry::new("PrimalObjectLimit",       "PrimalObjLim",  Simplex,  MAXREAL,      0.0, MAXREAL, Real,  Id::PrimalObjectLimit),
    OptionEntry::new("DualObjectLimit",         "DualObjLim",    Simplex,  MAXREAL,      0.0, MAXREAL, Real,  Id::DualObjectLimit),
    OptionEntry::new("PrimalTolerance",         "PrimalTol",     Simplex,     1e-7,      0.0, MAXREAL, Real,  Id::PrimalTolerance),
    OptionEntry::new("DualTolerance",           "DualTol",       Simplex,     1e-7,      0.0, MAXREAL, Real,  Id::DualTolerance),

    OptionEntry::new("MipMaxNodes",             "MipMaxNodes",   Limits,  9999999.0,     0.0,  MAXINT, Int,   Id::MipMaxNodes),
    OptionEntry::new("MipMaxSolutions",         "MipMaxSol",     Limits,  9999999.0,     0.0,  MAXINT, Int,   Id::MipMaxSolutions),
    OptionEntry::new("MipMaxSeconds",           "MipMaxSec",     Limits,     1e100,      0.0, MAXREAL, Real,  Id::MipMaxSeconds),

    OptionEntry::new("MipFathomDiscipline",     "FathomDisc",    MipStrategy,  0.0,      0.0,     1.0, OnOff, Id::MipFathomDiscipline),
    OptionEntry::new("MipHotStart",             "HotStart",      MipStrategy,  0.0,      0.0,  MAXINT, Int,   Id::MipHotStart),
    OptionEntry::new("MipMinimumDrop",          "MinimumDrop",   MipStrategy, 1e-4,  -MAXINT,  MAXINT, Int,   Id::MipMinimumDrop),
    OptionEntry::new("MipMaxCutPasses",         "MaxCutPass",    MipStrategy,  2.0,  -MAXINT,  MAXINT, Int,   Id::MipMaxCutPasses),
    OptionEntry::new("MipMaxCutPassAtRoot",     "MaxPassRoot",   MipStrategy, 50.0,  -MAXINT,  MAXINT, Int,   Id::MipMaxCutPassAtRoot),
    OptionEntry::new("MipStrongBranching",      "StrongBranch",  MipStrategy,  5.0,      0.0,  MAXINT, Int,   Id::MipStrongBranching),
    OptionEntry::new("MipScanGlobalCuts",       "ScanGlobCuts",  MipStrategy,  1.0,      0.0,  MAXINT, Int,   Id::MipScanGlobalCuts),

    OptionEntry::new("MipIntegerTolerance",     "MipIntTol",     MipTolerance, 1e-6,     0.0,     1.0, Real,  Id::MipIntegerTolerance),
    OptionEntry::new("MipInfeasWeight",         "MipInfWeight",  MipTolerance,  0.0,     0.0, MAXREAL, Real,  Id::MipInfeasWeight),
    OptionEntry::new("MipCutoffIncrement",      "MipCutIncr",    MipTolerance, 1e-5,     0.0,     1.0, Real,  Id::MipCutoffIncrement),
    OptionEntry::new("MipAllowableGap",         "MipAbsGap",     MipTolerance, 1e-10,    0.0, MAXREAL, Real,  Id::MipAllowableGap),
    OptionEntry::new("MipFractionalGap",        "MipFracGap",    MipTolerance, 1e-10,    0.0,     1.0, Real,  Id::MipFractionalGap),

    OptionEntry::new("MipCutProbing",           "CutProbing",    MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCutProbing),
    OptionEntry::new("MipProbeFrequency",       "ProbeFreq",     MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipProbeFrequency),
    OptionEntry::new("MipProbeMode",            "ProbeMode",     MipCuts,      1.0,      0.0,     2.0, List,  Id::MipProbeMode),
    OptionEntry::new("MipProbeUseObjective",    "UseObject",     MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipProbeUseObjective),
    OptionEntry::new("MipProbeMaxPass",         "MaxPass",       MipCuts,      3.0,      0.0,  MAXINT, Int,   Id::MipProbeMaxPass),
    OptionEntry::new("MipProbeMaxProbe",        "MaxProbe",      MipCuts,    100.0,      0.0,  MAXINT, Int,   Id::MipProbeMaxProbe),
    OptionEntry::new("MipProbeMaxLook",         "MaxLook",       MipCuts,     50.0,      0.0,  MAXINT, Int,   Id::MipProbeMaxLook),
    OptionEntry::new("MipProbeRowCuts",         "RowCuts",       MipCuts,      3.0,      0.0,     3.0, List,  Id::MipProbeRowCuts),

    OptionEntry::new("MipCutGomory",            "CutGomory",     MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCutGomory),
    OptionEntry::new("MipGomoryFrequency",      "GomoryFreq",    MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipGomoryFrequency),
    OptionEntry::new("MipGomoryLimit",          "GomoryLimit",   MipCuts,     50.0,      1.0,  MAXINT, Int,   Id::MipGomoryLimit),
    OptionEntry::new("MipGomoryAway",           "GomoryAway",    MipCuts,     0.05,   0.0001,     0.5, Real,  Id::MipGomoryAway),

    OptionEntry::new("MipCutKnapsack",          "CutKnapsack",   MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCutKnapsack),
    OptionEntry::new("MipKnapsackFrequency",    "KnapsackFreq",  MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipKnapsackFrequency),
    OptionEntry::new("MipKnapsackMaxIn",        "KnapsackMaxIn", MipCuts,     50.0,      1.0,  MAXINT, Int,   Id::MipKnapsackMaxIn),

    OptionEntry::new("MipCutOddHole",           "CutOddHole",    MipCuts,      0.0,      0.0,     1.0, OnOff, Id::MipCutOddHole),
    OptionEntry::new("MipOddHoleFrequency",     "OddHoleFreq",   MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipOddHoleFrequency),
    OptionEntry::new("MipOddHoleMinViolation",  "MinViolation",  MipCuts,    0.001,  1.01e-8,     0.5, Real,  Id::MipOddHoleMinViolation),
    OptionEntry::new("MipOddHoleMinViolPer",    "MinViolPer",    MipCuts,   0.0003,  1.01e-8,    0.25, Real,  Id::MipOddHoleMinViolPer),
    OptionEntry::new("MipOddHoleMaxEntries",    "MaxEntries",    MipCuts,    100.0,      3.0,  MAXINT, Int,   Id::MipOddHoleMaxEntries),

    OptionEntry::new("MipCutClique",            "CutClique",     MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCutClique),
    OptionEntry::new("MipCliqueFrequency",      "CliqueFreq",    MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipCliqueFrequency),
    OptionEntry::new("MipCliquePacking",        "CliquePacking", MipCuts,      0.0,      0.0,     1.0, OnOff, Id::MipCliquePacking),
    OptionEntry::new("MipCliqueStar",           "CliqueStar",    MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCliqueStar),
    OptionEntry::new("MipCliqueStarMethod",     "StarMethod",    MipCuts,      2.0,      0.0,     2.0, List,  Id::MipCliqueStarMethod),
    OptionEntry::new("MipCliqueStarMaxLen",     "StarMaxLen",    MipCuts,     12.0,      0.0,  MAXINT, Int,   Id::MipCliqueStarMaxLen),
    OptionEntry::new("MipCliqueStarReport",     "StarReport",    MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCliqueStarReport),
    OptionEntry::new("MipCliqueRow",            "CliqueRow",     MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCliqueRow),
    OptionEntry::new("MipCliqueRowMaxLen",      "ClqRowMaxLen",  MipCuts,     12.0,      0.0,  MAXINT, Int,   Id::MipCliqueRowMaxLen),
    OptionEntry::new("MipCliqueRowReport",      "ClqRowReport",  MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipCliqueRowReport),
    OptionEntry::new("MipCliqueMinViolation",   "ClqMinViol",    MipCuts,     -1.0, -MAXREAL, MAXREAL, Real,  Id::MipCliqueMinViolation),

    OptionEntry::new("MipCutLiftAndProject",    "CutLiftPro",    MipCuts,      0.0,      0.0,     1.0, OnOff, Id::MipCutLiftAndProject),
    OptionEntry::new("MipLiftCoverFrequency",   "LiftProFreq",   MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipLiftCoverFrequency),
    OptionEntry::new("MipLiftCoverBetaOne",     "LiftProBeta",   MipCuts,      1.0,      0.0,     1.0, OnOff, Id::MipLiftCoverBetaOne),

    OptionEntry::new("MipCutSimpleRounding",    "CutSimpRound",  MipCuts,      0.0,      0.0,     1.0, OnOff, Id::MipCutSimpleRounding),
    OptionEntry::new("MipSimpleRoundFrequency", "SimpRoundFreq", MipCuts,     -1.0,  -MAXINT,  MAXINT, Int,   Id::MipSimpleRoundFrequency),

    OptionEntry::new("MipUseCbcMain",           "UseCbcMain",    MipStrategy,  1.0,      0.0,     1.0, OnOff, Id::MipUseCbcMain),
];

/// Per-handle option state: one current value and one changed flag per
/// table entry. A fresh registry starts at the table defaults with every
/// changed flag off; the flag latches on the first successful set and stays
/// on for the registry's lifetime.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    values: Vec<f64>,
    changed: Vec<bool>,
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionRegistry {
    /// Creates a registry at the table defaults.
    pub fn new() -> Self {
        OptionRegistry {
            values: OPTION_TABLE.iter().map(|e| e.default_value).collect(),
            changed: vec![false; OPTION_TABLE.len()],
        }
    }

    /// Number of entries in the option table.
    pub fn len(&self) -> usize {
        OPTION_TABLE.len()
    }

    /// Always false; the table is never empty.
    pub fn is_empty(&self) -> bool {
        OPTION_TABLE.is_empty()
    }

    /// A read-only view of the full descriptor table.
    pub fn entries(&self) -> &'static [OptionEntry] {
        &OPTION_TABLE
    }

    /// Table index of the given identifier (linear scan).
    pub fn locate(&self, id: OptionId) -> Option<usize> {
        OPTION_TABLE.iter().position(|e| e.id == id)
    }

    /// Descriptor of the given identifier.
    pub fn entry(&self, id: OptionId) -> Option<&'static OptionEntry> {
        self.locate(id).map(|i| &OPTION_TABLE[i])
    }

    /// Whether the option has been set since the registry was created.
    pub fn changed(&self, id: OptionId) -> bool {
        self.locate(id).map(|i| self.changed[i]).unwrap_or(false)
    }

    /// Current value of an integer-kind option; 0 for real-kind entries.
    pub fn int_option(&self, id: OptionId) -> i32 {
        match self.locate(id) {
            Some(i) if OPTION_TABLE[i].kind != OptionKind::Real => self.values[i] as i32,
            _ => 0,
        }
    }

    /// Sets an integer-kind option and latches its changed flag.
    ///
    /// Fails on real-kind entries, leaving value and flag untouched.
    pub fn set_int_option(&mut self, id: OptionId, value: i32) -> Result<(), Error> {
        let i = self.locate(id).ok_or(Error::UnknownOption(id.raw()))?;
        if OPTION_TABLE[i].kind == OptionKind::Real {
            return Err(Error::OptionKindMismatch {
                id,
                kind: OPTION_TABLE[i].kind,
            });
        }
        self.values[i] = value as f64;
        self.changed[i] = true;
        Ok(())
    }

    /// Current value of a real-kind option; 0.0 for other kinds.
    pub fn real_option(&self, id: OptionId) -> f64 {
        match self.locate(id) {
            Some(i) if OPTION_TABLE[i].kind == OptionKind::Real => self.values[i],
            _ => 0.0,
        }
    }

    /// Sets a real-kind option and latches its changed flag.
    ///
    /// Fails on non-real entries, leaving value and flag untouched.
    pub fn set_real_option(&mut self, id: OptionId, value: f64) -> Result<(), Error> {
        let i = self.locate(id).ok_or(Error::UnknownOption(id.raw()))?;
        if OPTION_TABLE[i].kind != OptionKind::Real {
            return Err(Error::OptionKindMismatch {
                id,
                kind: OPTION_TABLE[i].kind,
            });
        }
        self.values[i] = value;
        self.changed[i] = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_integrity() {
        assert_eq!(OPTION_TABLE.len(), 68);
        for (i, entry) in OPTION_TABLE.iter().enumerate() {
            assert!(
                entry.min_value <= entry.default_value && entry.default_value <= entry.max_value,
                "default of {} outside its range",
                entry.name
            );
            for other in &OPTION_TABLE[i + 1..] {
                assert_ne!(entry.id, other.id, "duplicate id for {}", entry.name);
            }
        }
    }

    #[test]
    fn id_round_trip() {
        for entry in &OPTION_TABLE {
            assert_eq!(OptionId::from_raw(entry.id.raw()), Some(entry.id));
        }
        assert_eq!(OptionId::from_raw(0), None);
        assert_eq!(OptionId::from_raw(999), None);
    }

    #[test]
    fn defaults_until_set() {
        let registry = OptionRegistry::new();
        assert!(!registry.changed(OptionId::Scaling));
        assert_eq!(registry.int_option(OptionId::Scaling), 3);
        assert_eq!(registry.real_option(OptionId::PrimalTolerance), 1e-7);
    }

    #[test]
    fn changed_flag_latches() {
        let mut registry = OptionRegistry::new();
        assert!(!registry.changed(OptionId::MipMaxNodes));
        registry.set_int_option(OptionId::MipMaxNodes, 1000).unwrap();
        assert!(registry.changed(OptionId::MipMaxNodes));
        assert_eq!(registry.int_option(OptionId::MipMaxNodes), 1000);
        // setting again keeps the flag on
        registry.set_int_option(OptionId::MipMaxNodes, 2000).unwrap();
        assert!(registry.changed(OptionId::MipMaxNodes));
    }

    #[test]
    fn registries_are_independent() {
        let mut first = OptionRegistry::new();
        first.set_int_option(OptionId::LogLevel, 0).unwrap();
        let second = OptionRegistry::new();
        assert!(!second.changed(OptionId::LogLevel));
        assert_eq!(second.int_option(OptionId::LogLevel), 1);
    }

    #[test]
    fn int_set_on_real_entry_fails() {
        let mut registry = OptionRegistry::new();
        let err = registry
            .set_int_option(OptionId::MaxSeconds, 60)
            .unwrap_err();
        assert!(matches!(err, Error::OptionKindMismatch { .. }));
        assert!(!registry.changed(OptionId::MaxSeconds));
        assert_eq!(registry.real_option(OptionId::MaxSeconds), -1.0);
    }

    #[test]
    fn real_set_on_int_entry_fails() {
        let mut registry = OptionRegistry::new();
        let err = registry
            .set_real_option(OptionId::MipMaxNodes, 10.0)
            .unwrap_err();
        assert!(matches!(err, Error::OptionKindMismatch { .. }));
        assert!(!registry.changed(OptionId::MipMaxNodes));
        assert_eq!(registry.int_option(OptionId::MipMaxNodes), 9999999);
    }

    #[test]
    fn kind_mismatch_reads_yield_sentinels() {
        let registry = OptionRegistry::new();
        // real accessor on an integer entry and vice versa
        assert_eq!(registry.real_option(OptionId::MipMaxNodes), 0.0);
        assert_eq!(registry.int_option(OptionId::MaxSeconds), 0);
    }

    #[test]
    fn locate_is_table_order() {
        let registry = OptionRegistry::new();
        assert_eq!(registry.locate(OptionId::SolveMethod), Some(0));
        assert_eq!(registry.locate(OptionId::MipUseCbcMain), Some(67));
        assert_eq!(
            registry.entry(OptionId::MipGomoryAway).unwrap().name,
            "MipGomoryAway"
        );
    }
}
