//! The detection module is responsible for locating Solidity constructs that
//! anchor transform insertions (pragma line, contract header, event and
//! constructor declarations, modifiers, function signatures).
//!
//! Every locator is a pure function over the raw source text: it returns
//! spans or parsed declarations and never mutates. Zero occurrences are
//! reported as `None`/empty so callers can skip a step instead of failing
//! the run.

pub mod anchors;
pub mod declarations;

pub use anchors::{ContractHeader, contract_header, import_paths, pragma_line};

pub use declarations::{
    ConstructorDecl, EventDecl, FunctionDecl, ModifierDecl, StateVarDecl, constructor_decl,
    event_declarations, function_declarations, modifier_declarations, state_variable_decls,
};
