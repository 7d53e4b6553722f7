pub mod detection;
pub mod result;
pub mod scanner;
pub mod source;

pub use result::{Error, Result};
pub use scanner::Span;
pub use source::ContractSource;

/// High-level convenience function to load a contract file into a source
/// model ready for patching.
///
/// Equivalent to [`ContractSource::load`]; exists so pipeline callers can
/// depend on a single free function next to the detection entry points.
pub fn load_contract(path: impl AsRef<std::path::Path>) -> Result<ContractSource> {
    ContractSource::load(path)
}
