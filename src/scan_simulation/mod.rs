/// Scan simulation - the domain core
///
/// Pure business logic for generating simulated scan snapshots and deriving
/// analysis reports from them. Nothing in this layer performs I/O.
pub mod domain;
pub mod services;
