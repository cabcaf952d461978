//! Sample triage reports used by the command-line demos.

pub mod occupational;
pub mod psychosocial;
pub mod run_all;
pub mod shared;

pub use occupational::run as run_occupational;
pub use psychosocial::run as run_psychosocial;
pub use run_all::run as run_all_demos;
