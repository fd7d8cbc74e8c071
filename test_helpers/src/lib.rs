//! Test helpers shared across crates.
//!
//! [`cwd`] runs closures from another working directory under a global
//! lock. [`job_dir`] builds throwaway job directories on top of it.

pub mod cwd;
pub mod job_dir;
