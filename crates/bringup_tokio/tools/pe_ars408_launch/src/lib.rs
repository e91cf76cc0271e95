//! pe_ars408_launch
//!
//! Launch composition for the `pe_ars408_node` radar driver plus automatic
//! lifecycle bring-up (configure on process start, activate once configured).

pub mod config;
pub mod launch;
