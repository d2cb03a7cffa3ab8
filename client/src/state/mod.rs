//! Local UI state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with pure transition methods. Pages wrap
//! them in `RwSignal` and call the methods from event handlers, so the rules
//! stay testable without a browser or a reactive runtime.

pub mod filter;
pub mod home;
pub mod venn;
