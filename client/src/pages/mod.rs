//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped signals (filter selection, open modal,
//! Venn selection) and delegates rendering details to `components`.

pub mod art;
pub mod home;
pub mod hyperfixation_detail;
pub mod hyperfixations;
pub mod japanese;
pub mod not_found;
pub mod proof_detail;
pub mod proofs;
pub mod venn;
pub mod youtube;
