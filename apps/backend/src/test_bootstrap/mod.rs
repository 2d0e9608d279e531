//! Test-only bootstrap helpers (compiled under `cfg(test)`).

pub mod logging;
