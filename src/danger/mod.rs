//! Danger assessment: pure computations turning world snapshots into
//! comparable danger levels on a shared 0-10 scale.
//!
//! Each function reads an immutable snapshot and returns a scalar; nothing
//! here blocks, allocates global state, or mutates its inputs, so every
//! entry point is safe to call concurrently.

pub mod faction;
pub mod location;
pub mod travel;
pub mod wildlife;
