//! Service layer implementing the scheduling pipeline.
//!
//! Each stage is a pure function over immutable value types, independently
//! testable, composed left to right: base rotation generation, override
//! application, coalescing.

pub mod coalesce;
pub mod overrides;
pub mod rotation;
pub mod timeline;

pub use coalesce::merge_adjacent;
pub use overrides::apply_overrides;
pub use rotation::generate_base_schedule;
pub use timeline::compute_schedule;
