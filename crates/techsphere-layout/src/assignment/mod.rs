//! Stable slot pool and sparse content assignment.
//!
//! The pool is built from the whole catalog and never changes while the
//! catalog and view mode stay the same. An [`Assignment`] is rebuilt from
//! scratch on every filter or view-mode change and fills slots `0..visible`
//! in filtered order; all other slots are hidden but keep their pool
//! geometry.

mod mapper;
mod slots;


pub use mapper::*;
pub use slots::*;
