//! Page window computation and navigation targets

mod boundary;
mod calculator;

pub use boundary::{
    clamp_page, compute_boundary_flags, first_page, last_page, next_page, prev_page,
    BoundaryFlags,
};
pub use calculator::{compute_window, PageWindow};
