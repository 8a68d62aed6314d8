pub mod chartjs_ffi;

pub use chartjs_ffi::*;
