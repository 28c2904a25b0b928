mod io;
pub mod matrix;

pub use io::{Args, enumerate_input_files, read_expected_totals};
pub use matrix::Matrix;

pub use clap::Parser;
