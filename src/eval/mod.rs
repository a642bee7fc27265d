pub mod check;

pub use check::{check_pass, fail_rate};
