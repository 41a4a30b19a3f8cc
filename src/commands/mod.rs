pub mod correct;

pub use correct::{run_correct, CorrectArgs};
