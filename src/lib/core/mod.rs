pub mod error;
pub mod errors;
pub mod fs;

pub mod prelude {
    pub use super::error::{GapcorError, Result};
    pub use super::errors::is_broken_pipe;
    pub use super::fs::{ensure_dir, make_parent_dirs};
}
