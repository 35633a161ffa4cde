pub mod errors;
pub mod output;
pub mod seq;
mod runner;

use crate::errors::FastaError;

pub fn run() -> Result<(), FastaError> {
    runner::run()
}
