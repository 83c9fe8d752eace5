mod algorithm;
mod elbow;
mod errors;
mod hyperparams;
mod init;
mod profile;
mod result;

pub use algorithm::*;
pub use elbow::*;
pub use errors::*;
pub use hyperparams::*;
pub use init::*;
pub use profile::*;
pub use result::*;
