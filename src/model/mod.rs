pub mod config;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod section;
pub mod skill;

pub use config::*;
pub use portfolio::*;
pub use profile::*;
pub use project::*;
pub use section::*;
pub use skill::*;
