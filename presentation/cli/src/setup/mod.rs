pub mod cli;
pub mod dependency_injection;
pub mod output;
