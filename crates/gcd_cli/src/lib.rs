pub mod analyzer;
pub mod cli;
pub mod interactive;
pub mod report;
pub mod session;
