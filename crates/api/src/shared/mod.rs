pub mod args;
pub mod usecase;
