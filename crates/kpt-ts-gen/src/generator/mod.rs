pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod errors;
pub(crate) mod metrics;
pub(crate) mod naming;
pub mod orchestrator;

#[cfg(test)]
mod tests;
