pub mod binder;
pub mod symboltable;
