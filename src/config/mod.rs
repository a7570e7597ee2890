pub mod proc_loader;
pub mod proc_validator;
pub mod readers;
pub mod settings;
