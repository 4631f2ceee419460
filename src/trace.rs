pub(crate) mod flag;
pub(crate) mod loader;
