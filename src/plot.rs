pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod field;
pub(crate) mod model;
pub(crate) mod pipeline;
pub(crate) mod scene;
