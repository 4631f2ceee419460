pub(crate) mod corners;
pub(crate) mod envelope;
