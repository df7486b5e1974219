pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod progress;
pub(crate) mod record;
pub(crate) mod surface;
