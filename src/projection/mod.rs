pub(crate) mod composite;
pub(crate) mod fit;
pub(crate) mod raw;
pub(crate) mod select;
