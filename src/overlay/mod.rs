pub(crate) mod disputed;
