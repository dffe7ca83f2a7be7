pub(crate) mod color;
pub(crate) mod design;
pub(crate) mod registry;
