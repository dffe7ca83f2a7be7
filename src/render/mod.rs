pub(crate) mod background;
pub(crate) mod compositor;
pub(crate) mod decor;
pub(crate) mod drawable;
pub(crate) mod fingerprint;
pub(crate) mod text;
pub(crate) mod transition;
