pub(crate) mod dashboard;
pub(crate) mod identity;
pub(crate) mod panels;
pub(crate) mod switchable;
