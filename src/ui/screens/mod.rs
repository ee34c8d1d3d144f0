pub(crate) mod about;
pub(crate) mod loading;
pub(crate) mod plan;
