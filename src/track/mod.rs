pub(crate) mod config;
pub(crate) mod data;
pub(crate) mod fetch;
pub(crate) mod registry;
pub(crate) mod resolution;
pub(crate) mod vsync;
