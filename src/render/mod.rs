pub(crate) mod checkerboard;
pub(crate) mod cpu;
pub(crate) mod recording;
pub(crate) mod surface;
