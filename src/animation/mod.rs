pub(crate) mod frame_loop;
pub(crate) mod refresh;
