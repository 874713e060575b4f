pub(crate) mod playground;
