pub(crate) mod no_empty_sx;
