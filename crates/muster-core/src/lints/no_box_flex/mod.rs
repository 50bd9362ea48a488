pub(crate) mod no_box_flex;
