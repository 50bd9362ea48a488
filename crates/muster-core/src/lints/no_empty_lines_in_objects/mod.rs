pub(crate) mod no_empty_lines_in_objects;
