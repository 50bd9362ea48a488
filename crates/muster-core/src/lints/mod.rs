pub(crate) mod no_box_flex;
pub(crate) mod no_empty_lines_in_objects;
pub(crate) mod no_empty_sx;
pub(crate) mod no_non_jsdoc_comments;
pub(crate) mod no_relative_imports;
pub(crate) mod no_theme_breakpoints_in_sx;
