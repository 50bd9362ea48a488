pub(crate) mod no_theme_breakpoints_in_sx;
