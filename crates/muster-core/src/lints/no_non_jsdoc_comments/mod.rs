pub(crate) mod no_non_jsdoc_comments;
