pub(crate) mod no_relative_imports;
