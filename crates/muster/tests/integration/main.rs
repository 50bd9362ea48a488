mod allow_no_vcs;
mod output_format;
mod rules;
mod toml;
