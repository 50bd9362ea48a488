use std::fmt::Display;
use std::process::Command;
use std::process::ExitStatus;

pub trait CommandExt {
    /// Executes the command as a child process, waiting for it to finish and collecting all of its output.
    ///
    /// Like [Command::output], but also collects arguments
    fn run(&mut self) -> Output;
}

/// Like [std::process::Output], but augmented with `arguments` and a few extra methods
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub arguments: String,
}

impl Output {
    /// Normalize executable name for cross OS stability
    pub fn normalize_os_executable_name(self) -> Self {
        Self {
            status: self.status,
            stdout: self.stdout.replace("muster.exe", "muster"),
            stderr: self.stderr.replace("muster.exe", "muster"),
            arguments: self.arguments.replace("muster.exe", "muster"),
        }
    }

    /// Exit code of the process, `-1` if it was killed by a signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    /// stdout without ANSI codes and with `/` as path separator.
    pub fn clean_stdout(&self) -> String {
        strip_ansi_escape_codes(&self.stdout).replace('\\', "/")
    }

    /// stderr without ANSI codes and with `/` as path separator.
    pub fn clean_stderr(&self) -> String {
        strip_ansi_escape_codes(&self.stderr).replace('\\', "/")
    }
}

/// Strip ANSI escape codes from a string
fn strip_ansi_escape_codes(s: &str) -> String {
    // This regex matches ANSI escape sequences
    use regex::Regex;
    let ansi_regex = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    ansi_regex.replace_all(s, "").to_string()
}

impl CommandExt for Command {
    fn run(&mut self) -> Output {
        // Colors are disabled so that assertions can match plain text.
        self.env("NO_COLOR", "1");

        // Augment `std::process::Output` with the arguments
        let output = self.output().unwrap();

        // Go ahead and turn these into `String`
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let arguments: Vec<String> = self
            .get_args()
            .map(|x| x.to_string_lossy().into_owned())
            .collect();

        let arguments = arguments.join(" ");

        Output { status: output.status, stdout, stderr, arguments }
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "
success: {:?}
exit_code: {}
----- stdout -----
{}
----- stderr -----
{}
----- args -----
{}",
            self.status.success(),
            self.code(),
            self.clean_stdout(),
            self.clean_stderr(),
            self.arguments,
        ))
    }
}
