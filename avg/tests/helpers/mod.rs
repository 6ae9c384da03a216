//! Helpers to run the `avg` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct AvgRun {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl AvgRun {
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// The path of a file in the `tests/data` directory.
pub(crate) fn data_file(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Runs `avg` with the given arguments. When `input` is given it is written to the standard input
/// of the process, otherwise the standard input is empty.
///
/// The output streams are redirected to files named after `test_name`, which are removed again
/// once they are read.
pub(crate) fn run_avg<'a>(
    test_name: &str,
    args: impl IntoIterator<Item = &'a str>,
    input: Option<&str>,
) -> AvgRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let avg = PathBuf::from(env!("CARGO_BIN_EXE_avg"));

    let tmp_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let log_file_path = tmp_dir.join(format!("{test_name}.log"));
    let err_file_path = tmp_dir.join(format!("{test_name}.err"));

    let mut command = Command::new(avg);

    for arg in args {
        let _ = command.arg(arg);
    }

    let stdin = if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };

    let mut child = command
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(stdin)
        .spawn()
        .expect("Failed to run avg.");

    if let Some(input) = input {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        // The process may exit before reading anything, e.g. on a configuration error.
        let _ = child_stdin.write_all(input.as_bytes());
    }

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("avg took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error waiting for avg: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");

    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    AvgRun {
        status,
        stdout,
        stderr,
    }
}
