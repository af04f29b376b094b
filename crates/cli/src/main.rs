use std::process::ExitCode;

mod command;

fn main() -> ExitCode {
    command::Command::run()
}
