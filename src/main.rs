use gopuml::{
    cli::{Args, Command},
    error::ErrorSeverity,
};
use std::process;

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Run the command and map the outcome to an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}
