use std::{fs, io::Read, process::ExitCode};

use clap::Parser;
use fracta::get_result;

/// fracta runs scripts with exact fraction arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path and run that file.
    #[arg(short, long)]
    file: bool,

    /// Print the final value of the script after it runs.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script itself, or a path with --file. Read from stdin when
    /// omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn read_script(args: &Args) -> Result<String, String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            fs::read_to_string(path).map_err(|e| format!("Cannot open script file '{path}': {e}"))
        },
        (Some(script), false) => Ok(script.clone()),
        (None, true) => Err("No script file was named.".to_string()),
        (None, false) => {
            let mut script = String::new();
            std::io::stdin().read_to_string(&mut script)
                            .map_err(|e| format!("Cannot read a script from stdin: {e}"))?;
            Ok(script)
        },
    }
}
