use clap::Parser;
use hd_core::cli::{run, Cli};
use hd_core::exit_codes::ExitCode;
use hd_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let code = match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::Success
        }
        Err(err) => {
            eprintln!("heredity: {err}");
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}
