use clap::Parser;
use colored::Colorize;
use routeguard_core::cli::{self, Cli, Session};
use routeguard_core::exit::RouteGuardExit;

fn main() -> RouteGuardExit {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        return RouteGuardExit::from(Cli::command().print_help());
    };

    let result = Session::open(&cli.config_dir)
        .and_then(|session| cli::dispatch::execute(&session, command));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            RouteGuardExit::from_error(&e)
        }
    }
}
