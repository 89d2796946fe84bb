use clap::Parser;
use panelscope_cli::errors::ErrorHandler;
use panelscope_cli::structs::cli::Cli;
use panelscope_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
