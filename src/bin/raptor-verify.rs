use clap::{CommandFactory, Parser};
use raptor_cmdline::{
    cli::{Cli, ClapDiagnostics},
    options::{config::RaptorOptions, diagnostics::USAGE_EXIT_CODE},
};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut diagnostics = ClapDiagnostics::new(Cli::command());
    let mut options = RaptorOptions::from(cli);
    if options.verify(&mut diagnostics).is_err() {
        // ClapDiagnostics exits before this is reached
        std::process::exit(USAGE_EXIT_CODE);
    }

    println!("app={}", options.app);
    println!("binary={}", options.binary.as_deref().unwrap_or_default());
    println!("activity={}", options.activity.as_deref().unwrap_or_default());
    println!("intent={}", options.intent.as_deref().unwrap_or_default());
}
