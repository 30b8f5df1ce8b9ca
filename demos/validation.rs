//! Example: Option verification with process-exit diagnostics
use raptor_cmdline::options::{
    app::App, config::RaptorOptions, diagnostics::ExitDiagnostics,
};

fn main() {
    let mut diagnostics = ExitDiagnostics::new("validation");

    let mut options = RaptorOptions::new(App::Geckoview).binary("org.mozilla.geckoview_example");
    if options.verify(&mut diagnostics).is_ok() {
        println!("Mobile options accepted, activity: {:?}", options.activity);
    }

    // Invalid: desktop binary does not exist, exits with status 2
    let mut options = RaptorOptions::new(App::Firefox).binary("invalid/path");
    let _ = options.verify(&mut diagnostics);
    println!("Desktop options accepted");
}
