//! Command-line front end for option verification.
//!
//! [`Cli`] mirrors the raptor flags that feed [`RaptorOptions`], and
//! [`ClapDiagnostics`] reports usage errors through clap so they look and
//! exit like any other argument error.

use clap::{Command, Parser, error::ErrorKind};

use crate::options::{
    app::App, config::RaptorOptions, diagnostics::Diagnostics, error::OptionsError,
};

#[derive(Parser, Debug)]
#[command(name = "raptor-verify")]
#[command(about = "Verify raptor command-line options before a run")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Name of the application to test
    #[arg(long, value_enum, default_value = "firefox")]
    pub app: App,

    /// Path to the browser executable, or the package name on Android
    // Values must be UTF-8; clap rejects anything else before verification.
    #[arg(short, long)]
    pub binary: Option<String>,

    /// Name of the Android activity to launch
    #[arg(long)]
    pub activity: Option<String>,

    /// Name of the Android intent action used to launch the activity
    #[arg(long)]
    pub intent: Option<String>,

    /// Profile the run with the Gecko profiler
    #[arg(long)]
    pub gecko_profile: bool,

    /// Run in debug mode
    #[arg(long)]
    pub debug_mode: bool,

    /// Disable Fission (site isolation)
    #[arg(long)]
    pub disable_fission: bool,

    /// Enable Fission on Android
    #[arg(long)]
    pub enable_fission_mobile: bool,

    /// Test the JavaScript bytecode cache
    #[arg(long)]
    pub test_bytecode_cache: bool,

    /// Use the web-extension based harness
    #[arg(long)]
    pub webext: bool,

    /// Run cold and warm page loads in the same browser session
    #[arg(long)]
    pub chimera: bool,

    /// Record video of page loads
    #[arg(long)]
    pub browsertime_video: bool,

    /// Compute visual metrics from recorded video
    #[arg(long)]
    pub browsertime_visualmetrics: bool,

    /// Preference override, repeatable
    #[arg(long = "setpref", value_name = "NAME=VALUE")]
    pub extra_prefs: Vec<String>,

    /// How many times to load each page
    #[arg(long)]
    pub page_cycles: Option<u32>,

    /// Page load timeout in milliseconds
    #[arg(long)]
    pub page_timeout: Option<u64>,

    /// Milliseconds to wait after browser startup
    #[arg(long)]
    pub post_startup_delay: Option<u64>,

    /// Repository holding the benchmark sources
    #[arg(long)]
    pub benchmark_repository: Option<String>,

    /// Benchmark repository revision
    #[arg(long)]
    pub benchmark_revision: Option<String>,

    /// Benchmark repository branch
    #[arg(long)]
    pub benchmark_branch: Option<String>,

    /// The binary under test is a release build
    #[arg(long)]
    pub release_build: bool,

    /// Hostname the device is reachable on
    #[arg(long)]
    pub host: Option<String>,
}

impl From<Cli> for RaptorOptions {
    fn from(cli: Cli) -> Self {
        RaptorOptions {
            app: cli.app,
            binary: cli.binary,
            activity: cli.activity,
            intent: cli.intent,
            gecko_profile: cli.gecko_profile,
            debug_mode: cli.debug_mode,
            fission: !cli.disable_fission,
            fission_mobile: cli.enable_fission_mobile,
            test_bytecode_cache: cli.test_bytecode_cache,
            webext: cli.webext,
            chimera: cli.chimera,
            browsertime_video: cli.browsertime_video,
            browsertime_visualmetrics: cli.browsertime_visualmetrics,
            is_release_build: cli.release_build,
            extra_prefs: cli.extra_prefs,
            page_cycles: cli.page_cycles,
            page_timeout: cli.page_timeout,
            post_startup_delay: cli.post_startup_delay,
            benchmark_repository: cli.benchmark_repository,
            benchmark_revision: cli.benchmark_revision,
            benchmark_branch: cli.benchmark_branch,
            host: cli.host,
        }
    }
}

/// Reports usage errors as clap validation errors and exits.
pub struct ClapDiagnostics {
    command: Command,
}

impl ClapDiagnostics {
    pub fn new(command: Command) -> Self {
        ClapDiagnostics { command }
    }
}

impl Diagnostics for ClapDiagnostics {
    fn usage_error(&mut self, error: &OptionsError) {
        self.command.error(ErrorKind::ValueValidation, error).exit()
    }
}
