//! # raptor-cmdline
//!
//! Verification of raptor command-line options before a browser
//! performance run starts.
//!
//! Desktop apps (`firefox`, `chrome`, `chromium`) must point `--binary` at an
//! existing executable. Android apps (`geckoview`, `refbrow`, `fenix`,
//! `chrome-m`) pass a package name instead, and get their default activity
//! when `--activity` is omitted. Everything else is accepted as given.
//!
//! ## Quick Start
//!
//! ```rust
//! use raptor_cmdline::options::{
//!     app::App, config::RaptorOptions, diagnostics::RecordingDiagnostics,
//! };
//!
//! let mut diagnostics = RecordingDiagnostics::new();
//! let mut options = RaptorOptions::new(App::Geckoview)
//!     .binary("org.mozilla.geckoview_example")
//!     .intent("android.intent.action.MAIN");
//!
//! options.verify(&mut diagnostics).unwrap();
//! assert_eq!(
//!     options.activity.as_deref(),
//!     Some("org.mozilla.geckoview_example.GeckoViewActivity")
//! );
//! ```
//!
//! ## Diagnostics
//!
//! Rejections go through a [`Diagnostics`](options::diagnostics::Diagnostics)
//! handle. [`ExitDiagnostics`](options::diagnostics::ExitDiagnostics) and the
//! clap-backed `ClapDiagnostics` terminate the process with status 2;
//! [`RecordingDiagnostics`](options::diagnostics::RecordingDiagnostics) only
//! records the message, so the rejection surfaces as an `Err`.
//!
//! ## Optional Features
//!
//! - `cli` (default): clap front end and the `raptor-verify` binary
//! - `serde`: Enable serialization support for the options record
//! - `tracing`: Enable structured logging integration

#[cfg(feature = "cli")]
pub mod cli;
pub mod options;
