//! Scans one of the built-in equations and logs what the scanner did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example log
//! cargo run --example log -- complex
//! cargo run --example log -- simple trace
//! ```
//!
//! The first argument picks the equation (`default`, `simple`, or `complex`),
//! the second sets the log level (`info` unless given).

use std::error::Error;

use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use rootscan_equation::PowerSine;
use rootscan_observers::LogObserver;
use rootscan_solvers::scan;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let equation = match args.next().as_deref() {
        None | Some("default") => PowerSine::default(),
        Some("simple") => PowerSine::simple(),
        Some("complex") => PowerSine::complex(),
        Some(other) => return Err(format!("unknown equation: {other}").into()),
    };
    let level = match args.next() {
        Some(level) => level.parse()?,
        None => LevelFilter::Info,
    };

    TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let range = [-5.0, 5.0];
    let config = scan::Config::default();
    let report = scan::find_all_roots(&equation, range, &config, LogObserver::default())?;

    println!("{equation}");
    for line in &report.log {
        println!("{line}");
    }
    for (root, residual) in report.roots.iter().zip(report.residuals(&equation)?) {
        println!("  f({:.8}) = {residual:e}", root.x);
    }

    Ok(())
}
