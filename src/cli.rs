// src/cli.rs
use std::sync::Arc;

use clap::Parser;

use crate::config::options::AppOptions;
use crate::core::HttpBrowser;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::scrape::Credentials;

/// Merge registrant, competition and lodging pages of the registration portal
/// into one report.
#[derive(Parser, Debug)]
#[command(name = "reg_scrape", version, about, long_about = None)]
pub struct Args {
    /// Portal login (e-mail)
    #[arg(long, env = "REG_SCRAPE_USER")]
    pub user: String,

    /// Portal password
    #[arg(long, env = "REG_SCRAPE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Write result.json
    #[arg(long)]
    pub json: bool,

    /// Write result.csv
    #[arg(long)]
    pub csv: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.export.json = self.json;
        opts.export.csv = self.csv;
        opts
    }

    pub fn credentials(&self) -> Credentials {
        Credentials { user: self.user.clone(), password: self.password.clone() }
    }
}

pub async fn run(args: Args) -> Result<RunSummary> {
    let opts = args.options();
    let browser = Arc::new(HttpBrowser::new(&opts.site)?);
    let mut progress = ConsoleProgress::default();
    runner::run(browser, &opts, &args.credentials(), &mut progress).await
}

/// Status lines on stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total += total;
    }

    fn log(&mut self, msg: &str) {
        println!("🕐 {msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        if self.total > 0 {
            println!("   [{}/{}] {label}", self.done, self.total);
        } else {
            println!("   {label}");
        }
    }

    fn finish(&mut self) {
        println!("✔️ Done");
        self.total = 0;
        self.done = 0;
    }
}
