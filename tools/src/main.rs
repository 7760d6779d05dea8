//! desk-viewer: terminal front end for the customer table.
//!
//! Usage:
//!   desk-viewer --data-dir ./data --filter private --sort annualIncome:desc
//!   desk-viewer --data-dir ./data --page 2 --page-size 20 --lang fr --theme dark --color
//!   desk-viewer --data-dir ./data --detail 17
//!   desk-viewer --data-dir ./data --ipc-mode
//!   desk-viewer --generate 120 --seed 7 --out ./data

use anyhow::{Context, Result};
use clientdesk_core::{
    command::ViewerCommand,
    config::ViewerConfig,
    dataset::load_merged,
    render::render_table,
    sample::SampleGenerator,
    session::ViewerSession,
    table::{SortDirection, SortState},
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Some(count) = flag_value(&args, "--generate") {
        let count: usize = count.parse().context("--generate expects a row count")?;
        let seed = parse_arg(&args, "--seed", 42u64);
        let out = PathBuf::from(flag_value(&args, "--out").unwrap_or("./data"));
        let data = SampleGenerator::new(seed).generate(count);
        data.write_to(&out)?;
        println!("desk-viewer: sample data");
        println!("  seed:          {seed}");
        println!("  customers:     {}", data.customers.len());
        println!("  portfolios:    {}", data.portfolios.len());
        println!("  risk profiles: {}", data.risk_profiles.len());
        println!("  out:           {}", out.display());
        return Ok(());
    }

    let config = build_config(&args)?;
    let rows = load_merged(&config)
        .with_context(|| format!("loading data from {}", config.data_dir.display()))?;
    let mut session = ViewerSession::with_config(rows, &config)?;

    if args.iter().any(|a| a == "--ipc-mode") {
        return run_ipc_loop(&mut session);
    }

    for cmd in startup_commands(&args)? {
        session.apply(cmd)?;
    }

    let colour = args.iter().any(|a| a == "--color");
    print!("{}", render_table(&session.snapshot(), colour)?);
    Ok(())
}

/// Config file first, then command-line overrides.
fn build_config(args: &[String]) -> Result<ViewerConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = flag_value(args, "--data-dir") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(size) = flag_value(args, "--page-size") {
        config.page_size = size.parse().context("--page-size expects a number")?;
    }
    if let Some(lang) = flag_value(args, "--lang") {
        config.locale = lang.parse()?;
    }
    if let Some(theme) = flag_value(args, "--theme") {
        config.theme = theme.parse()?;
    }
    Ok(config)
}

/// Translate one-shot flags into the same commands the IPC loop accepts.
fn startup_commands(args: &[String]) -> Result<Vec<ViewerCommand>> {
    let mut cmds = Vec::new();
    if let Some(text) = flag_value(args, "--filter") {
        cmds.push(ViewerCommand::SetFilter { text: text.to_string() });
    }
    if let Some(sort_arg) = flag_value(args, "--sort") {
        let sort = SortState::parse(sort_arg)?;
        cmds.push(ViewerCommand::SetSort {
            column: sort.column,
            desc: sort.direction == SortDirection::Desc,
        });
    }
    if let Some(page) = flag_value(args, "--page") {
        let page: usize = page.parse().context("--page expects a number")?;
        cmds.push(ViewerCommand::GotoPage {
            index: page.saturating_sub(1),
        });
    }
    if let Some(client_id) = flag_value(args, "--detail") {
        cmds.push(ViewerCommand::ViewPortfolios {
            client_id: client_id.to_string(),
        });
    }
    Ok(cmds)
}

fn run_ipc_loop(session: &mut ViewerSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&buffer) {
            Ok(v) => v,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let kind = request["type"].as_str().map(str::to_owned);
        match kind.as_deref() {
            Some("quit") => break,
            Some("get_state") => {}
            _ => {
                let outcome = serde_json::from_value::<ViewerCommand>(request)
                    .map_err(anyhow::Error::from)
                    .and_then(|cmd| session.apply(cmd).map_err(anyhow::Error::from));
                if let Err(e) = outcome {
                    log::warn!("ipc: rejected command: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            }
        }

        writeln!(stdout, "{}", serde_json::to_string(&session.snapshot())?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
