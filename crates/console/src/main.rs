//! Smart Roadster Kiosk - Console Entry Point
//!
//! Reads console snapshots as JSON lines on stdin and writes one view per
//! line to stdout. Usage: `kiosk-console [config-path]`.
//!
//! `kiosk-console mandan [config-path]` instead prints one mandan round
//! (random idle pose plus routine request) and exits.

use console::{dispatch, init_logging, ConsoleConfig, ConsoleSession};
use expression::NarrationRequest;
use telemetry::ConsoleSnapshot;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1).peekable();
    let mandan = args.next_if(|arg| arg.as_str() == "mandan").is_some();
    let config_path = args.next().unwrap_or_else(|| "kiosk".to_string());
    let config = ConsoleConfig::load(&config_path)?;
    init_logging(&config.log_level)?;

    info!("=== Smart Roadster Kiosk v{} ===", env!("CARGO_PKG_VERSION"));

    if mandan {
        let session = ConsoleSession::new(&config, |_request: NarrationRequest| {});
        let stage = session.mandan_stage(&mut rand::thread_rng());
        info!("mandan_generate {}", serde_json::to_string(&stage.request)?);
        println!("{}", serde_json::to_string(&stage)?);
        return Ok(());
    }

    let (sink, receiver) = dispatch::channel(config.channel_capacity);
    let dispatcher = dispatch::spawn_dispatcher(receiver);
    let mut session = ConsoleSession::new(&config, sink);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let snapshot = match ConsoleSnapshot::from_json(&line) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Skipping snapshot: {}", e);
                continue;
            }
        };

        let view = session.evaluate(&snapshot);
        let mut json = serde_json::to_string(&view)?;
        json.push('\n');
        stdout.write_all(json.as_bytes()).await?;
        stdout.flush().await?;
    }

    let cycles = session.cycles();
    // Dropping the session closes the narration channel
    drop(session);
    let narrated = dispatcher.await?;
    info!("Input closed after {} snapshots, {} narrations", cycles, narrated);

    Ok(())
}
