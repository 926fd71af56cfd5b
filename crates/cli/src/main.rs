use anyhow::{Context, Result};
use clap::Parser;
use ez_paster_core::{
    EzPaster, LaunchOptions,
    config::ConfigBuilder,
    ui::{CaptureTrigger, capture_channel},
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image files to open on the first draft
    files: Vec<PathBuf>,

    /// Start a region capture as soon as the window opens
    #[arg(long)]
    capture: bool,

    /// Initial zoom factor (clamped to 0.1..=5.0)
    #[arg(long)]
    zoom: Option<f32>,

    /// Delay between hiding the window and sampling the screen
    #[arg(long)]
    capture_delay_ms: Option<u64>,

    /// Also listen for F11 while other applications have focus
    #[arg(long)]
    global_hotkey: bool,

    /// List available monitors and exit
    #[arg(long)]
    list_monitors: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Loads `.env` too, so it runs before the logger reads RUST_LOG.
    let mut builder = ConfigBuilder::from_env().context("Failed to load configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Some(zoom) = args.zoom {
        builder = builder.initial_zoom(zoom);
    }
    if let Some(ms) = args.capture_delay_ms {
        builder = builder.capture_delay(Duration::from_millis(ms));
    }
    if args.global_hotkey {
        builder = builder.global_hotkey(true);
    }
    let config = builder.build().context("Invalid configuration")?;
    log::debug!("{config:?}");

    let app = EzPaster::with_config(config);

    if args.list_monitors {
        println!("Available monitors:");
        for info in app.list_monitors().context("Failed to enumerate monitors")? {
            println!("{}", info);
        }
        return Ok(());
    }

    let requests = if app.config().global_hotkey {
        let (trigger, requests) = capture_channel();
        spawn_hotkey_listener(trigger).context("Failed to start the global hotkey listener")?;
        Some(requests)
    } else {
        None
    };

    app.run(LaunchOptions {
        files: args.files,
        capture_on_start: args.capture,
        requests,
    })
    .context("Failed to run the scratchpad window")?;

    Ok(())
}

/// Forwards F11 presses from anywhere on the desktop to the UI.
///
/// The thread is detached; it ends with the process.
fn spawn_hotkey_listener(trigger: CaptureTrigger) -> std::io::Result<()> {
    thread::Builder::new()
        .name("global-hotkey".into())
        .spawn(move || {
            let result = rdev::listen(move |event| {
                if let rdev::EventType::KeyPress(rdev::Key::F11) = event.event_type {
                    if !trigger.fire() {
                        log::debug!("capture hotkey pressed after the window closed");
                    }
                }
            });
            if let Err(e) = result {
                log::warn!("global hotkey unavailable: {e:?}");
            }
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_flags() {
        let args = Args::try_parse_from([
            "ez-paster",
            "a.png",
            "b.jpg",
            "--capture",
            "--zoom",
            "1.5",
            "--capture-delay-ms",
            "300",
            "--global-hotkey",
        ])
        .unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert!(args.capture);
        assert_eq!(args.zoom, Some(1.5));
        assert_eq!(args.capture_delay_ms, Some(300));
        assert!(args.global_hotkey);
        assert!(!args.list_monitors);
    }

    #[test]
    fn defaults_are_off() {
        let args = Args::try_parse_from(["ez-paster"]).unwrap();
        assert!(args.files.is_empty());
        assert!(!args.capture && !args.global_hotkey && !args.list_monitors);
        assert_eq!(args.zoom, None);
    }
}
