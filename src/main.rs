#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, interrupt_farewell, run_session, Console, PhaseTracker};

#[cfg(feature = "std")]
use clap::Parser;

/// Two-player tic-tac-toe on the console.
///
/// Players X and O take turns entering a position from 1 to 9.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    // Console reads block, so the session gets its own blocking thread while
    // this one waits for Ctrl-C.
    let phase = PhaseTracker::new();
    let console_phase = phase.clone();
    let session = tokio::task::spawn_blocking(move || {
        let mut console = Console::stdio().with_phase(console_phase);
        run_session(&mut console)
    });

    tokio::select! {
        joined = session => {
            let summary = joined??;
            log::debug!("exiting after {} games", summary.games);
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            println!("{}", interrupt_farewell(phase.get()));
            // The blocking reader cannot be cancelled, so do not wait for it.
            std::process::exit(0);
        }
    }
    Ok(())
}
