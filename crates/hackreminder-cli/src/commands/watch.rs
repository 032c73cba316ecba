//! Live countdown with threshold alerts.

use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use clap::Args;
use hackreminder_core::{
    AlertPolicy, Clock, Config, Event, Notifier, Reminder, Sound, SoundNotifier, StopReason,
    Store, SystemClock, TerminalNotifier, TickContext, Ticker,
};
use tracing::{debug, info, warn};

use super::CmdResult;

#[derive(Args)]
pub struct WatchArgs {
    /// Print one JSON event per line instead of the live countdown
    #[arg(long)]
    json: bool,
    /// Keep watching after the deadline has passed
    #[arg(long)]
    keep_running: bool,
    /// Tick period in milliseconds (overrides watch.tick_ms)
    #[arg(long)]
    tick_ms: Option<u64>,
}

pub fn run(args: WatchArgs) -> CmdResult {
    let config = Config::load()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(args, config))
}

fn emit(event: &Event) {
    match serde_json::to_string(event) {
        Ok(line) => println!("{line}"),
        Err(e) => debug!(error = %e, "cannot serialize event"),
    }
}

async fn watch(args: WatchArgs, config: Config) -> CmdResult {
    let store = Store::open()?;
    let clock = SystemClock;
    let ctx = TickContext::from_store(&store);
    let Some(event) = ctx.event.clone() else {
        return Err("no event selected (hackreminder event select <id>)".into());
    };

    let period = args
        .tick_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.tick_period());
    let exit_when_past = config.watch.exit_when_past && !args.keep_running;
    let json = args.json;

    info!(id = %event.id, period_ms = period.as_millis() as u64, "watch started");
    if json {
        emit(&Event::WatchStarted {
            event_id: event.id.clone(),
            target_name: event.name.clone(),
            deadline: event.deadline,
            thresholds: ctx.thresholds(),
            at: clock.now(),
        });
    } else {
        println!("Watching {} (Ctrl-C to stop)", event.name);
    }

    let mut reminder = Reminder::new(AlertPolicy::with_cooldown_secs(config.alerts.cooldown_secs));
    // JSON mode keeps stdout for events; the tone goes to stderr.
    let sound = Sound::from(&config.alerts);
    let mut notifier: Box<dyn Notifier> = if json {
        Box::new(SoundNotifier::new(std::io::stderr(), sound))
    } else {
        Box::new(TerminalNotifier::new(std::io::stdout(), sound))
    };
    let mut handle = Ticker::spawn(period, move || {
        let now = clock.now();
        let ctx = TickContext::from_store(&store);
        let outcome = reminder.tick(&ctx, now);

        if json {
            for event in outcome.events(&ctx, now) {
                emit(&event);
            }
        } else if let Some(snapshot) = outcome.snapshot {
            let name = ctx.event.as_ref().map(|e| e.name.as_str()).unwrap_or_default();
            let urgent = if snapshot.is_urgent() { " (!)" } else { "" };
            let mut out = std::io::stdout();
            if let Err(e) = write!(out, "\r\x1b[2K  {name}: {snapshot}{urgent}")
                .and_then(|()| out.flush())
            {
                warn!(error = %e, "failed to print countdown");
            }
            if outcome.deadline_passed {
                println!("\n  The deadline has passed.");
            }
        }

        if let Some(alert) = &outcome.alert {
            if !json {
                println!();
            }
            notifier.notify(alert);
        }

        match outcome.snapshot {
            None => ControlFlow::Break(StopReason::EventCleared),
            Some(s) if s.is_past && exit_when_past => ControlFlow::Break(StopReason::DeadlinePassed),
            Some(_) => ControlFlow::Continue(()),
        }
    });

    let finished = tokio::select! {
        joined = handle.join() => Some(joined?),
        _ = tokio::signal::ctrl_c() => None,
    };
    let reason = match finished {
        Some(reason) => reason.unwrap_or(StopReason::Interrupted),
        None => {
            handle.cancel();
            handle.join().await?;
            StopReason::Interrupted
        }
    };

    info!(?reason, "watch stopped");
    if json {
        emit(&Event::WatchStopped {
            reason,
            at: clock.now(),
        });
    } else {
        match reason {
            StopReason::DeadlinePassed => println!("\nStopped: deadline reached."),
            StopReason::EventCleared => println!("\nStopped: no event selected anymore."),
            StopReason::Interrupted => println!("\nStopped."),
        }
    }
    Ok(())
}
