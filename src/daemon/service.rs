//! Daemon wiring for the countdown timer.
//!
//! Connects the countdown engine to its collaborators:
//! - a 1 Hz tick loop driving the engine
//! - the IPC server accepting commands from the CLI
//! - the display surface, fed on a dedicated thread over a crossbeam
//!   channel
//! - the sound player for the beep and explosion cues
//!
//! Shutdown happens on a `quit` command or Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::sound::{resolve_sound, try_create_player, SoundCue, SoundSource};
use crate::surface::{run_surface_loop, ConsoleSurface, SurfaceUpdate};
use crate::types::CountdownConfig;

use super::countdown::{CountdownEngine, CountdownEvent};
use super::ipc::{IpcServer, RequestHandler, DEFAULT_SOCKET_PATH};

// ============================================================================
// DaemonOptions
// ============================================================================

/// Options for running the countdown daemon.
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    /// Socket path for IPC; defaults to `~/.dynamite/dynamite.sock`
    pub socket_path: Option<PathBuf>,
    /// Directory searched for `beep.*` and `explosion.*` sound files
    pub sounds_dir: Option<PathBuf>,
    /// Disable the audio device entirely
    pub no_sound: bool,
    /// Countdown duration in seconds
    pub seconds: u32,
    /// Start with audio cues muted
    pub muted: bool,
}

impl Default for DaemonOptions {
    fn default() -> Self {
        Self {
            socket_path: None,
            sounds_dir: None,
            no_sound: false,
            seconds: CountdownConfig::default().default_seconds,
            muted: false,
        }
    }
}

impl DaemonOptions {
    /// Resolves the socket path, defaulting to the per-user location.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn resolve_socket_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.socket_path {
            return Ok(path.clone());
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(DEFAULT_SOCKET_PATH))
    }
}

// ============================================================================
// Daemon
// ============================================================================

/// Runs the countdown daemon until a quit command or Ctrl-C arrives.
///
/// # Errors
///
/// Returns an error if the IPC socket cannot be bound or the initial
/// engine setup fails.
pub async fn run(options: DaemonOptions) -> Result<()> {
    let socket_path = options.resolve_socket_path()?;

    let config = CountdownConfig::default()
        .with_default_seconds(options.seconds)
        .with_start_muted(options.muted);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(CountdownEngine::new(config, event_tx)));

    // Surface thread, fed over a crossbeam channel
    let (surface_tx, surface_rx) = unbounded();
    let surface_handle = std::thread::spawn(move || {
        run_surface_loop(surface_rx, ConsoleSurface::new());
    });

    // Show the initial value before the first tick
    {
        let engine = engine.lock().await;
        surface_tx
            .send(SurfaceUpdate::Render(engine.state().formatted_time()))
            .context("Surface thread unavailable")?;
    }

    // Sound device; the countdown runs silently if audio is unavailable
    let player = try_create_player(options.no_sound);
    let beep = resolve_sound(options.sounds_dir.as_deref(), SoundCue::Beep);
    let explosion = resolve_sound(options.sounds_dir.as_deref(), SoundCue::Explosion);

    // 1 Hz tick loop; the engine is shared with the IPC handler, so the
    // loop locks per tick instead of calling CountdownEngine::run
    let ticker_engine = Arc::clone(&engine);
    let ticker_handle = tokio::spawn(async move {
        use tokio::time::{interval, Duration, MissedTickBehavior};

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let mut engine = ticker_engine.lock().await;
            if let Err(e) = engine.tick() {
                warn!("Tick failed: {}", e);
                break;
            }
        }
    });

    // IPC accept loop
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
    let server = IpcServer::new(&socket_path)?;
    let handler = Arc::new(RequestHandler::new(Arc::clone(&engine), shutdown_tx));
    let ipc_handle = tokio::spawn(async move {
        loop {
            match server.accept().await {
                Ok(mut stream) => {
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        match IpcServer::receive_request(&mut stream).await {
                            Ok(request) => {
                                let response = handler.handle(request).await;
                                if let Err(e) =
                                    IpcServer::send_response(&mut stream, &response).await
                                {
                                    warn!("Failed to send IPC response: {}", e);
                                }
                            }
                            Err(e) => warn!("Failed to read IPC request: {}", e),
                        }
                    });
                }
                Err(e) => {
                    warn!("Failed to accept IPC connection: {}", e);
                    break;
                }
            }
        }
    });

    info!(
        socket = %socket_path.display(),
        seconds = options.seconds,
        "Countdown daemon started"
    );

    // Event loop: translate engine events into collaborator calls
    loop {
        tokio::select! {
            event = event_rx.recv() => {
                match event {
                    Some(event) => {
                        dispatch_event(event, &surface_tx, player.as_deref(), &beep, &explosion);
                    }
                    None => {
                        warn!("Engine event channel closed");
                        break;
                    }
                }
            }
            _ = shutdown_rx.recv() => {
                info!("Quit command received, shutting down");
                break;
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                }
                info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    ticker_handle.abort();
    ipc_handle.abort();
    let _ = surface_tx.send(SurfaceUpdate::Shutdown);
    if surface_handle.join().is_err() {
        warn!("Surface thread panicked during shutdown");
    }
    println!();

    Ok(())
}

/// Forwards one engine event to the display surface and sound device.
fn dispatch_event(
    event: CountdownEvent,
    surface_tx: &crossbeam_channel::Sender<SurfaceUpdate>,
    player: Option<&crate::sound::RodioSoundPlayer>,
    beep: &SoundSource,
    explosion: &SoundSource,
) {
    match event {
        CountdownEvent::Render { text } => {
            let _ = surface_tx.send(SurfaceUpdate::Render(text));
        }
        CountdownEvent::Visibility { visible } => {
            let _ = surface_tx.send(SurfaceUpdate::SetVisible(visible));
        }
        CountdownEvent::Beep => play_cue(player, beep),
        CountdownEvent::Explosion => play_cue(player, explosion),
        CountdownEvent::Expired => info!("Countdown expired"),
        CountdownEvent::Paused { paused } => debug!(paused, "Pause toggled"),
        CountdownEvent::Muted { muted } => debug!(muted, "Mute toggled"),
        CountdownEvent::TimerSet { seconds } => info!(seconds, "Timer set"),
    }
}

/// Fire-and-forget playback; failures are logged and never propagate.
fn play_cue(player: Option<&crate::sound::RodioSoundPlayer>, source: &SoundSource) {
    if let Some(player) = player {
        if let Err(e) = player.play(source) {
            warn!("Failed to play {} cue: {}", source.cue(), e);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod options_tests {
        use super::*;

        #[test]
        fn test_default_options() {
            let options = DaemonOptions::default();
            assert_eq!(options.seconds, 3600);
            assert!(!options.muted);
            assert!(!options.no_sound);
            assert!(options.socket_path.is_none());
            assert!(options.sounds_dir.is_none());
        }

        #[test]
        fn test_resolve_socket_path_explicit() {
            let options = DaemonOptions {
                socket_path: Some(PathBuf::from("/tmp/custom.sock")),
                ..DaemonOptions::default()
            };

            let path = options.resolve_socket_path().unwrap();
            assert_eq!(path, PathBuf::from("/tmp/custom.sock"));
        }

        #[test]
        fn test_resolve_socket_path_default_under_home() {
            let options = DaemonOptions::default();

            if let Ok(path) = options.resolve_socket_path() {
                assert!(path.ends_with(".dynamite/dynamite.sock"));
            }
        }
    }

    mod dispatch_tests {
        use super::*;

        #[test]
        fn test_render_event_reaches_surface_channel() {
            let (tx, rx) = unbounded();
            let beep = SoundSource::embedded(SoundCue::Beep);
            let explosion = SoundSource::embedded(SoundCue::Explosion);

            dispatch_event(
                CountdownEvent::Render {
                    text: "00:00:09".to_string(),
                },
                &tx,
                None,
                &beep,
                &explosion,
            );

            assert_eq!(
                rx.try_recv().unwrap(),
                SurfaceUpdate::Render("00:00:09".to_string())
            );
        }

        #[test]
        fn test_visibility_event_reaches_surface_channel() {
            let (tx, rx) = unbounded();
            let beep = SoundSource::embedded(SoundCue::Beep);
            let explosion = SoundSource::embedded(SoundCue::Explosion);

            dispatch_event(
                CountdownEvent::Visibility { visible: false },
                &tx,
                None,
                &beep,
                &explosion,
            );

            assert_eq!(rx.try_recv().unwrap(), SurfaceUpdate::SetVisible(false));
        }

        #[test]
        fn test_audio_events_without_player_do_not_panic() {
            let (tx, _rx) = unbounded();
            let beep = SoundSource::embedded(SoundCue::Beep);
            let explosion = SoundSource::embedded(SoundCue::Explosion);

            dispatch_event(CountdownEvent::Beep, &tx, None, &beep, &explosion);
            dispatch_event(CountdownEvent::Explosion, &tx, None, &beep, &explosion);
        }
    }
}
