//! IPC server for the countdown daemon.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for countdown commands
//! - Integration with CountdownEngine for command execution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{timeout, Duration};

use crate::types::{IpcRequest, IpcResponse, ResponseData};

use super::countdown::CountdownEngine;

// ============================================================================
// Constants
// ============================================================================

/// Default socket path, relative to the home directory
pub const DEFAULT_SOCKET_PATH: &str = ".dynamite/dynamite.sock";

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Socket binding error
    #[error("Failed to bind socket: {0}")]
    BindError(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Read error
    #[error("Failed to read request: {0}")]
    ReadError(String),

    /// Write error
    #[error("Failed to write response: {0}")]
    WriteError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,

    /// Request too large
    #[error("Request too large (max {MAX_REQUEST_SIZE} bytes)")]
    RequestTooLarge,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before
    /// binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove existing socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("Failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .with_context(|| format!("Failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::ReadError(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("Connection closed by client");
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .with_context(|| "Failed to deserialize IPC request")?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response).context("Failed to serialize IPC response")?;

        stream
            .write_all(&json)
            .await
            .context("Failed to write response")?;
        stream.flush().await.context("Failed to flush response")?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to CountdownEngine.
pub struct RequestHandler {
    /// Shared reference to the countdown engine
    engine: Arc<Mutex<CountdownEngine>>,
    /// Shutdown signal sender, fired on a quit request
    shutdown_tx: mpsc::Sender<()>,
}

impl RequestHandler {
    /// Creates a new request handler with the given engine and shutdown
    /// channel.
    pub fn new(engine: Arc<Mutex<CountdownEngine>>, shutdown_tx: mpsc::Sender<()>) -> Self {
        Self {
            engine,
            shutdown_tx,
        }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Set { seconds } => self.handle_set(seconds).await,
            IpcRequest::Reset => self.handle_reset().await,
            IpcRequest::Pause => self.handle_pause().await,
            IpcRequest::Mute => self.handle_mute().await,
            IpcRequest::Status => self.handle_status().await,
            IpcRequest::Quit => self.handle_quit().await,
        }
    }

    /// Handles the set command.
    async fn handle_set(&self, seconds: u32) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.set_timer(seconds) {
            Ok(()) => IpcResponse::success(
                "Timer set",
                Some(ResponseData::from_countdown_state(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the reset command.
    async fn handle_reset(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.reset() {
            Ok(()) => IpcResponse::success(
                "Timer reset",
                Some(ResponseData::from_countdown_state(engine.state())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the pause command.
    async fn handle_pause(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.toggle_pause() {
            Ok(()) => {
                let message = if engine.state().paused {
                    "Countdown paused"
                } else {
                    "Countdown resumed"
                };
                IpcResponse::success(
                    message,
                    Some(ResponseData::from_countdown_state(engine.state())),
                )
            }
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the mute command.
    async fn handle_mute(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.toggle_mute() {
            Ok(()) => {
                let message = if engine.state().muted {
                    "Sound muted"
                } else {
                    "Sound unmuted"
                };
                IpcResponse::success(
                    message,
                    Some(ResponseData::from_countdown_state(engine.state())),
                )
            }
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let engine = self.engine.lock().await;

        IpcResponse::success(
            "",
            Some(ResponseData::from_countdown_state(engine.state())),
        )
    }

    /// Handles the quit command.
    async fn handle_quit(&self) -> IpcResponse {
        let state_data = {
            let engine = self.engine.lock().await;
            ResponseData::from_countdown_state(engine.state())
        };

        if self.shutdown_tx.send(()).await.is_err() {
            return IpcResponse::error("Daemon is already shutting down");
        }

        IpcResponse::success("Daemon shutting down", Some(state_data))
    }
}

// ============================================================================
// Tests
// ============================================================================
