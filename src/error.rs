//! Failures while bringing up or running the window shell. The simulation
//! core has no recoverable errors of its own.

/// Errors that can occur while creating the window and GPU context.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface creation: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter compatible with the window surface")]
    NoAdapter,

    #[error("device request: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_adapter_message() {
        assert_eq!(
            ShellError::NoAdapter.to_string(),
            "no graphics adapter compatible with the window surface"
        );
    }
}
