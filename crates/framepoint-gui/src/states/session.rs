use framepoint_core::position::FramePosition;
use framepoint_core::session::FramingSession;

/// The active framing session plus persistence bookkeeping.
#[derive(Default)]
pub struct SessionState {
    pub session: Option<FramingSession>,
    /// Last position written to (or read from) the sidecar.
    pub stored: Option<FramePosition>,
    /// Worker is writing the sidecar.
    pub is_saving: bool,
}

impl SessionState {
    pub fn close(&mut self) {
        self.session = None;
        self.stored = None;
        self.is_saving = false;
    }

    /// True when the in-flight position differs from what is on disk.
    pub fn is_dirty(&self) -> bool {
        match (&self.session, &self.stored) {
            (Some(session), Some(stored)) => session.position() != *stored,
            (Some(session), None) => session.position() != FramePosition::default(),
            _ => false,
        }
    }
}
