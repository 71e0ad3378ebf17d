use framepoint_core::options::FramingOptions;

/// Editable framing options. Applied to the open session immediately and to
/// every session created afterwards.
#[derive(Default)]
pub struct ConfigState {
    pub options: FramingOptions,
}
