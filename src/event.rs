//! Application events delivered outside the terminal input stream

/// Events sent to the app through its event channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The success banner shown for `generation` has been up long enough
    SuccessBannerExpired { generation: u64 },
}
