pub mod frame;
pub mod path;
pub mod tracer;

pub use frame::{Frame, format};
pub use path::{PathShortener, shorten_source_path};
pub use tracer::Tracer;

/// Convenience function to capture the current call stack.
///
/// `skip` is the number of innermost frames to omit, e.g. to hide the capture
/// call itself; `depth` is the maximum number of frames to collect.
/// Out-of-range values are silently corrected: a negative `skip` counts as 0
/// and a non-positive `depth` as 10.
pub fn capture(skip: i32, depth: i32) -> Vec<Frame> {
    Tracer::new().with_skip(skip).with_depth(depth).capture()
}

/// Capture the current call stack and emit each frame at debug level.
///
/// Does nothing unless the consuming program has installed a `log` backend.
pub fn log_trace(skip: i32, depth: i32) {
    for frame in capture(skip, depth) {
        log::debug!("{frame}");
    }
}
