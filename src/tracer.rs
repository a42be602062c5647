use crate::frame::Frame;
use crate::path::{PathShortener, shorten_source_path};

const DEFAULT_DEPTH: usize = 10;

/// Configurable stack capture.
///
/// `skip` innermost frames are discarded, then up to `depth` frames are
/// resolved and collected, innermost first.
#[derive(Debug, Clone)]
pub struct Tracer {
    skip: usize,
    depth: usize,
    shorten: PathShortener,
}

impl Tracer {
    pub fn new() -> Self {
        Self {
            skip: 0,
            depth: DEFAULT_DEPTH,
            shorten: shorten_source_path,
        }
    }

    /// Number of innermost frames to omit. Negative values are treated as 0.
    pub fn with_skip(mut self, skip: i32) -> Self {
        self.skip = skip.max(0) as usize;
        self
    }

    /// Maximum number of frames to collect. Zero or negative falls back to 10.
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = if depth <= 0 {
            DEFAULT_DEPTH
        } else {
            depth as usize
        };
        self
    }

    /// Replace the default `/src/`-trimming path shortener.
    pub fn with_shortener(mut self, shorten: PathShortener) -> Self {
        self.shorten = shorten;
        self
    }

    /// Walk the current thread's stack and collect resolved frames.
    ///
    /// Frames the unwinder cannot resolve to a symbol are dropped rather than
    /// reported. The result may be empty, e.g. when the stack is shallower
    /// than `skip`.
    pub fn capture(&self) -> Vec<Frame> {
        let mut trace = Vec::new();
        let mut seen = 0usize;
        backtrace::trace(|raw| {
            if seen < self.skip {
                seen += 1;
                return true;
            }
            seen += 1;
            backtrace::resolve_frame(raw, |symbol| {
                // One raw frame can resolve to several inlined symbols.
                if trace.len() == self.depth {
                    return;
                }
                let Some(name) = symbol.name() else {
                    return;
                };
                trace.push(Frame {
                    file: symbol
                        .filename()
                        .map(|path| (self.shorten)(path))
                        .unwrap_or_default(),
                    line: symbol.lineno().unwrap_or(0),
                    function: name.to_string(),
                });
            });
            trace.len() < self.depth
        });
        trace
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}
