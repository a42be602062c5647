use std::fmt;

/// One resolved stack location.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Shortened source file path of the call site.
    pub file: String,
    /// 1-based line number of the call site.
    pub line: u32,
    /// Fully-qualified function name as reported by the unwinder.
    pub function: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {} Line: {} Function: {}",
            self.file, self.line, self.function
        )
    }
}

/// Render a trace to a single text block, one frame per line.
/// `indent` is written at the beginning of each line.
pub fn format(frames: &[Frame], indent: &str) -> String {
    let mut out = String::new();
    for frame in frames {
        out.push_str(&format!("{indent}{frame}\n"));
    }
    out
}
