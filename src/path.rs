use std::path::Path;

/// Strategy for shortening a resolved source path before display.
pub type PathShortener = fn(&Path) -> String;

/// Default shortening heuristic.
///
/// Separators are normalized to forward slashes. A path under a `src`
/// directory keeps only the part after the last `/src/`; anything else
/// collapses to its bare file name.
pub fn shorten_source_path(path: &Path) -> String {
    let file = path.to_string_lossy().replace('\\', "/");
    match file.rfind("/src/") {
        Some(n) if n > 0 => file[n + 5..].to_string(),
        _ => file.rsplit('/').next().unwrap_or(&file).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_remainder_after_last_src_segment() {
        let path = Path::new("/home/user/go/src/github.com/acme/widget/widget.rs");
        assert_eq!(shorten_source_path(path), "github.com/acme/widget/widget.rs");
    }

    #[test]
    fn last_src_occurrence_wins() {
        let path = Path::new("/build/src/vendor/lib/src/net/conn.rs");
        assert_eq!(shorten_source_path(path), "net/conn.rs");
    }

    #[test]
    fn bare_file_name_without_src_segment() {
        let path = Path::new("/home/user/proj/main.rs");
        assert_eq!(shorten_source_path(path), "main.rs");
    }

    #[test]
    fn backslash_separators_are_normalized() {
        let path = Path::new(r"C:\work\proj\src\net\conn.rs");
        assert_eq!(shorten_source_path(path), "net/conn.rs");
    }

    #[test]
    fn src_at_path_start_falls_back_to_file_name() {
        let path = Path::new("/src/app/main.rs");
        assert_eq!(shorten_source_path(path), "main.rs");
    }

    #[test]
    fn relative_path_without_directories() {
        assert_eq!(shorten_source_path(Path::new("main.rs")), "main.rs");
    }
}
