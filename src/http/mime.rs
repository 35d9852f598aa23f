//! Content-Type detection based on file extensions.

/// Returns the Content-Type for a filesystem path.
///
/// The extension is whatever follows the last `.` of the whole path,
/// matched case-insensitively. Unknown extensions and paths without a
/// dot fall back to `application/text`.
pub fn from_path(path: &str) -> &'static str {
    let ext = match path.rfind('.') {
        Some(pos) => &path[pos + 1..],
        None => return "application/text",
    };

    match ext.to_ascii_lowercase().as_str() {
        "htm" | "html" | "php" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "js" => "application/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "swf" => "application/x-shockwave-flash",
        "flv" => "video/x-flv",
        "png" => "image/png",
        "jpe" | "jpeg" | "jpg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "tiff" | "tif" => "image/tiff",
        "svg" | "svgz" => "image/svg+xml",
        _ => "application/text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(from_path("/srv/index.html"), "text/html");
        assert_eq!(from_path("/a.json"), "application/json");
        assert_eq!(from_path("/a.svg"), "image/svg+xml");
        assert_eq!(from_path("/pic.JPG"), "image/jpeg");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(from_path("/a.unknownext"), "application/text");
        assert_eq!(from_path("/no-extension"), "application/text");
    }

    #[test]
    fn extension_is_taken_from_the_whole_path() {
        // A dot in a directory name swallows the match, same as the
        // lookup being a plain rfind on the full string.
        assert_eq!(from_path("/a.b/c"), "application/text");
    }
}
