use std::path::{Path, PathBuf};

/// File name offered for saving a conversion of `text`.
///
/// Every character outside ASCII letters and digits becomes `_`, the rest is lowercased.
pub fn download_file_name(text: &str) -> String {
    let stem: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.svg")
}

/// Writes `svg` into `dir` under [`download_file_name`] and returns the written path.
pub fn save_download(dir: &Path, text: &str, svg: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(download_file_name(text));
    std::fs::write(&path, svg)?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "svg written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sanitized_per_character() {
        assert_eq!(download_file_name("Hello World!"), "hello_world_.svg");
        assert_eq!(download_file_name("Ünï 2"), "_n__2.svg");
        assert_eq!(download_file_name(""), ".svg");
    }

    #[test]
    fn save_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_download(dir.path(), "Hi", "<svg/>").unwrap();
        assert_eq!(path.file_name().unwrap(), "hi.svg");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<svg/>");
    }
}
