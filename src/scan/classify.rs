//! Filename classification.
//!
//! Only the name is inspected, never the file contents. Suffix checks are
//! case-insensitive so `IMG_0001.JPG` and `img_0001.arw` pair up.

pub const JPEG_EXTENSIONS: [&str; 2] = [".jpg", ".jpeg"];
pub const RAW_EXTENSIONS: [&str; 2] = [".arw", ".dng"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Jpeg,
    Raw,
    Other,
}

impl FileKind {
    pub fn classify(name: &str) -> FileKind {
        if is_jpeg(name) {
            FileKind::Jpeg
        } else if is_raw(name) {
            FileKind::Raw
        } else {
            FileKind::Other
        }
    }
}

pub fn is_jpeg(name: &str) -> bool {
    has_any_suffix(name, &JPEG_EXTENSIONS)
}

pub fn is_raw(name: &str) -> bool {
    has_any_suffix(name, &RAW_EXTENSIONS)
}

/// Lookup key shared by a JPEG and its RAW twin: the lowercased name with
/// its final extension removed.
pub fn lowered_no_ext(name: &str) -> String {
    let mut lowered = name.to_lowercase();
    if let Some(dot) = lowered.rfind('.') {
        lowered.truncate(dot);
    }
    lowered
}

fn has_any_suffix(name: &str, suffixes: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    suffixes.iter().any(|suffix| lowered.ends_with(suffix))
}
