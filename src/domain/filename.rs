//! Filename cleanup rules for downloaded MP3s
//!
//! yt-dlp appends the media id in square brackets to the files it writes
//! (e.g. `Song [x1GbkFd].mp3`). These rules compute the cleaned name and
//! the numbered fallback used when the cleaned name already exists.

const MP3_EXT: &str = ".mp3";

/// Returns the filename with a trailing `[...]` segment stripped, or
/// `None` if the file is not an mp3 or has nothing to strip. The
/// extension keeps whatever casing the file already has.
pub fn cleaned_name(filename: &str) -> Option<String> {
    let split = filename.len().checked_sub(MP3_EXT.len())?;
    if !filename.is_char_boundary(split) {
        return None;
    }
    let (stem, ext) = filename.split_at(split);
    if !ext.eq_ignore_ascii_case(MP3_EXT) {
        return None;
    }

    let trimmed = stem.trim_end();
    if !trimmed.ends_with(']') {
        return None;
    }

    let open = trimmed.rfind('[')?;
    let base = trimmed[..open].trim_end();
    if base.is_empty() {
        // Stripping would leave only the extension; not a cleanup.
        return None;
    }

    Some(format!("{}{}", base, ext))
}

/// Candidate name for collision resolution: `base (n).mp3`.
pub fn numbered_name(cleaned: &str, counter: u32) -> String {
    let split = cleaned.len().saturating_sub(MP3_EXT.len());
    if cleaned.is_char_boundary(split) && cleaned[split..].eq_ignore_ascii_case(MP3_EXT) {
        let (stem, ext) = cleaned.split_at(split);
        format!("{} ({}){}", stem, counter, ext)
    } else {
        format!("{} ({})", cleaned, counter)
    }
}
