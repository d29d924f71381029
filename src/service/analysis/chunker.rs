//! Overlapping window chunking for long inputs

/// Chunk window misconfiguration, fatal at call time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid chunk window: overlap {overlap} must be smaller than size {size}")]
pub struct InvalidWindow {
    pub size: usize,
    pub overlap: usize,
}

/// Split `text` into windows of `size` characters, starting every
/// `size - overlap` characters. The final window may be shorter; empty text
/// yields no windows.
///
/// Offsets are character offsets, so multi-byte input never slices
/// mid-scalar.
pub fn chunk_windows(text: &str, size: usize, overlap: usize) -> Result<Vec<&str>, InvalidWindow> {
    if size == 0 || overlap >= size {
        return Err(InvalidWindow { size, overlap });
    }

    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let char_len = boundaries.len();
    let step = size - overlap;

    let mut windows = Vec::new();
    let mut start = 0;
    while start < char_len {
        let begin = boundaries[start];
        let end = if start + size < char_len {
            boundaries[start + size]
        } else {
            text.len()
        };
        windows.push(&text[begin..end]);
        start += step;
    }
    Ok(windows)
}
