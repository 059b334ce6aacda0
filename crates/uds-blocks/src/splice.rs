//! Locating and splicing a managed block in text.
//!
//! These functions work on in-memory text only; see
//! [`ConfigBlockRewriter`](crate::ConfigBlockRewriter) for the on-disk variant.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::markers::BlockMarkers;

/// Byte range of a managed block, markers included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Offset of the first byte of the begin marker.
    pub begin: usize,
    /// Offset one past the last byte of the end marker.
    pub end: usize,
}

impl BlockSpan {
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

fn in_memory() -> PathBuf {
    PathBuf::from("<content>")
}

/// Finds the managed block in `text`.
///
/// Returns `Ok(None)` when there is no begin marker. The end marker is
/// searched from the start of the text; if it is missing or its first
/// occurrence precedes the begin marker the block is corrupt.
///
/// # Example
/// ```
/// use uds_blocks::{BlockMarkers, locate};
///
/// let markers = BlockMarkers::new("\n# BEGIN", "\n# END", "# generated");
/// let span = locate("a\n# BEGIN\nx\n# END\nb", &markers).unwrap().unwrap();
/// assert_eq!((span.begin, span.end), (1, 17));
/// ```
pub fn locate(text: &str, markers: &BlockMarkers) -> Result<Option<BlockSpan>> {
    let Some(begin) = text.find(&markers.begin) else {
        return Ok(None);
    };

    match text.find(&markers.end) {
        Some(end) if end >= begin => Ok(Some(BlockSpan {
            begin,
            end: end + markers.end.len(),
        })),
        _ => Err(Error::CorruptBlock { path: in_memory() }),
    }
}

/// Checks whether `text` contains a well-formed managed block.
pub fn has_block(text: &str, markers: &BlockMarkers) -> bool {
    matches!(locate(text, markers), Ok(Some(_)))
}

/// Replaces, inserts or removes the managed block in `text`.
///
/// - With a block present, the bytes from the begin marker through the end
///   marker are replaced by the rendered `content`, or dropped when `content`
///   is `None`. Everything before and after is kept byte for byte.
/// - Without a block, the rendered `content` (if any) is appended to the whole
///   text, followed by a single newline.
///
/// # Errors
/// - [`Error::InvalidMarkers`] if the markers cannot delimit a single block.
/// - [`Error::MissingBlock`] if `require_existing` is set and there is no
///   begin marker.
/// - [`Error::CorruptBlock`] if the end marker is missing or comes first.
///
/// # Example
/// ```
/// use uds_blocks::{BlockMarkers, splice};
///
/// let markers = BlockMarkers::new("\n# BEGIN", "\n# END", "# generated");
/// let added = splice("global", &markers, Some("x"), false).unwrap();
/// assert_eq!(added, "global\n# BEGIN\n# generated\nx\n# END\n");
///
/// let removed = splice(&added, &markers, None, true).unwrap();
/// assert_eq!(removed, "global\n");
/// ```
pub fn splice(
    text: &str,
    markers: &BlockMarkers,
    content: Option<&str>,
    require_existing: bool,
) -> Result<String> {
    markers.validate()?;
    let span = locate(text, markers)?;
    if span.is_none() && require_existing {
        return Err(Error::MissingBlock { path: in_memory() });
    }

    let block = content.map(|c| markers.render(c));
    let mut out = String::with_capacity(text.len() + block.as_ref().map_or(1, String::len));

    match span {
        Some(span) => {
            tracing::debug!(begin = span.begin, end = span.end, "found managed block");
            out.push_str(&text[..span.begin]);
            if let Some(block) = &block {
                out.push_str(block);
            }
            out.push_str(&text[span.end..]);
        }
        None => {
            out.push_str(text);
            if let Some(block) = &block {
                out.push_str(block);
            }
            out.push('\n');
        }
    }

    Ok(out)
}
