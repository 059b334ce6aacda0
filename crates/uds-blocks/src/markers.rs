//! Block marker definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const HAPROXY_BEGIN_UDS: &str = "\n# BEGIN UDS";
const HAPROXY_END_UDS: &str = "\n# END UDS";
const HAPROXY_UDS_WARNING: &str = "\
# (The following HAproxy configuration entries, as well as the ``# BEGIN UDS``
# and ``# END UDS`` comment lines surrounding it, were automatically generated
# by ``csm_setup``. Please *do not edit these manually*.)";

/// The sentinels delimiting a managed block and the warning written under
/// the opening one.
///
/// Markers are matched literally. The HAProxy defaults carry a leading
/// newline so that they only match at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMarkers {
    pub begin: String,
    pub end: String,
    pub warning: String,
}

impl BlockMarkers {
    pub fn new(
        begin: impl Into<String>,
        end: impl Into<String>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            warning: warning.into(),
        }
    }

    /// Markers for the UDS section of `haproxy.cfg`.
    pub fn haproxy_uds() -> Self {
        Self::new(HAPROXY_BEGIN_UDS, HAPROXY_END_UDS, HAPROXY_UDS_WARNING)
    }

    /// Check that the markers can delimit exactly one block.
    ///
    /// Both markers must be non-empty and neither may contain the other,
    /// otherwise the end marker search can land on the begin marker and each
    /// rewrite appends another block.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.begin.is_empty() {
            "begin marker is empty"
        } else if self.end.is_empty() {
            "end marker is empty"
        } else if self.begin.contains(&self.end) {
            "begin marker contains the end marker"
        } else if self.end.contains(&self.begin) {
            "end marker contains the begin marker"
        } else {
            return Ok(());
        };
        Err(Error::InvalidMarkers {
            reason: reason.to_string(),
        })
    }

    /// Render a complete block: begin marker, warning, content, end marker.
    ///
    /// `content` is written verbatim; the end marker supplies the line break
    /// in front of it.
    ///
    /// # Example
    /// ```
    /// use uds_blocks::BlockMarkers;
    ///
    /// let markers = BlockMarkers::new("\n# BEGIN", "\n# END", "# generated");
    /// assert_eq!(markers.render("x"), "\n# BEGIN\n# generated\nx\n# END");
    /// ```
    pub fn render(&self, content: &str) -> String {
        format!("{}\n{}\n{}{}", self.begin, self.warning, content, self.end)
    }
}

impl Default for BlockMarkers {
    fn default() -> Self {
        Self::haproxy_uds()
    }
}
