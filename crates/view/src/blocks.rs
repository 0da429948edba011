//! Named markup buffers shared across the templates of one render pass.
//!
//! Blocks let a component render a fragment in one place and have another
//! template emit it elsewhere on the page. The search filter captures an
//! OpenSearch `<link>` tag into the `head` block while its own form renders
//! in the page body; the page shell later echoes `head` inside `<head>`.
//!
//! ## Protocol
//!
//! - [`BlockRegistry::start`] opens a capture frame for a name; frames with
//!   different names nest.
//! - [`BlockRegistry::write`] appends text to the innermost open frame.
//! - [`BlockRegistry::stop`] closes the innermost frame and commits its
//!   text, appending to anything committed under that name earlier.
//! - [`BlockRegistry::get`] returns committed text only; an open frame is
//!   never visible.
//!
//! Misuse is rejected with an explicit [`BlockError`] instead of silently
//! corrupting output.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors from violating the block capture protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Block '{0}' is already open")]
    AlreadyOpen(String),

    #[error("No block is open")]
    NoOpenBlock,
}

#[derive(Debug)]
struct Frame {
    name: String,
    buf: String,
}

/// Registry of named blocks for one render pass.
///
/// Owned by the view, so block content cannot leak across requests.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    committed: BTreeMap<String, String>,
    open: Vec<Frame>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a capture frame for `name`.
    pub fn start(&mut self, name: impl Into<String>) -> Result<(), BlockError> {
        let name = name.into();
        if self.open.iter().any(|frame| frame.name == name) {
            return Err(BlockError::AlreadyOpen(name));
        }
        self.open.push(Frame {
            name,
            buf: String::new(),
        });
        Ok(())
    }

    /// Appends text to the innermost open frame.
    pub fn write(&mut self, text: &str) -> Result<(), BlockError> {
        let frame = self.open.last_mut().ok_or(BlockError::NoOpenBlock)?;
        frame.buf.push_str(text);
        Ok(())
    }

    /// Closes the innermost frame and commits its text under the frame's
    /// name, after any text committed there earlier in the pass.
    pub fn stop(&mut self) -> Result<(), BlockError> {
        let frame = self.open.pop().ok_or(BlockError::NoOpenBlock)?;
        self.committed.entry(frame.name).or_default().push_str(&frame.buf);
        Ok(())
    }

    /// Returns the committed text for `name`, or `""` when nothing was
    /// committed under that name.
    pub fn get(&self, name: &str) -> &str {
        self.committed.get(name).map(String::as_str).unwrap_or("")
    }

    /// Iterates over all committed blocks in name order.
    pub fn committed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.committed.iter().map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// True while a capture frame is still open. The render driver uses
    /// this to flag unbalanced captures at the end of a pass.
    pub fn has_open(&self) -> bool {
        !self.open.is_empty()
    }
}
