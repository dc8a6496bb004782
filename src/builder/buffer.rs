//! Append-only text buffer shared by all builders.

use crate::error::Violation;
use crate::options::BuilderOptions;

use super::Fragment;

/// Accumulated Markdown text plus the violations seen while producing it.
///
/// Content is only ever appended. A child builder's output enters the
/// buffer through [`Buffer::nest`], which also carries the child's
/// violations up into this buffer.
#[derive(Debug, Clone, Default)]
pub(crate) struct Buffer {
    text: String,
    violations: Vec<Violation>,
    options: BuilderOptions,
}

impl Buffer {
    pub(crate) fn new(options: BuilderOptions) -> Self {
        Self {
            text: String::new(),
            violations: Vec::new(),
            options,
        }
    }

    pub(crate) fn options(&self) -> BuilderOptions {
        self.options
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append the configured line terminator.
    pub(crate) fn push_line(&mut self) {
        self.text.push_str(self.options.line_ending.as_str());
    }

    pub(crate) fn record(&mut self, violation: Violation) {
        log::debug!("Recorded violation: {}", violation);
        self.violations.push(violation);
    }

    /// Hand `child` to `configure`, then append its rendered text framed by
    /// `open` and `close`.
    ///
    /// The callback runs to completion before anything is appended, so a
    /// panic inside it leaves this buffer untouched. The child is returned
    /// for inspection only; its text is already part of this buffer.
    pub(crate) fn nest<B, F>(&mut self, mut child: B, configure: F, open: &str, close: &str) -> B
    where
        B: Fragment,
        F: FnOnce(&mut B),
    {
        configure(&mut child);

        let rendered = child.render();
        log::trace!(
            "Splicing nested fragment ({} bytes, {} violations)",
            rendered.len(),
            child.violations().len()
        );

        self.text.push_str(open);
        self.text.push_str(&rendered);
        self.text.push_str(close);
        self.violations.extend_from_slice(child.violations());
        child
    }
}
