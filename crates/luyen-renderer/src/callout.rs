//! Callout box kinds.
//!
//! The dialect supports three fenced callouts: `:::tip`, `:::example` and
//! `:::warning`. Each maps to a fixed label and CSS class.

/// Kind of a fenced callout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    /// `:::tip` — study hints.
    Tip,
    /// `:::example` — worked examples.
    Example,
    /// `:::warning` — common mistakes to avoid.
    Warning,
}

impl CalloutKind {
    /// Resolve a fence name to a callout kind.
    ///
    /// Only the exact names `tip`, `example` and `warning` open a box; any
    /// other fence text falls through as plain content.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "tip" => Some(Self::Tip),
            "example" => Some(Self::Example),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Display label, rendered bold at the start of the box.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tip => "💡 Mẹo",
            Self::Example => "📝 Ví dụ",
            Self::Warning => "⚠️ Lưu ý",
        }
    }

    /// CSS class of the wrapping `<div>`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Tip => "tip-box",
            Self::Example => "example-box",
            Self::Warning => "warning-box",
        }
    }

    /// Separator between the label and the body.
    ///
    /// Example boxes put their body on a new visual line; tip and warning
    /// boxes run on after the label.
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Self::Example => "<br>",
            Self::Tip | Self::Warning => " ",
        }
    }
}
