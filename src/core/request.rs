//! The render request + fluent builder.

/// Resolved text and font handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    /// `None` means the renderer's default font.
    pub font: Option<String>,
    pub strict: bool,
}

impl RenderRequest {
    #[inline]
    pub fn builder(text: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(text)
    }

    /// Font name to look up, with the default filled in.
    #[inline]
    #[must_use]
    pub fn font_name(&self) -> &str {
        self.font
            .as_deref()
            .unwrap_or(crate::core::constants::DEFAULT_FONT)
    }
}

/// Fluent builder; an empty font string counts as "no font".
#[derive(Debug)]
pub struct RequestBuilder {
    text: String,
    font: Option<String>,
    strict: bool,
}

impl RequestBuilder {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            strict: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn font(mut self, f: impl Into<String>) -> Self {
        let f = f.into();
        self.font = if f.trim().is_empty() { None } else { Some(f) };
        self
    }
    #[inline]
    #[must_use]
    pub fn font_opt(mut self, f: Option<&str>) -> Self {
        if let Some(name) = f {
            self = self.font(name);
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn strict(mut self, s: bool) -> Self {
        self.strict = s;
        self
    }

    #[must_use]
    pub fn build(self) -> RenderRequest {
        RenderRequest {
            text: self.text,
            font: self.font,
            strict: self.strict,
        }
    }
}
