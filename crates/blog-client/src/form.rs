//! Client-side validation of the new-post form.

/// Rejection raised before anything is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Title or content was empty after trimming.
    #[error("Please fill in both title and content.")]
    MissingFields,
}

/// A post ready to submit: trimmed, non-empty title and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Trim and validate form input.
    ///
    /// # Errors
    ///
    /// [`DraftError::MissingFields`] when either field is blank.
    ///
    /// # Examples
    /// ```
    /// use blog_client::form::{DraftError, PostDraft};
    ///
    /// let draft = PostDraft::new("  Hello ", "World").expect("valid draft");
    /// assert_eq!(draft.title(), "Hello");
    /// assert_eq!(PostDraft::new("Hello", "  "), Err(DraftError::MissingFields));
    /// ```
    pub fn new(title: &str, content: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(DraftError::MissingFields);
        }
        Ok(Self {
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }

    /// Trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "body")]
    #[case("title", "")]
    #[case(" \t", "body")]
    #[case("title", "\n ")]
    fn blank_fields_are_rejected(#[case] title: &str, #[case] content: &str) {
        assert_eq!(PostDraft::new(title, content), Err(DraftError::MissingFields));
    }

    #[rstest]
    fn surrounding_whitespace_is_dropped() {
        let draft = PostDraft::new("  Title\n", "\tBody  ").expect("valid draft");
        assert_eq!(draft.title(), "Title");
        assert_eq!(draft.content(), "Body");
    }
}
