//! Platform-neutral outgoing messages

/// Reply keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Keyboard {
    /// Leave whatever keyboard the client shows
    #[default]
    Unchanged,
    /// Hide the current keyboard
    Remove,
    /// One-time keyboard, rows of button labels
    Options(Vec<Vec<String>>),
    /// Buttons attached to the message itself
    Inline(Vec<Vec<InlineButton>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    /// Returned to the bot when the button is pressed
    pub data: String,
}

/// How the text should be interpreted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
    pub format: Format,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Unchanged,
            format: Format::Plain,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: Format::Html,
            ..Self::plain(text)
        }
    }

    pub fn with_options<R, S>(mut self, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyboard = Keyboard::Options(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        );
        self
    }

    pub fn with_inline<R>(mut self, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = InlineButton>,
    {
        self.keyboard =
            Keyboard::Inline(rows.into_iter().map(|row| row.into_iter().collect()).collect());
        self
    }

    pub fn removing_keyboard(mut self) -> Self {
        self.keyboard = Keyboard::Remove;
        self
    }

    /// Button labels of the attached keyboard, flattened.
    pub fn options(&self) -> Vec<&str> {
        match &self.keyboard {
            Keyboard::Options(rows) => rows.iter().flatten().map(String::as_str).collect(),
            Keyboard::Unchanged | Keyboard::Remove | Keyboard::Inline(_) => Vec::new(),
        }
    }
}
