use thiserror::Error;

/// Why a submission was refused by [`Validator::clean`](crate::Validator::clean).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    /// The text contains forbidden words. `redacted` shows which ones, masked, so the author can
    /// fix them.
    #[error("Пожалуйста, исправьте слова, что отмечены звёздочками: {redacted}")]
    BadLanguage { redacted: String },
    /// The text could not be checked. Details are logged, never shown.
    #[error("Не удалось проверить текст, попробуйте ещё раз")]
    Unavailable,
}

impl Rejection {
    /// You may display `Rejection` in any manner you choose, but this will return a reasonable
    /// default message to show the author.
    pub fn generic_str(&self) -> &'static str {
        match self {
            Self::BadLanguage { .. } => "Пожалуйста, исправьте слова, что отмечены звёздочками",
            Self::Unavailable => "Не удалось проверить текст, попробуйте ещё раз",
        }
    }

    /// Like [`Self::generic_str`], but includes the masked text when there is one.
    pub fn contextual_string(&self) -> String {
        self.to_string()
    }

    /// The masked text, if the rejection was for bad language.
    pub fn redacted(&self) -> Option<&str> {
        match self {
            Self::BadLanguage { redacted } => Some(redacted.as_str()),
            _ => None,
        }
    }
}
