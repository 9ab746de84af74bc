use super::Error;

/// Error when text read from storage names no member of the target enum.
#[derive(Debug)]
pub(super) struct EnumLookupError {
    pub(super) enum_name: &'static str,
    pub(super) text: Box<str>,
}

impl std::error::Error for EnumLookupError {}

impl core::fmt::Display for EnumLookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`{}` is not a member of enum `{}`",
            self.text, self.enum_name
        )
    }
}

impl Error {
    pub fn enum_lookup(enum_name: &'static str, text: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EnumLookup(EnumLookupError {
            enum_name,
            text: text.into().into(),
        }))
    }

    /// Returns `true` if an enum name lookup failure is anywhere in the chain.
    pub fn is_enum_lookup(&self) -> bool {
        self.find(|kind| matches!(kind, super::ErrorKind::EnumLookup(_)).then_some(()))
            .is_some()
    }
}
