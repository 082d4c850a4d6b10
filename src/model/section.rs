/// Explicit presence/absence of a report section's data.
///
/// Slide builders take a `Section` instead of testing emptiness themselves,
/// so the skip contract is visible in their signatures.
#[derive(Debug, PartialEq, Eq)]
pub enum Section<'a, T: ?Sized> {
    /// The section has content to render.
    Present(&'a T),
    /// The section is missing or empty; its slide is omitted.
    Absent,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<T: ?Sized> Clone for Section<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Section<'_, T> {}

/// Data that knows whether it has anything worth rendering.
pub trait SectionContent {
    fn has_content(&self) -> bool;
}

impl<'a, T: SectionContent + ?Sized> Section<'a, T> {
    /// `Present` only when the value exists and has content.
    pub fn of(value: Option<&'a T>) -> Self {
        match value {
            Some(v) if v.has_content() => Section::Present(v),
            _ => Section::Absent,
        }
    }
}

impl<'a, T: ?Sized> Section<'a, T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Section::Present(_))
    }

    pub fn as_option(&self) -> Option<&'a T> {
        match *self {
            Section::Present(v) => Some(v),
            Section::Absent => None,
        }
    }
}

impl<T> SectionContent for [T] {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}
