//! Password input with a show/hide toggle.

/// Text field whose value is masked until the user reveals it.
///
/// Toggling visibility never changes the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureField {
    value: String,
    is_secured: bool,
}

impl SecureField {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            is_secured: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_secured(&self) -> bool {
        self.is_secured
    }

    pub fn toggle_visibility(&mut self) {
        self.is_secured = !self.is_secured;
    }

    /// Text as it should be drawn on screen
    pub fn display(&self) -> String {
        if self.is_secured {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Default for SecureField {
    fn default() -> Self {
        Self::new()
    }
}

// Never print the raw value in debug output
impl std::fmt::Debug for SecureField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureField")
            .field("len", &self.value.chars().count())
            .field("is_secured", &self.is_secured)
            .finish()
    }
}
