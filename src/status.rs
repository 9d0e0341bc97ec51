//! The one-line error status shown under the expression.

/// Message plus visibility. Visible exactly when the last evaluation failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorLine {
    message: String,
    visible: bool,
}

impl ErrorLine {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.message.clear();
        self.visible = false;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut line = ErrorLine::default();
        assert!(!line.is_visible());

        line.show("Invalid input at: x");
        assert!(line.is_visible());
        assert_eq!(line.message(), "Invalid input at: x");

        line.hide();
        assert!(!line.is_visible());
        assert_eq!(line.message(), "");
    }
}
