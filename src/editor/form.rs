use super::{validate_dimensions, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Rows,
    Columns,
}

/// Raw text of the reconfiguration form. Validity is recomputed from the two
/// strings on every read, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    pub width: String,
    pub height: String,
}

impl ConfigForm {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Rows => &mut self.height,
            FormField::Columns => &mut self.width,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Rows => self.height.as_str(),
            FormField::Columns => self.width.as_str(),
        }
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        if !ch.is_control() {
            self.field_mut(field).push(ch);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.field_mut(field).pop();
    }

    pub fn validation(&self) -> Result<(usize, usize), ValidationError> {
        validate_dimensions(&self.width, &self.height)
    }

    pub fn can_submit(&self) -> bool {
        self.validation().is_ok()
    }

    pub fn error_message(&self) -> Option<String> {
        self.validation().err().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_live_dimensions() {
        let form = ConfigForm::new(6, 4);
        assert_eq!(form.value(FormField::Columns), "6");
        assert_eq!(form.value(FormField::Rows), "4");
        assert_eq!(form.validation(), Ok((6, 4)));
    }

    #[test]
    fn validity_follows_every_keystroke() {
        let mut form = ConfigForm::new(5, 5);
        form.push_char(FormField::Rows, '0');
        assert!(!form.can_submit());
        assert_eq!(
            form.error_message().as_deref(),
            Some("Values must be between 3 and 10.")
        );

        form.pop_char(FormField::Rows);
        form.pop_char(FormField::Rows);
        assert_eq!(form.error_message().as_deref(), Some("Values must be integers."));

        form.push_char(FormField::Rows, '9');
        assert!(form.can_submit());
        assert_eq!(form.validation(), Ok((5, 9)));
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = ConfigForm::new(5, 5);
        form.push_char(FormField::Columns, '\n');
        form.push_char(FormField::Columns, '\t');
        assert_eq!(form.value(FormField::Columns), "5");
    }
}
