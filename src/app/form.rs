//! New-comment form state and validation

use crate::core::NewComment;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const BODY_REQUIRED: &str = "Enter some text";

/// Which input the form cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Body,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Body,
            FormField::Body => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Body,
            FormField::Email => FormField::Name,
            FormField::Body => FormField::Email,
        }
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.body.is_none()
    }
}

/// State for the new-comment form
#[derive(Debug, Default)]
pub struct CommentFormState {
    /// Whether the form is shown
    pub open: bool,

    pub name: String,
    pub email: String,
    pub body: String,

    /// Field the cursor is on
    pub focus: FormField,

    /// Validation messages from the last submit attempt
    pub errors: FieldErrors,

    /// A submission is in flight; blocks duplicate submits
    pub submitting: bool,

    /// Display string from a failed add-comment request
    pub error: Option<String>,
}

impl CommentFormState {
    /// Open the form with the cursor on the name field
    pub fn open(&mut self) {
        self.open = true;
        self.focus = FormField::Name;
    }

    /// Close the form and discard everything in it.
    ///
    /// Used when the selected post changes and when the user dismisses the
    /// form; the next open starts from a blank slate.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Clear action: reset all three fields and all error messages
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body.clear();
        self.errors = FieldErrors::default();
        self.error = None;
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Body => &mut self.body,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate for submission against the given post.
    ///
    /// Trims all three fields. Every field that is empty after trimming gets
    /// its own error message; returns the payload only when all are present.
    pub fn validate(&mut self, post_id: i64) -> Option<NewComment> {
        let name = self.name.trim();
        let email = self.email.trim();
        let body = self.body.trim();

        self.errors = FieldErrors {
            name: name.is_empty().then_some(NAME_REQUIRED),
            email: email.is_empty().then_some(EMAIL_REQUIRED),
            body: body.is_empty().then_some(BODY_REQUIRED),
        };

        if !self.errors.is_empty() {
            return None;
        }

        Some(NewComment {
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        })
    }

    /// Submission settled successfully: clear all fields, keep the form open.
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.clear();
    }

    /// Submission settled with an error: keep the form state for retry.
    pub fn submit_failed(&mut self, error: String) {
        self.submitting = false;
        self.error = Some(error);
    }
}
