use crate::error::Rejection;
use crate::models::{Choice, SubmitForm};

/// A submission after trimming, with the email folded to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForm {
    pub name: String,
    pub email: String,
    pub choice: Choice,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_submission(form: &SubmitForm) -> Result<NormalizedForm, Rejection> {
    let name = form.name.trim();
    let email = normalize_email(&form.email);
    let choice = form.choice.trim();

    if name.is_empty() || email.is_empty() || choice.is_empty() {
        return Err(Rejection::MissingFields);
    }

    Ok(NormalizedForm {
        name: name.to_string(),
        email,
        choice: Choice::from(choice),
    })
}
