use dalmatia_entities::event::{Event, Organizer};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

const MAX_TITLE_LEN: usize = 255;

pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 40
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

/// International format with an optional leading `+` and
/// common separators between the digits (E.164 allows 15 digits).
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let mut count = 0;
    for c in digits.chars() {
        match c {
            '0'..='9' => count += 1,
            ' ' | '-' | '/' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (6..=15).contains(&count)
}

#[derive(Debug, Error)]
pub enum OrganizerInvalidation {
    #[error("Missing name of the organizer")]
    Name,
    #[error("Missing surname of the organizer")]
    Surname,
    #[error("Invalid email")]
    Email,
    #[error("Invalid phone number of the organizer")]
    Phone,
}

impl Validate for Organizer {
    type Error = OrganizerInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(Self::Error::Name);
        }
        if self.surname.is_empty() {
            return Err(Self::Error::Surname);
        }
        if !is_valid_email(&self.email) {
            return Err(Self::Error::Email);
        }
        if !is_valid_phone(&self.phone) {
            return Err(Self::Error::Phone);
        }
        Ok(())
    }
}

impl AutoCorrect for Organizer {
    fn auto_correct(self) -> Self {
        let Self {
            name,
            surname,
            email,
            phone,
        } = self;
        Self {
            name: name.trim().to_owned(),
            surname: surname.trim().to_owned(),
            email: email.trim().to_owned(),
            phone: phone.trim().to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EventInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
    #[error("Invalid price")]
    Price,
    #[error("Invalid position")]
    Position,
    #[error(transparent)]
    Organizer(OrganizerInvalidation),
}

impl AutoCorrect for Event {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self.description = self
            .description
            .map(|x| x.trim().to_owned())
            .filter(|x| !x.is_empty());
        self.organizer = self.organizer.auto_correct();
        self
    }
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.is_empty() || self.title.chars().count() > MAX_TITLE_LEN {
            return Err(Self::Error::Title);
        }
        self.organizer.validate().map_err(Self::Error::Organizer)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Self::Error::Price);
        }
        if self.end < self.start {
            return Err(Self::Error::EndDateBeforeStart);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}
