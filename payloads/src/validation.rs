use std::collections::BTreeMap;

pub const EMAIL_MAX_LEN: usize = 255;
pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MIN_LEN: usize = 8;
/// A new password must contain at least one of these.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Field name to user-facing message.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// Declarative constraints on a single text input.
///
/// Values are trimmed before checking and lengths count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub label: &'static str,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub options: Option<&'static [&'static str]>,
}

impl FieldRule {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            required: false,
            min_len: None,
            max_len: None,
            options: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn min_len(self, min_len: usize) -> Self {
        Self {
            min_len: Some(min_len),
            ..self
        }
    }

    pub const fn max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }

    pub const fn one_of(self, options: &'static [&'static str]) -> Self {
        Self {
            options: Some(options),
            ..self
        }
    }

    pub fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return match self.required {
                true => Err(format!("{} is required", self.label)),
                false => Ok(()),
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_len
            && len < min
        {
            return Err(format!(
                "{} must be at least {min} characters",
                self.label
            ));
        }
        if let Some(max) = self.max_len
            && len > max
        {
            return Err(format!(
                "{} must not exceed {max} characters",
                self.label
            ));
        }
        if let Some(options) = self.options
            && !options.contains(&value)
        {
            return Err(format!(
                "Please select a valid {}",
                self.label.to_lowercase()
            ));
        }
        Ok(())
    }
}

/// Loose structural email check: one `@`, a non-empty local part, and a
/// dotted domain without empty labels.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty()
        || email.len() > EMAIL_MAX_LEN
        || email.chars().any(char::is_whitespace)
    {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

pub fn check_email(label: &str, email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    match is_valid_email(email) {
        true => Ok(()),
        false => Err("Please enter a valid email address".into()),
    }
}

/// Phone numbers may contain spaces, `+`, `-` and parentheses around
/// 10 to 15 digits.
pub fn check_phone(label: &str, phone: &str) -> Result<(), String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(format!("{label} is required"));
    }
    if phone
        .chars()
        .any(|c| !c.is_ascii_digit() && !" +-()".contains(c))
    {
        return Err(format!("{label} can only contain digits"));
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(10..=15).contains(&digits) {
        return Err(format!("{label} must have 10 to 15 digits"));
    }
    Ok(())
}

/// Validation result for a new password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidation {
    Valid,
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Password must be at least 8 characters"),
            Self::MissingUppercase => Some(
                "Password must contain at least one uppercase letter",
            ),
            Self::MissingLowercase => Some(
                "Password must contain at least one lowercase letter",
            ),
            Self::MissingDigit => {
                Some("Password must contain at least one number")
            }
            Self::MissingSymbol => Some(
                "Password must contain at least one special character (@$!%*?&)",
            ),
        }
    }
}

/// Validate a new password.
///
/// Rules:
/// - at least 8 characters
/// - at least one ASCII uppercase letter, lowercase letter and digit
/// - at least one of `@$!%*?&`
pub fn validate_password(password: &str) -> PasswordValidation {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return PasswordValidation::TooShort;
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordValidation::MissingUppercase;
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordValidation::MissingLowercase;
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordValidation::MissingDigit;
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return PasswordValidation::MissingSymbol;
    }
    PasswordValidation::Valid
}

pub const LOCATION_NAME: FieldRule =
    FieldRule::new("Location name").required().min_len(2).max_len(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

pub fn validate_login_field(field: LoginField, value: &str) -> Option<String> {
    match field {
        LoginField::Email => check_email("Email", value).err(),
        LoginField::Password => {
            if value.is_empty() {
                Some("Password is required".into())
            } else if value.chars().count() < LOGIN_PASSWORD_MIN_LEN {
                Some("Password must be at least 6 characters".into())
            } else {
                None
            }
        }
    }
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors<LoginField> {
    [
        (LoginField::Email, email),
        (LoginField::Password, password),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        validate_login_field(field, value).map(|message| (field, message))
    })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

pub fn validate_change_password(
    current: &str,
    new: &str,
    confirm: &str,
) -> FieldErrors<PasswordField> {
    let mut errors = FieldErrors::new();
    if current.is_empty() {
        errors.insert(
            PasswordField::Current,
            "Current password is required".into(),
        );
    }
    if let Some(message) = validate_password(new).error_message() {
        errors.insert(PasswordField::New, message.into());
    } else if !current.is_empty() && new == current {
        errors.insert(
            PasswordField::New,
            "New password must be different from the current password".into(),
        );
    }
    if confirm.is_empty() {
        errors.insert(
            PasswordField::Confirm,
            "Please confirm your new password".into(),
        );
    } else if confirm != new {
        errors.insert(PasswordField::Confirm, "Passwords do not match".into());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldRule =
        FieldRule::new("Space name").required().min_len(3).max_len(100);

    #[test]
    fn field_rule_bounds_count_characters() {
        assert_eq!(NAME.check("  "), Err("Space name is required".into()));
        assert!(NAME.check("ab").is_err());
        assert!(NAME.check("abc").is_ok());
        // Three characters, nine bytes.
        assert!(NAME.check("日本語").is_ok());
        assert!(NAME.check(&"x".repeat(101)).is_err());
        assert!(NAME.check(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn optional_rule_accepts_empty() {
        let rule = FieldRule::new("Operating hours").max_len(100);
        assert!(rule.check("").is_ok());
        assert!(rule.check(&"9".repeat(101)).is_err());
    }

    #[test]
    fn option_rule_rejects_unknown_values() {
        let rule = FieldRule::new("Category")
            .required()
            .one_of(&["premium", "standard", "budget"]);
        assert!(rule.check("budget").is_ok());
        assert_eq!(
            rule.check("luxury"),
            Err("Please select a valid category".into())
        );
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("NewSecure@123").is_valid());
        assert_eq!(
            validate_password("newsecure123"),
            PasswordValidation::MissingUppercase
        );
        assert_eq!(validate_password("Ab1@"), PasswordValidation::TooShort);
        assert_eq!(
            validate_password("NEWSECURE@123"),
            PasswordValidation::MissingLowercase
        );
        assert_eq!(
            validate_password("NewSecure@abc"),
            PasswordValidation::MissingDigit
        );
        assert_eq!(
            validate_password("NewSecure#123"),
            PasswordValidation::MissingSymbol
        );
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("admin@cowork.test"));
        assert!(!is_valid_email("admin@localhost"));
        assert!(!is_valid_email("@cowork.test"));
        assert!(!is_valid_email("ad min@cowork.test"));
        assert!(!is_valid_email("admin@cowork..test"));
    }

    #[test]
    fn phones() {
        assert!(check_phone("Phone", "+91 98765-43210").is_ok());
        assert!(check_phone("Phone", "12345").is_err());
        assert!(check_phone("Phone", "98765x43210").is_err());
    }

    #[test]
    fn login_requires_email_and_six_char_password() {
        let errors = validate_login("nope", "12345");
        assert_eq!(errors.len(), 2);
        assert!(validate_login("admin@cowork.test", "123456").is_empty());
    }

    #[test]
    fn change_password_cross_field_rules() {
        let errors =
            validate_change_password("OldPass@1", "OldPass@1", "Other@123");
        assert!(errors.contains_key(&PasswordField::New));
        assert_eq!(
            errors.get(&PasswordField::Confirm).map(String::as_str),
            Some("Passwords do not match")
        );

        assert!(
            validate_change_password(
                "OldPass@1",
                "NewSecure@123",
                "NewSecure@123"
            )
            .is_empty()
        );
    }
}
