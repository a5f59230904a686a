// ABOUTME: Input validation utilities for API request handlers
// ABOUTME: Request-shape checks that run before any service is invoked

/// Maximum sizes for user-supplied fields (in characters)
pub const MAX_TAG_NAME_SIZE: usize = 100;
pub const MAX_TASK_TITLE_SIZE: usize = 500;
pub const MAX_EMAIL_SIZE: usize = 254;
pub const MAX_USER_NAME_SIZE: usize = 200;

/// Validate and normalize a tag name
pub fn validate_tag_name(name: &str) -> Result<String, String> {
    validate_text_field(name, "Tag name", MAX_TAG_NAME_SIZE)
}

/// Validate and normalize a task title
pub fn validate_task_title(title: &str) -> Result<String, String> {
    validate_text_field(title, "Task title", MAX_TASK_TITLE_SIZE)
}

/// Validate and normalize a user display name
pub fn validate_user_name(name: &str) -> Result<String, String> {
    validate_text_field(name, "User name", MAX_USER_NAME_SIZE)
}

/// Validate and normalize an email address.
/// A full RFC parse is out of scope; the shape check catches the
/// obviously-wrong inputs before they reach storage.
pub fn validate_email(email: &str) -> Result<String, String> {
    let trimmed = validate_text_field(email, "Email", MAX_EMAIL_SIZE)?;

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Email is missing an '@'".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(format!("Email '{}' is not a valid address", trimmed));
    }

    Ok(trimmed)
}

fn validate_text_field(value: &str, field_name: &str, max_size: usize) -> Result<String, String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    if trimmed.chars().count() > max_size {
        return Err(format!(
            "{} exceeds maximum size of {} characters",
            field_name, max_size
        ));
    }

    // Null bytes would corrupt the TEXT columns
    if trimmed.contains('\0') {
        return Err(format!("{} contains invalid null bytes", field_name));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tag_name_valid() {
        assert_eq!(validate_tag_name("Urgent").unwrap(), "Urgent");
    }

    #[test]
    fn test_validate_tag_name_trims_whitespace() {
        assert_eq!(validate_tag_name("  Urgent  ").unwrap(), "Urgent");
    }

    #[test]
    fn test_validate_tag_name_empty() {
        assert!(validate_tag_name("").is_err());
        assert!(validate_tag_name("   ").is_err());
    }

    #[test]
    fn test_validate_tag_name_too_large() {
        let large = "a".repeat(MAX_TAG_NAME_SIZE + 1);
        assert!(validate_tag_name(&large).is_err());
    }

    #[test]
    fn test_validate_tag_name_null_bytes() {
        assert!(validate_tag_name("Urg\0ent").is_err());
    }

    #[test]
    fn test_validate_task_title_valid() {
        assert!(validate_task_title("Write the report").is_ok());
    }

    #[test]
    fn test_validate_email_valid() {
        assert_eq!(
            validate_email("ada@example.com").unwrap(),
            "ada@example.com"
        );
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada@nodot").is_err());
    }
}
