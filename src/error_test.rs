use super::*;

#[test]
fn messages_match_form_copy() {
    assert_eq!(ValidationError::EmptyFields.to_string(), "Name and cost cannot be empty.");
    assert_eq!(ValidationError::InvalidCost.to_string(), "Please enter a valid positive cost.");
    assert_eq!(ValidationError::BlankAssemblyName.to_string(), "Enter assembly name.");
}

#[test]
fn codes_are_distinct() {
    let all = [
        ValidationError::EmptyFields,
        ValidationError::BlankName,
        ValidationError::InvalidCost,
        ValidationError::BlankAssemblyName,
    ];
    let mut codes: Vec<&str> = all.iter().map(ErrorCode::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
}

#[test]
fn codes_are_prefixed() {
    assert_eq!(ValidationError::InvalidCost.error_code(), "E_INVALID_COST");
    assert!(ValidationError::BlankName.error_code().starts_with("E_"));
}
