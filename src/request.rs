//! Turns the current form state into a lookup request

use crate::error::LookupError;
use crate::form::{FormState, Group};

/// What to ask the API for. Built per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub group: Group,
    pub route: &'static str,
    pub name: String,
}

impl RequestDescriptor {
    pub fn new(group: Group, name: &str) -> Result<Self, LookupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LookupError::Validation(format!(
                "Please select a {} to learn about.",
                group.label()
            )));
        }

        Ok(Self {
            group,
            route: group.route(),
            name: name.to_string(),
        })
    }
}

/// Validate the form and build the request for the checked toggle.
pub fn build_request(form: &FormState) -> Result<RequestDescriptor, LookupError> {
    let group = form.selection().group().ok_or_else(|| {
        LookupError::Validation("Please select either stars or planets.".to_string())
    })?;

    RequestDescriptor::new(group, form.name(group))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_toggle_checked() {
        let form = FormState::new();
        assert_eq!(
            build_request(&form),
            Err(LookupError::Validation(
                "Please select either stars or planets.".to_string()
            ))
        );
    }

    #[test]
    fn test_empty_name_mentions_group() {
        let mut form = FormState::new();
        form.toggle_changed(Group::Planets, true);
        form.set_name(Group::Planets, "   ");

        match build_request(&form) {
            Err(LookupError::Validation(msg)) => {
                assert_eq!(msg, "Please select a planet to learn about.")
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_name_of_inactive_group_is_ignored() {
        let mut form = FormState::new();
        form.set_name(Group::Planets, "Mars");
        form.toggle_changed(Group::Stars, true);
        assert!(matches!(
            build_request(&form),
            Err(LookupError::Validation(_))
        ));
    }

    #[test]
    fn test_stars_sun() {
        let mut form = FormState::new();
        form.toggle_changed(Group::Stars, true);
        form.set_name(Group::Stars, "  Sun ");

        let request = build_request(&form).unwrap();
        assert_eq!(request.group, Group::Stars);
        assert_eq!(request.route, "stars");
        assert_eq!(request.name, "Sun");
    }
}
