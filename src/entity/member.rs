// src/entity/member.rs
use serde::{Deserialize, Serialize};

use super::{null_as_default, patch, patch_opt};

/// A team member, keyed by a caller-chosen `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Member {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            role: None,
            position: None,
            birthdate: None,
            phone: None,
            project_id: None,
            is_active: None,
        }
    }

    pub(crate) fn apply(&mut self, update: MemberUpdate) {
        patch(&mut self.user_id, update.user_id);
        patch(&mut self.name, update.name);
        patch(&mut self.email, update.email);
        patch_opt(&mut self.role, update.role);
        patch_opt(&mut self.position, update.position);
        patch_opt(&mut self.birthdate, update.birthdate);
        patch_opt(&mut self.phone, update.phone);
        patch_opt(&mut self.project_id, update.project_id);
        patch_opt(&mut self.is_active, update.is_active);
    }
}

/// Update payload for a member
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    /// Rewrites the key itself. Uniqueness is not re-checked.
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Option<String>>, // Some(None) to clear, Some(Some(s)) to set
    pub position: Option<Option<String>>,
    pub birthdate: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub project_id: Option<Option<String>>,
    pub is_active: Option<Option<bool>>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.position.is_none()
            && self.birthdate.is_none()
            && self.phone.is_none()
            && self.project_id.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_field_names() {
        let mut member = Member::new("u7", "Lucía", "lucia@example.com");
        member.project_id = Some("p1".to_string());
        member.is_active = Some(true);

        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["userId"], "u7");
        assert_eq!(value["projectId"], "p1");
        assert_eq!(value["isActive"], true);
        assert!(value.get("role").is_none());
    }

    #[test]
    fn test_missing_name_and_email_default() {
        let member: Member = serde_json::from_str(r#"{"userId":"u9","email":null}"#).unwrap();
        assert_eq!(member.user_id, "u9");
        assert_eq!(member.name, "");
        assert_eq!(member.email, "");
    }

    #[test]
    fn test_apply_sets_and_clears() {
        let mut member = Member::new("u7", "Lucía", "lucia@example.com");
        member.project_id = Some("p1".to_string());
        member.role = Some("QA".to_string());

        member.apply(MemberUpdate {
            name: Some("Lucía R.".to_string()),
            project_id: Some(None),
            ..Default::default()
        });

        assert_eq!(member.name, "Lucía R.");
        assert_eq!(member.project_id, None);
        assert_eq!(member.role.as_deref(), Some("QA"));
        assert_eq!(member.email, "lucia@example.com");
    }
}
