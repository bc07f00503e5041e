use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub userid: String,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub mail: Option<String>,
    pub telephone_number: Option<String>,
    pub employee_type: Option<String>,
    pub manager: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_decodes_directory_payload() {
        let json = r#"{
            "userid": "jdoe",
            "fullName": "J. Doe",
            "title": "Engineer",
            "mail": "jdoe@example.com",
            "telephoneNumber": "555-0100",
            "employeeType": "FTE",
            "manager": "asmith",
            "location": "Building 4"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.userid, "jdoe");
        assert_eq!(user.full_name.as_deref(), Some("J. Doe"));
        assert_eq!(user.manager.as_deref(), Some("asmith"));
    }
}
