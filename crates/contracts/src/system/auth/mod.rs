use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter both email and password".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub admin_secret: String,
}

impl RegisterRequest {
    /// Form check before sending; `confirm` is not part of the payload
    pub fn validate(&self, confirm: &str) -> Result<(), String> {
        if self.email.trim().is_empty()
            || self.password.is_empty()
            || confirm.is_empty()
            || self.admin_secret.is_empty()
        {
            return Err("All fields are required".to_string());
        }
        if self.password != confirm {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

/// Signed-in admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"token":"t","admin":{"_id":"1","email":"a@b.in","role":"admin"}}"#,
        )
        .unwrap();
        assert_eq!(res.admin.id, "1");
        assert_eq!(res.token, "t");
    }

    #[test]
    fn test_register_validation() {
        let mut req = RegisterRequest {
            email: "a@b.in".into(),
            password: "secret".into(),
            admin_secret: String::new(),
        };
        assert_eq!(req.validate("secret"), Err("All fields are required".into()));
        req.admin_secret = "s".into();
        assert_eq!(req.validate("other"), Err("Passwords do not match".into()));
        assert!(req.validate("secret").is_ok());
        assert!(serde_json::to_string(&req).unwrap().contains("\"adminSecret\":\"s\""));
    }

    #[test]
    fn test_login_validation() {
        let req = LoginRequest {
            email: " ".into(),
            password: "x".into(),
        };
        assert!(req.validate().is_err());
    }
}
