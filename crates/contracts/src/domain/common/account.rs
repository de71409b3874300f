use serde::{Deserialize, Serialize};

/// KYC document attached to a business owner or delivery person account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AccountDocument {
    /// Link to the stored file, whichever of the two url fields the backend filled
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().or(self.image_url.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDocuments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<AccountDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<AccountDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<AccountDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie: Option<AccountDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<AccountDocument>,
}

impl AccountDocuments {
    /// (label, document) pairs for the documents that are present
    pub fn present(&self) -> Vec<(&'static str, &AccountDocument)> {
        [
            ("Aadhar", self.aadhar.as_ref()),
            ("PAN", self.pan.as_ref()),
            ("Driving license", self.license.as_ref()),
            ("Selfie", self.selfie.as_ref()),
            ("Video", self.video.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, doc)| doc.map(|d| (label, d)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountImage {
    pub url: String,
    #[serde(default)]
    pub public_id: String,
}

/// Partial update that flips the verification flag of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationUpdate {
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_documents_keep_order() {
        let docs: AccountDocuments = serde_json::from_str(
            r#"{"selfie":{"url":"s.jpg","verified":true},"aadhar":{"number":"1234","imageUrl":"a.jpg"}}"#,
        )
        .unwrap();

        let present = docs.present();
        assert_eq!(present.len(), 2);
        assert_eq!(present[0].0, "Aadhar");
        assert_eq!(present[0].1.link(), Some("a.jpg"));
        assert_eq!(present[1].0, "Selfie");
        assert!(present[1].1.verified);
    }

    #[test]
    fn test_verification_update_wire_name() {
        let body = serde_json::to_string(&VerificationUpdate { is_verified: true }).unwrap();
        assert_eq!(body, r#"{"isVerified":true}"#);
    }
}
