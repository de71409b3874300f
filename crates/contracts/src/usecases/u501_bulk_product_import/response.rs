use serde::{Deserialize, Serialize};

use super::draft::ProductRecord;

/// Body of `POST /admin/products/bulk`
#[derive(Debug, Clone, Serialize)]
pub struct BulkCreateRequest {
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSuccess {
    pub index: usize,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkFailure {
    pub index: usize,
    #[serde(default)]
    pub product_name: String,
    pub error: String,
}

/// Per-record partition returned by the bulk create endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadResult {
    #[serde(default)]
    pub successful: Vec<BulkSuccess>,
    #[serde(default)]
    pub failed: Vec<BulkFailure>,
    #[serde(default)]
    pub total_processed: usize,
}

impl BulkUploadResult {
    /// Nothing failed; the local list may be cleared
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Bulk upload completed! {} products created successfully.",
            self.successful.len()
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkCreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<BulkUploadResult>,
}

impl BulkCreateResponse {
    pub fn into_result(self) -> Result<BulkUploadResult, String> {
        match (self.success, self.results) {
            (true, Some(results)) => Ok(results),
            (_, _) => Err(self
                .message
                .unwrap_or_else(|| "Failed to upload products".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_parsing() {
        let res: BulkCreateResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "done",
                "results": {
                    "successful": [{"index":0,"productId":"p1","productName":"Milk","productCategory":"other"}],
                    "failed": [{"index":1,"productName":"Curd","error":"Duplicate product"}],
                    "totalProcessed": 2
                }
            }"#,
        )
        .unwrap();
        let result = res.into_result().unwrap();
        assert!(!result.is_complete_success());
        assert_eq!(result.failed[0].error, "Duplicate product");
        assert_eq!(result.total_processed, 2);
        assert_eq!(
            result.summary(),
            "Bulk upload completed! 1 products created successfully."
        );
    }

    #[test]
    fn test_unsuccessful_uses_message() {
        let res: BulkCreateResponse =
            serde_json::from_str(r#"{"success":false,"message":"Not allowed"}"#).unwrap();
        assert_eq!(res.into_result(), Err("Not allowed".to_string()));
        let res: BulkCreateResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(res.into_result(), Err("Failed to upload products".to_string()));
    }
}
