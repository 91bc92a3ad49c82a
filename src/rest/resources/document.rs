//! Dispute document resource.
//!
//! Documents are evidence files attached to a dispute. They live under
//! `disputes/{dispute}/documents/{document}` and carry that path in their
//! `location` field, which is where reload and destroy are sent.

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::rest::resource::fetch;
use crate::rest::resources::{location_path, Dispute};
use crate::rest::{api_resource, ApiResource, Destroy, Endpoint, Reload, ResourceError};

api_resource!(
    /// An evidence document attached to a dispute.
    Document,
    "document"
);

impl Endpoint for Document {
    const COLLECTION_PATH: &'static str = "documents";

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        location_path(self.as_object())
    }
}

impl Reload for Document {}

impl Destroy for Document {
    fn is_destroyed(&self) -> bool {
        self.get_bool("deleted").unwrap_or(false)
    }
}

impl Document {
    /// Retrieves a document of `dispute_id` by id.
    ///
    /// # Errors
    ///
    /// Propagates request errors; returns
    /// [`ResourceError::UnexpectedObject`] if the response is not a document.
    pub async fn retrieve(
        client: &OmiseClient,
        dispute_id: &str,
        document_id: &str,
    ) -> Result<Self, ResourceError> {
        let path = Dispute::instance_path(dispute_id)
            .join(Self::COLLECTION_PATH)
            .join(document_id);
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::testing::{test_client, MockTransport};
    use crate::rest::ResourceObject;
    use serde_json::json;

    fn document_json(deleted: bool) -> serde_json::Value {
        json!({
            "object": "document",
            "id": "docu_test",
            "livemode": false,
            "location": "/disputes/dspt_test/documents/docu_test",
            "deleted": deleted,
            "filename": "evidence.png"
        })
    }

    fn document() -> Document {
        Document::from_object(ResourceObject::from_value(document_json(false)).unwrap())
    }

    #[tokio::test]
    async fn test_retrieve_under_dispute() {
        let transport = MockTransport::with_json([document_json(false)]);
        let client = test_client(transport.clone());

        let document = Document::retrieve(&client, "dspt_test", "docu_test")
            .await
            .unwrap();
        assert_eq!(document.get_str("filename").unwrap(), "evidence.png");
        assert!(!document.is_destroyed());
        assert_eq!(
            transport.requests()[0].url.as_str(),
            "https://api.omise.co/disputes/dspt_test/documents/docu_test"
        );
    }

    #[tokio::test]
    async fn test_reload_follows_location() {
        let transport = MockTransport::with_json([document_json(true)]);
        let client = test_client(transport.clone());

        let mut document = document();
        document.reload(&client).await.unwrap();

        assert!(document.get_bool("deleted").unwrap());
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "https://api.omise.co/disputes/dspt_test/documents/docu_test"
        );
    }

    #[tokio::test]
    async fn test_destroy_marks_deleted() {
        let transport = MockTransport::with_json([document_json(true)]);
        let client = test_client(transport.clone());

        let mut document = document();
        document.destroy(&client).await.unwrap();

        assert!(document.is_destroyed());
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.url.as_str(),
            "https://api.omise.co/disputes/dspt_test/documents/docu_test"
        );
    }
}
