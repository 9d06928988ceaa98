use aws_sdk_s3::primitives::ByteStream;

use crate::adapters::object_store::ObjectStore;

/// S3-backed [`ObjectStore`]. The pipeline treats storage as a synchronous
/// call-and-wait collaborator, so the async SDK calls are bridged onto the
/// current runtime.
pub struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(s3_client: aws_sdk_s3::Client) -> Self {
        Self { s3_client }
    }
}

impl ObjectStore for S3ObjectStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
                    .map_err(|error| format!("failed to read object from s3: {error}"))?;

                response
                    .body
                    .collect()
                    .await
                    .map(|data| data.into_bytes().to_vec())
                    .map_err(|error| format!("failed to read object body from s3: {error}"))
            })
        })
    }

    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<(), String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let content_type = content_type.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .content_type(content_type)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}
