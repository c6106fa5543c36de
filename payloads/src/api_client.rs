use crate::{AddressId, ImageId, PriceId, PropertyId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.patch(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch the full property aggregate: details, address, price,
    /// amenities, and images.
    pub async fn get_property(
        &self,
        property_id: &PropertyId,
    ) -> Result<responses::Property, ClientError> {
        let response =
            self.empty_get(&format!("/property/{property_id}")).await?;
        ok_body(response).await
    }

    /// Update the general-details fields of a property.
    pub async fn update_general_details(
        &self,
        property_id: &PropertyId,
        details: &requests::UpdateGeneralDetails,
    ) -> Result<(), ClientError> {
        let response =
            self.put(&format!("/property/{property_id}"), details).await?;
        ok_empty(response).await
    }

    /// Update the address sub-resource of a property.
    pub async fn update_address(
        &self,
        property_id: &PropertyId,
        address_id: &AddressId,
        details: &requests::UpdateAddress,
    ) -> Result<(), ClientError> {
        let response = self
            .put(
                &format!("/property/{property_id}/addresses/{address_id}"),
                details,
            )
            .await?;
        ok_empty(response).await
    }

    /// Update the price sub-resource of a property.
    pub async fn update_price(
        &self,
        property_id: &PropertyId,
        price_id: &PriceId,
        details: &requests::UpdatePrice,
    ) -> Result<(), ClientError> {
        let response = self
            .put(
                &format!("/property/{property_id}/prices/{price_id}"),
                details,
            )
            .await?;
        ok_empty(response).await
    }

    /// Replace the full amenity set of a property.
    pub async fn replace_amenities(
        &self,
        property_id: &PropertyId,
        details: &requests::ReplaceAmenities,
    ) -> Result<(), ClientError> {
        let response = self
            .patch(&format!("/property/{property_id}/amenities"), details)
            .await?;
        ok_empty(response).await
    }

    /// Upload one image file for a property as multipart form data, field
    /// name `image`.
    pub async fn upload_image(
        &self,
        property_id: &PropertyId,
        file_name: String,
        data: Vec<u8>,
    ) -> Result<(), ClientError> {
        let part =
            reqwest::multipart::Part::bytes(data).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("image", part);
        let response = self
            .post_multipart(&format!("/property/{property_id}/images"), form)
            .await?;
        ok_empty(response).await
    }

    /// Delete one property image by id.
    pub async fn delete_image(
        &self,
        property_id: &PropertyId,
        image_id: &ImageId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_delete(&format!(
                "/property/{property_id}/images/{image_id}"
            ))
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let client = APIClient {
            address: "http://localhost:8000".to_string(),
            inner_client: reqwest::Client::new(),
        };
        assert_eq!(
            client.format_url(&format!("/property/{}", PropertyId(7))),
            "http://localhost:8000/property/7"
        );
        assert_eq!(
            client.format_url(&format!(
                "/property/{}/addresses/{}",
                PropertyId(7),
                AddressId(3)
            )),
            "http://localhost:8000/property/7/addresses/3"
        );
        assert_eq!(
            client.format_url(&format!(
                "/property/{}/images/{}",
                PropertyId(7),
                ImageId(42)
            )),
            "http://localhost:8000/property/7/images/42"
        );
    }
}
