//! REST access to the `/people` collection.

use common::model::person::{Person, PersonRow};
use web_sys::{File, FormData};

use super::{API_URL, ApiClient, ApiConfig, ApiError};

/// Client for the people resource. Rows come back as `PersonRow` so the
/// table can show whatever derived fields the backend adds.
pub struct PeopleApi {
    client: ApiClient<PersonRow>,
}

impl PeopleApi {
    pub fn new() -> Self {
        let mut client = ApiClient::new(API_URL);
        client.set_config(ApiConfig {
            base_path: "/people".to_string(),
        });
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PersonRow>, ApiError> {
        self.client.list(None, &[]).await
    }

    pub async fn delete(&self, id: i64) -> Result<PersonRow, ApiError> {
        self.client.delete(id, None).await
    }

    /// Creates a person together with their spreadsheet. The multipart
    /// payload carries the `name`, `surname` and `excel` parts and lives
    /// only for the duration of this call.
    pub async fn create_with_file(
        &self,
        person: &Person,
        file: &File,
    ) -> Result<PersonRow, ApiError> {
        let form_data =
            FormData::new().map_err(|_| ApiError::Request("form data allocation".to_string()))?;
        form_data
            .append_with_str("name", &person.name)
            .and_then(|_| form_data.append_with_str("surname", &person.surname))
            .and_then(|_| form_data.append_with_blob_and_filename("excel", file, &file.name()))
            .map_err(|_| ApiError::Request("form data field".to_string()))?;
        self.client.post_form_data(form_data, None).await
    }
}

impl Default for PeopleApi {
    fn default() -> Self {
        Self::new()
    }
}
