use roster_types::{Member, MemberDraft, RegistrationRequest, Session};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, GENERIC_REQUEST_MESSAGE};
use crate::upload::PhotoUpload;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a session credential. Where it gets persisted
    /// is the caller's decision.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.endpoint("api/auth/login")?;
        self.send(self.http.post(url).json(&LoginRequest { email, password }))
            .await
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        let url = self.endpoint("api/members")?;
        self.send(self.http.get(url)).await
    }

    pub async fn get_member(&self, id: i64) -> Result<Member, ApiError> {
        let url = self.endpoint(&format!("api/members/{id}"))?;
        self.send(self.http.get(url)).await
    }

    pub async fn create_member(&self, draft: &MemberDraft) -> Result<Member, ApiError> {
        let url = self.endpoint("api/members")?;
        self.send(self.http.post(url).json(draft)).await
    }

    pub async fn update_member(&self, id: i64, draft: &MemberDraft) -> Result<Member, ApiError> {
        let url = self.endpoint(&format!("api/members/{id}"))?;
        self.send(self.http.put(url).json(draft)).await
    }

    pub async fn delete_member(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("api/members/{id}"))?;
        self.send_unit(self.http.delete(url)).await
    }

    pub async fn search_members(&self, query: &str) -> Result<Vec<Member>, ApiError> {
        let url = self.endpoint("api/members/search")?;
        self.send(self.http.get(url).query(&[("q", query)])).await
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        let url = self.endpoint("api/registrations")?;
        self.send_unit(self.http.post(url).json(request)).await
    }

    /// Multipart photo upload. A wrong declared type or an oversized file is
    /// rejected here and never reaches the network.
    pub async fn upload_member_photo(
        &self,
        id: i64,
        photo: PhotoUpload,
    ) -> Result<Member, ApiError> {
        photo.validate()?;

        let url = self.endpoint(&format!("api/members/{id}/photo"))?;
        let part = reqwest::multipart::Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.content_type)
            .map_err(|e| ApiError::Request {
                message: GENERIC_REQUEST_MESSAGE.into(),
                detail: e.to_string(),
            })?;
        let form = reqwest::multipart::Form::new().part("photo", part);

        self.send(self.http.post(url).multipart(form)).await
    }
}
