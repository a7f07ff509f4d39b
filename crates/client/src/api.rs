// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed operations for every storefront endpoint.
//!
//! Read operations tolerate envelope variance: a missing or malformed list
//! yields an empty vector. Submissions validate locally first and never
//! reach the transport when a required field is missing.

use serde::Serialize;
use sf_core::forms::{
    BookmarkRequest, Credentials, Feedback, ProfileUpdate, RatingSubmission, SalesRegistration,
    UserRegistration, VendorQuery, VendorRegistration, VendorUpdate,
};
use sf_core::{
    Action, Bookmark, Category, Envelope, Notification, Page, Payload, ResourceRef, Review,
    Slider, Subcategory, User, Vendor,
};

use crate::client::{expect_success, ClientConfig, RemoteResourceClient};
use crate::error::{ClientError, ClientResult};
use crate::notice::NoticeSink;
use crate::store::SessionStore;
use crate::toggle::{toggle_optimistic, OptimisticHandle, ToggleOutcome};
use crate::transport::{HttpTransport, Transport};

/// Storefront operations over a [`RemoteResourceClient`].
pub struct StorefrontApi<T: Transport = HttpTransport> {
    client: RemoteResourceClient<T>,
}

impl StorefrontApi<HttpTransport> {
    /// Connects to the configured service over HTTP.
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        Ok(StorefrontApi::new(RemoteResourceClient::new(config)?))
    }
}

impl<T: Transport> StorefrontApi<T> {
    pub fn new(client: RemoteResourceClient<T>) -> Self {
        StorefrontApi { client }
    }

    pub fn client(&self) -> &RemoteResourceClient<T> {
        &self.client
    }

    async fn submit_json<S: Serialize>(&self, path: &str, body: &S) -> ClientResult<Envelope> {
        let payload = Payload::json(body)?;
        expect_success(self.client.submit_resource(path, payload).await?)
    }

    // Catalog

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let envelope = self.client.fetch_envelope("categories", &[]).await?;
        Ok(envelope.list(&["categories", "data"]))
    }

    pub async fn subcategories(&self, category_id: i64) -> ClientResult<Vec<Subcategory>> {
        let path = format!("subcategories/{category_id}");
        let envelope = self.client.fetch_envelope(&path, &[]).await?;
        Ok(envelope.list(&["subcategories", "data"]))
    }

    pub async fn states(&self) -> ClientResult<Vec<String>> {
        let envelope = self.client.fetch_envelope("states", &[]).await?;
        Ok(envelope.list(&["states", "data"]))
    }

    pub async fn cities(&self, state: &str) -> ClientResult<Vec<String>> {
        let envelope = self
            .client
            .fetch_envelope("cities", &[("state", state)])
            .await?;
        Ok(envelope.list(&["cities", "data"]))
    }

    /// Home-screen banners.
    pub async fn sliders(&self) -> ClientResult<Vec<Slider>> {
        let envelope = self.client.fetch_envelope("app_sliders", &[]).await?;
        Ok(envelope.list(&["data"]))
    }

    pub async fn notifications(&self) -> ClientResult<Vec<Notification>> {
        let envelope = self.client.fetch_envelope("notification", &[]).await?;
        Ok(envelope.list(&["data", "notifications"]))
    }

    /// Static "About us" page. Absent content yields an empty page.
    pub async fn about_page(&self) -> ClientResult<Page> {
        let envelope = self.client.fetch_envelope("pages/about", &[]).await?;
        Ok(envelope.object::<Page>("data").unwrap_or_default())
    }

    // Vendors

    /// Shops in the given city.
    pub async fn vendors_near(&self, city: &str, state: &str) -> ClientResult<Vec<Vendor>> {
        let envelope = self
            .submit_json("vendors", &VendorQuery::near(city, state))
            .await?;
        Ok(envelope.list(&["data"]))
    }

    pub async fn vendors_by_category(&self, query: &VendorQuery) -> ClientResult<Vec<Vendor>> {
        let envelope = self.submit_json("vendor-category-wise", query).await?;
        Ok(envelope.list(&["data"]))
    }

    /// One shop, or `None` when the server has no record for `id`.
    pub async fn vendor(&self, id: i64) -> ClientResult<Option<Vendor>> {
        let path = format!("vendor/{id}");
        let envelope = self.client.fetch_envelope(&path, &[]).await?;
        Ok(envelope.object("vendor"))
    }

    pub async fn reviews(&self, vendor_id: i64) -> ClientResult<Vec<Review>> {
        let path = format!("vendor-rating/{vendor_id}");
        let envelope = self.client.fetch_envelope(&path, &[]).await?;
        Ok(envelope.list(&["reviews", "data"]))
    }

    pub async fn rate_vendor(&self, rating: &RatingSubmission) -> ClientResult<Option<String>> {
        rating.validate()?;
        let envelope = self.submit_json("rate-vendor", rating).await?;
        Ok(envelope.message().map(str::to_string))
    }

    pub async fn register_vendor(&self, form: &VendorRegistration) -> ClientResult<Option<String>> {
        form.validate()?;
        let body = self
            .client
            .submit_resource("vendors/register", form.to_form().into())
            .await?;
        Ok(expect_success(body)?.message().map(str::to_string))
    }

    pub async fn update_vendor(
        &self,
        vendor_id: i64,
        form: &VendorUpdate,
    ) -> ClientResult<Option<String>> {
        form.validate()?;
        let path = format!("vendor-update/{vendor_id}");
        let body = self
            .client
            .update_resource(&path, form.to_form().into())
            .await?;
        Ok(expect_success(body)?.message().map(str::to_string))
    }

    pub async fn register_sales(&self, form: &SalesRegistration) -> ClientResult<Option<String>> {
        form.validate()?;
        let body = self
            .client
            .submit_resource("sales/register", form.to_form().into())
            .await?;
        Ok(expect_success(body)?.message().map(str::to_string))
    }

    // Bookmarks

    pub async fn bookmarks(&self, user_id: i64) -> ClientResult<Vec<Bookmark>> {
        let user_id = user_id.to_string();
        let envelope = self
            .client
            .fetch_envelope("bookmark/list", &[("user_id", &user_id)])
            .await?;
        Ok(envelope.list(&["data", "bookmarks"]))
    }

    pub async fn add_bookmark(&self, user_id: i64, vendor: &ResourceRef) -> ClientResult<()> {
        let request = BookmarkRequest {
            user_id,
            vendor_id: vendor.clone(),
        };
        self.submit_json("bookmark/add", &request).await?;
        Ok(())
    }

    pub async fn remove_bookmark(&self, user_id: i64, vendor: &ResourceRef) -> ClientResult<()> {
        let request = BookmarkRequest {
            user_id,
            vendor_id: vendor.clone(),
        };
        let body = self
            .client
            .delete_resource("bookmark/remove", Payload::json(&request)?)
            .await?;
        expect_success(body)?;
        Ok(())
    }

    /// Replaces `handle`'s membership with the server's bookmark list.
    ///
    /// Returns the number of bookmarked vendors.
    pub async fn load_bookmarks(
        &self,
        handle: &OptimisticHandle,
        user_id: i64,
    ) -> ClientResult<usize> {
        let bookmarks = self.bookmarks(user_id).await?;
        handle.replace_confirmed(
            bookmarks
                .iter()
                .map(|b| ResourceRef::Int(b.vendor_id)),
        );
        Ok(handle.snapshot().len())
    }

    /// Optimistically adds or removes `vendor` from `handle`, then commits.
    pub async fn toggle_bookmark(
        &self,
        handle: &OptimisticHandle,
        user_id: i64,
        vendor: ResourceRef,
        notices: &dyn NoticeSink,
    ) -> ToggleOutcome {
        let target = vendor.clone();
        let commit = move |intent: sf_core::ToggleIntent| async move {
            if intent.is_activate() {
                self.add_bookmark(user_id, &target).await
            } else {
                self.remove_bookmark(user_id, &target).await
            }
        };
        toggle_optimistic(handle, vendor, commit, notices).await
    }

    // Accounts

    /// Signs in and returns the user record.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        credentials.validate()?;
        let envelope = self.submit_json("users-login", credentials).await?;
        match envelope.object::<User>("user") {
            Some(user) => Ok(user),
            None => Err(ClientError::Protocol {
                status: None,
                message: envelope.message().map(str::to_string),
            }),
        }
    }

    pub async fn register_user(&self, form: &UserRegistration) -> ClientResult<Option<String>> {
        form.validate()?;
        let envelope = self.submit_json("users-register", form).await?;
        Ok(envelope.message().map(str::to_string))
    }

    pub async fn profile(&self, user_id: i64) -> ClientResult<Option<User>> {
        let id = user_id.to_string();
        let envelope = self.client.fetch_envelope("profile", &[("id", &id)]).await?;
        Ok(envelope.object("user"))
    }

    /// Refreshes the signed-in user from the server and publishes it.
    ///
    /// Returns `false` when nobody is signed in or the server has no record.
    pub async fn sync_profile(&self, store: &SessionStore) -> ClientResult<bool> {
        let Some(user_id) = store.state().user_id() else {
            return Ok(false);
        };
        match self.profile(user_id).await? {
            Some(user) => {
                store.dispatch(Action::SetUser(user));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn update_profile(&self, profile: &ProfileUpdate) -> ClientResult<Option<String>> {
        profile.validate()?;
        let body = self
            .client
            .update_resource("update-profile", Payload::json(profile)?)
            .await?;
        Ok(expect_success(body)?.message().map(str::to_string))
    }

    pub async fn send_feedback(&self, feedback: &Feedback) -> ClientResult<Option<String>> {
        feedback.validate()?;
        let envelope = self.submit_json("help-feedback", feedback).await?;
        Ok(envelope.message().map(str::to_string))
    }
}
