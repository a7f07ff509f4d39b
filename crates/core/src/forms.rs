// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validated request payloads.
//!
//! Each form checks its required fields in `validate()`. Callers run the
//! check before building a request, so an incomplete form never costs a
//! round trip.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::payload::{FilePart, MultipartForm};
use crate::resource::ResourceRef;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::FieldRequired { field });
    }
    Ok(())
}

fn require_some<T>(value: &Option<T>, field: &'static str) -> Result<()> {
    if value.is_none() {
        return Err(Error::FieldRequired { field });
    }
    Ok(())
}

/// Mobile + password login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub mobile: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        require(&self.mobile, "Mobile")?;
        require(&self.password, "Password")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub state: String,
    pub city: String,
}

impl UserRegistration {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        require(&self.password, "Password")?;
        require(&self.mobile, "Mobile")?;
        require(&self.state, "State")?;
        require(&self.city, "City")
    }
}

/// Full replacement of the signed-in user's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub state: String,
    pub city: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        require(&self.mobile, "Mobile")?;
        require(&self.state, "State")?;
        require(&self.city, "City")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Feedback {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        require(&self.subject, "Subject")?;
        require(&self.message, "Message")
    }
}

/// A star rating with optional review text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RatingSubmission {
    pub user_id: i64,
    pub vendor_id: i64,
    pub rating: u8,
    pub review: String,
}

impl RatingSubmission {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(Error::InvalidRating(self.rating));
        }
        Ok(())
    }
}

/// Location and category filter for vendor listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VendorQuery {
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i64>,
}

impl VendorQuery {
    pub fn near(city: impl Into<String>, state: impl Into<String>) -> Self {
        VendorQuery {
            city: city.into(),
            state: state.into(),
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category_id: i64, subcategory_id: Option<i64>) -> Self {
        self.category_id = Some(category_id);
        self.subcategory_id = subcategory_id;
        self
    }
}

/// Body of bookmark add/remove calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRequest {
    pub user_id: i64,
    pub vendor_id: ResourceRef,
}

/// Shop sign-up, submitted as multipart with optional photos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorRegistration {
    pub shop_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact_number: String,
    pub facilities: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub password: String,
    /// `self` for owner sign-up, otherwise the registering agent.
    pub created_by: String,
    pub sales_executive_id: Option<String>,
    pub images: Vec<FilePart>,
}

impl VendorRegistration {
    pub fn validate(&self) -> Result<()> {
        require(&self.shop_name, "Shop name")?;
        require(&self.address, "Address")?;
        require(&self.contact_number, "Contact number")?;
        require(&self.state, "State")?;
        require(&self.city, "City")?;
        require(&self.password, "Password")?;
        require_some(&self.category_id, "Category")?;
        require_some(&self.subcategory_id, "Subcategory")
    }

    pub fn to_form(&self) -> MultipartForm {
        let created_by = if self.created_by.is_empty() {
            "self"
        } else {
            self.created_by.as_str()
        };
        let mut form = MultipartForm::new()
            .text("shop_name", &self.shop_name)
            .text("address", &self.address)
            .text("city", &self.city)
            .text("state", &self.state)
            .text("contact_number", &self.contact_number)
            .text("facilities", &self.facilities)
            .text_opt("category_id", self.category_id.map(|id| id.to_string()))
            .text_opt(
                "subcategory_id",
                self.subcategory_id.map(|id| id.to_string()),
            )
            .text("password", &self.password)
            .text("created_by", created_by)
            .text(
                "sales_executive_id",
                self.sales_executive_id.clone().unwrap_or_default(),
            );
        for image in &self.images {
            form = form.file(image.clone().with_field("images"));
        }
        form
    }
}

/// Edit of an existing shop. Password and subcategory are only sent when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorUpdate {
    pub shop_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact_number: String,
    pub facilities: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub password: Option<String>,
    pub new_images: Vec<FilePart>,
}

impl VendorUpdate {
    pub fn validate(&self) -> Result<()> {
        require(&self.shop_name, "Shop name")?;
        require(&self.address, "Address")?;
        require(&self.contact_number, "Contact number")?;
        require(&self.state, "State")?;
        require(&self.city, "City")?;
        require_some(&self.category_id, "Category")
    }

    pub fn to_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new()
            .text("shop_name", &self.shop_name)
            .text("address", &self.address)
            .text("city", &self.city)
            .text("state", &self.state)
            .text("contact_number", &self.contact_number)
            .text("facilities", &self.facilities)
            .text_opt("category_id", self.category_id.map(|id| id.to_string()))
            .text_opt(
                "subcategory_id",
                self.subcategory_id.map(|id| id.to_string()),
            )
            .text_opt(
                "password",
                self.password.clone().filter(|p| !p.is_empty()),
            );
        for image in &self.new_images {
            form = form.file(image.clone().with_field("images"));
        }
        form
    }
}

/// Sales-agent sign-up with ID proof and optional bank passbook scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesRegistration {
    pub name: String,
    pub contact_number: String,
    pub bank_name: String,
    pub bank_account_name: String,
    pub bank_account_number: String,
    pub bank_ifsc: String,
    pub password: String,
    pub document: Option<FilePart>,
    pub passbook: Option<FilePart>,
}

impl SalesRegistration {
    pub fn validate(&self) -> Result<()> {
        require(&self.contact_number, "Contact number")?;
        require(&self.name, "Name")?;
        require_some(&self.document, "ID document")?;
        require(&self.bank_account_name, "Account holder name")?;
        require(&self.bank_name, "Bank name")?;
        require(&self.bank_account_number, "Account number")?;
        require(&self.bank_ifsc, "IFSC code")
    }

    pub fn to_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new()
            .text("contact_number", &self.contact_number)
            .text("name", &self.name)
            .text("document_title", "ID Proof")
            .text("bank_name", &self.bank_name)
            .text("bank_account_name", &self.bank_account_name)
            .text("bank_account_number", &self.bank_account_number)
            .text("bank_ifsc", &self.bank_ifsc)
            .text("password", &self.password);
        if let Some(doc) = &self.document {
            form = form.file(doc.clone().with_field("document_file"));
        }
        if let Some(passbook) = &self.passbook {
            form = form.file(passbook.clone().with_field("bank_passbook_img"));
        }
        form
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
