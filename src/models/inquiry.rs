use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a visitor inquiry
///
/// The only row kind this service ever writes. New inquiries always start
/// in the `pending` status; later states are managed out-of-band.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Inquiry {
    /// Unique identifier for the inquiry (UUID v4 as string)
    id: String,

    /// Name of the person inquiring
    name: String,

    /// Reply address
    email: String,

    /// Contact phone number
    phone: Option<String>,

    /// Company or organization
    company: Option<String>,

    /// Slug of the project the inquiry refers to, if any
    project_slug: Option<String>,

    /// The inquiry text
    message: String,

    /// Handling status, `pending` on creation
    status: String,

    /// When this inquiry was received
    created_at: NaiveDateTime,
}

impl Inquiry {
    /// Creates a new pending inquiry
    ///
    /// ### Arguments
    ///
    /// * `name` - Name of the person inquiring
    /// * `email` - Reply address
    /// * `phone` - Contact phone number, if given
    /// * `company` - Company or organization, if given
    /// * `project_slug` - Slug of the referenced project, if any
    /// * `message` - The inquiry text
    ///
    /// ### Returns
    ///
    /// A new `Inquiry` with a generated ID and status `pending`
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        company: Option<String>,
        project_slug: Option<String>,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            company,
            project_slug,
            message,
            status: "pending".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the inquiry's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the inquirer's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the reply address
    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    /// Gets the contact phone number
    pub fn get_phone(&self) -> Option<String> {
        self.phone.clone()
    }

    /// Gets the company or organization
    pub fn get_company(&self) -> Option<String> {
        self.company.clone()
    }

    /// Gets the referenced project slug
    pub fn get_project_slug(&self) -> Option<String> {
        self.project_slug.clone()
    }

    /// Gets the inquiry text
    pub fn get_message(&self) -> String {
        self.message.clone()
    }

    /// Gets the handling status
    pub fn get_status(&self) -> String {
        self.status.clone()
    }

    /// Gets the receipt timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
