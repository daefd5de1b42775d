//! Reqres user and colour records.

use pagination::Paged;
use serde::{Deserialize, Serialize};

/// A user listed by `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identifier.
    pub id: i64,
    /// Contact address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// A colour listed by `GET /api/colors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Colour identifier.
    pub id: i64,
    /// Colour name.
    pub name: String,
    /// Year the colour was featured.
    pub year: i32,
    /// Hex triplet such as `#98B2D1`.
    pub color: String,
    /// Pantone reference such as `15-4020`.
    pub pantone_value: String,
}

/// One page of Reqres users.
pub type UserPage = Paged<UserRecord>;

/// One page of Reqres colours.
pub type ColorPage = Paged<ColorRecord>;
