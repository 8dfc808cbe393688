use crate::{id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub username : String,
    pub email    : String,
    pub password : Password,
}
