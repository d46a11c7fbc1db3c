//! HTTP request handlers
//!
//! This module provides the HTTP handlers for the Vireo REST API.

pub mod models;

mod login;
mod publications;
mod users;

pub use login::login;
pub use publications::{
    create_publication, delete_publication, feed, get_publication, like_publication,
    list_user_publications, unlike_publication, update_publication,
};
pub use users::{
    delete_user, follow_user, get_user, list_followers, list_following, register, search_users,
    unfollow_user, update_password, update_user,
};
