pub mod fetch_current_account;
pub mod login_account;
pub mod logout_account;
pub mod refresh_token;
pub mod register_account;
pub mod update_profile;
