mod claim;
mod menu;
mod role;
mod route;

#[rustfmt::skip]
pub use {
    claim::{AuthClaim, LoginOutcome},
    menu::MenuItem,
    role::Role,
    route::Route,
};
