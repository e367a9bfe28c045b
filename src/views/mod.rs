//! Server-side HTML for the marketing page

pub mod landing;
pub mod pricing;

pub use landing::{render_landing_page, LandingPage};
pub use pricing::{cards_for, format_brl, registration_link, render_pricing_card, PricingCard};
