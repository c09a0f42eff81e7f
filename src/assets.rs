// src/assets.rs

/// The ten fixed image assets a listing can reference. The paths are
/// opaque to the core; the browser resolves them.
pub const LISTING_IMAGES: [&str; 10] = [
    "/images/house1.jpg",
    "/images/house2.jpg",
    "/images/house3.jpg",
    "/images/house4.jpg",
    "/images/house5.jpg",
    "/images/house6.jpg",
    "/images/house7.jpg",
    "/images/house8.jpg",
    "/images/house9.jpg",
    "/images/house10.jpg",
];

/// Contact line shown with full listing details.
pub const CONTACT_PHONE: &str = "+62 123 456 789";
