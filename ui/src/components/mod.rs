pub mod address_section;
pub mod amenities_section;
pub mod general_details_section;
pub mod images_section;
pub mod modal;
pub mod price_section;
pub mod property_details_modal;
pub mod toast;

pub use address_section::AddressSection;
pub use amenities_section::AmenitiesSection;
pub use general_details_section::GeneralDetailsSection;
pub use images_section::ImagesSection;
pub use modal::Modal;
pub use price_section::PriceSection;
pub use property_details_modal::PropertyDetailsModal;
pub use toast::ToastContainer;
