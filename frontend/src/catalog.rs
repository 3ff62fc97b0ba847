//! Static site content: the service price list and the bundled placeholder
//! gallery shown while no uploaded photos are available.
//!
//! Defined at build time; nothing here is fetched.

pub struct ServiceItem {
    pub label: &'static str,
    pub price: &'static str,
}

pub struct ServiceCategory {
    pub name: &'static str,
    pub items: &'static [ServiceItem],
}

pub const SERVICE_MENU: &[ServiceCategory] = &[
    ServiceCategory {
        name: "Threading",
        items: &[
            ServiceItem { label: "Eye Brow", price: "£5" },
            ServiceItem { label: "Upper Lip", price: "£3" },
            ServiceItem { label: "Chin", price: "£3" },
            ServiceItem { label: "Forehead", price: "£3" },
            ServiceItem { label: "Neck", price: "£3" },
            ServiceItem { label: "Side Face", price: "£5" },
            ServiceItem { label: "Full Face", price: "£15" },
        ],
    },
    ServiceCategory {
        name: "Face Waxing",
        items: &[
            ServiceItem { label: "Eye Brows", price: "£6" },
            ServiceItem { label: "Upper Lip", price: "£4" },
            ServiceItem { label: "Chin", price: "£4" },
            ServiceItem { label: "Forehead", price: "£4" },
            ServiceItem { label: "Neck", price: "£4" },
            ServiceItem { label: "Side Face", price: "£6" },
            ServiceItem { label: "Full Face", price: "£18" },
        ],
    },
    ServiceCategory {
        name: "Body Waxing",
        items: &[
            ServiceItem { label: "Half Arm", price: "£12" },
            ServiceItem { label: "Full Arm", price: "£18" },
            ServiceItem { label: "Under Arm", price: "£8" },
            ServiceItem { label: "Half Leg", price: "£15" },
            ServiceItem { label: "Full Leg", price: "£25" },
            ServiceItem { label: "Full Body (Except Bikini)", price: "£60" },
        ],
    },
    ServiceCategory {
        name: "Pedicure & Manicure",
        items: &[
            ServiceItem { label: "Pedicure", price: "£25" },
            ServiceItem { label: "Manicure", price: "£20" },
        ],
    },
    ServiceCategory {
        name: "Eyelash & Tinting",
        items: &[
            ServiceItem { label: "Full Set Cluster", price: "From £18" },
            ServiceItem { label: "Party Lashes", price: "£8" },
            ServiceItem { label: "Eye Brows Tinting", price: "£6" },
            ServiceItem { label: "Eye Lashes Tinting", price: "£8" },
        ],
    },
    ServiceCategory {
        name: "Facial & Massage",
        items: &[
            ServiceItem { label: "Mini Facial", price: "£15" },
            ServiceItem { label: "Full Facial (Cleansing/Whitening/Gold)", price: "£25" },
            ServiceItem { label: "Herbal Facial", price: "£30" },
            ServiceItem { label: "Head Massage (With/Without Herbal Oil)", price: "£15" },
        ],
    },
    ServiceCategory {
        name: "Henna & Hair",
        items: &[
            ServiceItem { label: "One Hand / Foot Henna", price: "From £5" },
            ServiceItem { label: "Both Hands / Feet Henna", price: "From £10" },
            ServiceItem { label: "Hair Trimming", price: "£7" },
            ServiceItem { label: "Any Other Cut", price: "From £12" },
            ServiceItem { label: "Children (Under 10)", price: "£10" },
        ],
    },
    ServiceCategory {
        name: "Makeup",
        items: &[
            ServiceItem { label: "Party Makeup", price: "From £30" },
            ServiceItem { label: "Bridal Makeup", price: "From £150" },
        ],
    },
];

pub struct PlaceholderImage {
    pub url: &'static str,
    pub caption: &'static str,
}

/// Bundled sample set rendered whenever the live gallery has nothing to show.
pub const GALLERY_PLACEHOLDERS: &[PlaceholderImage] = &[
    PlaceholderImage {
        url: "https://images.pexels.com/photos/5128078/pexels-photo-5128078.jpeg",
        caption: "Eyebrow Threading",
    },
    PlaceholderImage {
        url: "https://images.pexels.com/photos/4621787/pexels-photo-4621787.jpeg",
        caption: "Facial & Massage",
    },
    PlaceholderImage {
        url: "https://images.pexels.com/photos/7561210/pexels-photo-7561210.jpeg",
        caption: "Manicure & Pedicure",
    },
    PlaceholderImage {
        url: "https://images.pexels.com/photos/8751788/pexels-photo-8751788.jpeg",
        caption: "Professional Tools",
    },
    PlaceholderImage {
        url: "https://images.pexels.com/photos/4621783/pexels-photo-4621783.jpeg",
        caption: "Spa Treatments",
    },
    PlaceholderImage {
        url: "https://images.unsplash.com/photo-1630843599725-32ead7671867",
        caption: "Nail Art & Design",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_has_a_label_and_price() {
        assert!(!SERVICE_MENU.is_empty());
        for category in SERVICE_MENU {
            assert!(!category.name.is_empty());
            assert!(!category.items.is_empty(), "{} has no items", category.name);
            for item in category.items {
                assert!(!item.label.is_empty());
                assert!(!item.price.is_empty(), "{} is unpriced", item.label);
            }
        }
    }

    #[test]
    fn placeholder_set_is_fixed_and_captioned() {
        assert_eq!(GALLERY_PLACEHOLDERS.len(), 6);
        for placeholder in GALLERY_PLACEHOLDERS {
            assert!(placeholder.url.starts_with("https://"));
            assert!(!placeholder.caption.is_empty());
        }
    }
}
