//! Static Site Content
//!
//! Navigation links, footer links and testimonials.

/// Text link
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

/// Flyout menu with featured cities and vehicle categories
pub struct NavCategory {
    pub name: &'static str,
    pub featured: &'static [NavLink],
    pub categories: &'static [NavLink],
}

pub const NAV_CATEGORIES: &[NavCategory] = &[NavCategory {
    name: "Find a spot",
    featured: &[
        link("Munich", "/spots"),
        link("Berlin", "/spots"),
        link("Cologne", "/spots"),
    ],
    categories: &[
        link("Bike", "/spots"),
        link("Cargo Bike", "/spots"),
        link("Car", "/spots"),
    ],
}];

pub const NAV_PAGES: &[NavLink] = &[
    link("Offer a spot", "/offer-a-spot"),
    link("About us", "/about-us"),
];

pub const FOOTER_CITIES: &[NavLink] = &[
    link("Munich", "/spots"),
    link("Berlin", "/spots"),
    link("Cologne", "/spots"),
    link("Frankfurt", "/spots"),
    link("London", "/spots"),
];

pub const FOOTER_COMPANY: &[NavLink] = &[
    link("Who we are", "#"),
    link("Sustainability", "#"),
    link("Press", "#"),
    link("Careers", "#"),
    link("Terms & Conditions", "#"),
    link("Privacy", "#"),
];

pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I was happy to finally find a parking spot, without needing to reach out to 50 people.",
        attribution: "Sarah Peters, Munich",
    },
    Testimonial {
        quote: "Happy to rent my spot and make some money off my unused space.",
        attribution: "Kelly McPherson, Cologne",
    },
    Testimonial {
        quote: "Driving a car in Berlin was always a hassle, now I found a parking spot at my workplace.",
        attribution: "Chris Paul, Berlin",
    },
];
