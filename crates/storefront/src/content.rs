//! Static page content: blog posts, testimonials, FAQs, the gallery and the
//! loyalty programme.

/// A blog post summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub image_url: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

impl Testimonial {
    /// The rating drawn as filled stars.
    #[must_use]
    pub fn stars(&self) -> String {
        "\u{2605}".repeat(usize::from(self.rating))
    }
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub caption: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "castor-oil-for-hair-growth",
        title: "Castor Oil for Hair Growth: What Actually Works",
        date: "2024-02-12",
        excerpt: "How to use cold-pressed castor oil on your scalp, how often, and what to pair it with.",
        image_url: "/static/img/blog/castor-oil.jpg",
    },
    BlogPost {
        slug: "shea-butter-harmattan",
        title: "Surviving Harmattan with Shea Butter",
        date: "2024-01-08",
        excerpt: "Dry season routines that keep skin soft when the dust arrives.",
        image_url: "/static/img/blog/shea.jpg",
    },
    BlogPost {
        slug: "black-soap-guide",
        title: "A Beginner's Guide to African Black Soap",
        date: "2023-11-20",
        excerpt: "Why black soap is gentle, how to store it, and how to avoid over-drying.",
        image_url: "/static/img/blog/black-soap.jpg",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Chiamaka E.",
        location: "Lagos",
        quote: "The castor oil has done wonders for my edges. Delivery was quick too.",
        rating: 5,
    },
    Testimonial {
        author: "Tunde A.",
        location: "Ibadan",
        quote: "Black soap that doesn't dry out my skin. I'm a customer for life.",
        rating: 5,
    },
    Testimonial {
        author: "Zainab M.",
        location: "Abuja",
        quote: "The Radiant Glow shea butter smells lovely and my skin feels great.",
        rating: 4,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Are your products 100% natural?",
        answer: "Yes. Every product is made from natural, ethically sourced ingredients with no synthetic fragrance.",
    },
    Faq {
        question: "How long does delivery take?",
        answer: "Orders within Lagos arrive in 1-2 business days; other states take 3-5 business days.",
    },
    Faq {
        question: "Can I return a product?",
        answer: "Unopened products can be returned within 7 days of delivery. See our policy page for details.",
    },
    Faq {
        question: "How do loyalty points work?",
        answer: "Registered customers earn points on every purchase. Every 1000 points is worth ₦1000 off an order.",
    },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        url: "/static/img/gallery/workshop.jpg",
        caption: "Our workshop",
    },
    GalleryImage {
        url: "/static/img/gallery/shea-harvest.jpg",
        caption: "Shea harvest season",
    },
    GalleryImage {
        url: "/static/img/gallery/market.jpg",
        caption: "At the weekend market",
    },
    GalleryImage {
        url: "/static/img/gallery/packing.jpg",
        caption: "Packing orders",
    },
];

/// A rung of the loyalty programme, lowest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyaltyTier {
    pub name: &'static str,
    pub perk: &'static str,
}

pub const LOYALTY_TIERS: &[LoyaltyTier] = &[
    LoyaltyTier {
        name: "Seedling",
        perk: "Where every new member starts: earn points on every order.",
    },
    LoyaltyTier {
        name: "Blossom",
        perk: "Early access to new products and seasonal bundles.",
    },
    LoyaltyTier {
        name: "Radiant",
        perk: "Free delivery and a gift on your birthday.",
    },
];

/// Points credited when a shopper creates an account.
pub const SIGNUP_BONUS_POINTS: u64 = 200;

/// Naira spent per loyalty point earned.
pub const NAIRA_PER_POINT: u64 = 100;

/// Points a purchase of `total_kobo` earns.
#[must_use]
pub const fn loyalty_points(total_kobo: u64) -> u64 {
    total_kobo / 100 / NAIRA_PER_POINT
}
