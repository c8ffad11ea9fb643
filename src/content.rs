use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slug every unknown location falls back to.
pub const DEFAULT_LOCATION: &str = "london";
/// Slug every unknown industry falls back to.
pub const DEFAULT_INDUSTRY: &str = "home-services";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPage {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub population: String,
    pub businesses: String,
    pub search_volume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryPage {
    pub slug: String,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub services: Vec<String>,
    pub benefits: Vec<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { text: String },
    List { items: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub body: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub desc: String,
    pub features: Vec<String>,
    pub popular: bool,
}

/// The site's static content as immutable slug-keyed lookup tables, built
/// once at process start.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    locations: HashMap<String, LocationPage>,
    industries: HashMap<String, IndustryPage>,
    posts: HashMap<String, BlogPost>,
    pricing: Vec<PricingPlan>,
}

/// Lowercases and collapses non-alphanumeric runs to single dashes, so
/// "Milton Keynes" and "milton-keynes" select the same record.
pub fn normalize_slug(raw: &str) -> String {
    let re = regex::Regex::new(r"[^a-z0-9]+").unwrap();
    re.replace_all(&raw.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

impl ContentCatalog {
    pub fn load() -> Self {
        let locations = location_pages()
            .into_iter()
            .map(|page| (page.slug.clone(), page))
            .collect();
        let industries = industry_pages()
            .into_iter()
            .map(|page| (page.slug.clone(), page))
            .collect();
        let posts = blog_posts()
            .into_iter()
            .map(|post| (post.slug.clone(), post))
            .collect();

        Self {
            locations,
            industries,
            posts,
            pricing: pricing_plans(),
        }
    }

    /// Unknown slugs select the London page, mirroring the live site.
    pub fn location(&self, slug: &str) -> &LocationPage {
        self.locations
            .get(&normalize_slug(slug))
            .or_else(|| self.locations.get(DEFAULT_LOCATION))
            .expect("catalog always contains the default location")
    }

    /// Unknown slugs select the home-services page, mirroring the live site.
    pub fn industry(&self, slug: &str) -> &IndustryPage {
        self.industries
            .get(&normalize_slug(slug))
            .or_else(|| self.industries.get(DEFAULT_INDUSTRY))
            .expect("catalog always contains the default industry")
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.get(&normalize_slug(slug))
    }

    pub fn locations(&self) -> Vec<&LocationPage> {
        let mut pages: Vec<_> = self.locations.values().collect();
        pages.sort_by(|a, b| a.name.cmp(&b.name));
        pages
    }

    pub fn industries(&self) -> Vec<&IndustryPage> {
        let mut pages: Vec<_> = self.industries.values().collect();
        pages.sort_by(|a, b| a.name.cmp(&b.name));
        pages
    }

    /// Newest first, like the blog index.
    pub fn posts(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<_> = self.posts.values().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    pub fn pricing(&self) -> &[PricingPlan] {
        &self.pricing
    }
}

fn loc(
    slug: &str,
    name: &str,
    description: &str,
    population: &str,
    businesses: &str,
    search_volume: &str,
) -> LocationPage {
    LocationPage {
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        population: population.to_string(),
        businesses: businesses.to_string(),
        search_volume: search_volume.to_string(),
    }
}

fn location_pages() -> Vec<LocationPage> {
    vec![
        loc(
            "london",
            "London",
            "London is the UK's largest market for local businesses. With over 9 million residents and millions of daily searches, ranking well in London can transform your business.",
            "9+ million",
            "1 million+",
            "High competition",
        ),
        loc(
            "reading",
            "Reading",
            "Reading is a thriving business hub in Berkshire with excellent transport links to London. Local businesses here benefit from a wealthy commuter population seeking quality services.",
            "230,000+",
            "15,000+",
            "Medium competition",
        ),
        loc(
            "guildford",
            "Guildford",
            "Guildford is an affluent town in Surrey with high disposable income residents. Local businesses can capture premium customers through effective local SEO.",
            "150,000+",
            "8,000+",
            "Medium competition",
        ),
        loc(
            "oxford",
            "Oxford",
            "Oxford combines a historic university city with a modern business economy. Local businesses benefit from both student and professional populations.",
            "155,000+",
            "10,000+",
            "Medium competition",
        ),
        loc(
            "milton-keynes",
            "Milton Keynes",
            "Milton Keynes is one of the UK's fastest-growing cities with a young, tech-savvy population. Perfect for businesses looking to establish local dominance.",
            "270,000+",
            "12,000+",
            "Medium competition",
        ),
        loc(
            "brighton",
            "Brighton",
            "Brighton is a vibrant coastal city with a creative economy and strong tourism sector. Local businesses can tap into both residents and visitors.",
            "290,000+",
            "20,000+",
            "High competition",
        ),
        loc(
            "bournemouth",
            "Bournemouth",
            "Bournemouth is a popular coastal town with a growing digital economy. Local businesses benefit from tourism and a quality-focused resident population.",
            "185,000+",
            "10,000+",
            "Medium competition",
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn industry_pages() -> Vec<IndustryPage> {
    vec![
        IndustryPage {
            slug: "home-services".to_string(),
            name: "Home Services & Trades".to_string(),
            headline: "SEO for Home Services & Trades".to_string(),
            description: "We help plumbers, electricians, builders, HVAC technicians, landscapers, and other home service providers dominate local search results and get more calls.".to_string(),
            services: strings(&[
                "Emergency service keywords targeting",
                "Service area page creation",
                "Google Business Profile optimisation",
                "Review generation campaigns",
                "Before/after portfolio pages",
                "Local citation building",
            ]),
            benefits: strings(&[
                "Rank for 'near me' searches",
                "Appear in Google Maps 3-pack",
                "Get more emergency callouts",
                "Build trust with reviews",
                "Target specific service areas",
                "Track calls and enquiries",
            ]),
            examples: strings(&[
                "Plumbers", "Electricians", "Builders", "Roofers", "HVAC", "Landscapers",
                "Painters", "Carpenters",
            ]),
        },
        IndustryPage {
            slug: "professional-services".to_string(),
            name: "Professional Services".to_string(),
            headline: "SEO for Professional Services".to_string(),
            description: "We help accountants, lawyers, consultants, financial advisors, and B2B service providers attract high-value clients through strategic local SEO.".to_string(),
            services: strings(&[
                "Industry-specific keyword research",
                "Thought leadership content",
                "Professional directory listings",
                "LinkedIn integration",
                "Case study pages",
                "Service page optimisation",
            ]),
            benefits: strings(&[
                "Attract high-value clients",
                "Build professional authority",
                "Rank for specialist searches",
                "Generate qualified leads",
                "Showcase expertise",
                "Dominate local professional searches",
            ]),
            examples: strings(&[
                "Accountants", "Lawyers", "Consultants", "Financial Advisors", "Architects",
                "Engineers", "IT Services",
            ]),
        },
        IndustryPage {
            slug: "retail".to_string(),
            name: "Retail & E-commerce".to_string(),
            headline: "SEO for Retail & E-commerce".to_string(),
            description: "We help local shops, boutiques, and online stores increase foot traffic and online sales through targeted local and e-commerce SEO strategies.".to_string(),
            services: strings(&[
                "Product page optimisation",
                "Local inventory ads setup",
                "Google Shopping integration",
                "Category page SEO",
                "Store locator pages",
                "Review and rating schema",
            ]),
            benefits: strings(&[
                "Increase foot traffic",
                "Boost online visibility",
                "Compete with big retailers",
                "Drive local purchases",
                "Showcase product inventory",
                "Build customer loyalty",
            ]),
            examples: strings(&[
                "Clothing Boutiques", "Gift Shops", "Hardware Stores", "Bookshops",
                "Sports Shops", "Electronics",
            ]),
        },
        IndustryPage {
            slug: "health-wellness".to_string(),
            name: "Health & Wellness".to_string(),
            headline: "SEO for Health & Wellness".to_string(),
            description: "We help dental practices, clinics, gyms, physiotherapists, and wellness centres attract more patients and members through healthcare-focused SEO.".to_string(),
            services: strings(&[
                "HIPAA-compliant content strategy",
                "Appointment booking integration",
                "Medical schema markup",
                "Patient review management",
                "Condition-specific pages",
                "Insurance and pricing pages",
            ]),
            benefits: strings(&[
                "Attract new patients",
                "Rank for symptom searches",
                "Build medical authority",
                "Increase appointments",
                "Manage online reputation",
                "Compete locally",
            ]),
            examples: strings(&[
                "Dentists", "Physios", "Gyms", "Chiropractors", "Opticians",
                "Private Clinics", "Mental Health",
            ]),
        },
        IndustryPage {
            slug: "food-hospitality".to_string(),
            name: "Food & Hospitality".to_string(),
            headline: "SEO for Food & Hospitality".to_string(),
            description: "We help restaurants, cafes, hotels, and catering businesses get more bookings and customers through local SEO and reputation management.".to_string(),
            services: strings(&[
                "Menu page optimisation",
                "Reservation system integration",
                "Food photography SEO",
                "Event and catering pages",
                "Multi-location SEO",
                "Delivery platform optimisation",
            ]),
            benefits: strings(&[
                "Increase reservations",
                "Rank for cuisine searches",
                "Attract tourists and locals",
                "Boost delivery orders",
                "Manage reviews effectively",
                "Promote events and specials",
            ]),
            examples: strings(&[
                "Restaurants", "Cafes", "Hotels", "Pubs", "Catering", "Food Trucks", "Bakeries",
            ]),
        },
        IndustryPage {
            slug: "beauty".to_string(),
            name: "Beauty & Personal Care".to_string(),
            headline: "SEO for Beauty & Personal Care".to_string(),
            description: "We help salons, spas, barbers, and beauty service providers attract more clients through visually-focused local SEO and booking optimisation.".to_string(),
            services: strings(&[
                "Booking system integration",
                "Before/after gallery pages",
                "Treatment page optimisation",
                "Local beauty directory listings",
                "Review generation strategy",
                "Social media integration",
            ]),
            benefits: strings(&[
                "Fill appointment books",
                "Showcase your work",
                "Rank for treatment searches",
                "Attract repeat clients",
                "Build a strong reputation",
                "Stand out from competitors",
            ]),
            examples: strings(&[
                "Hair Salons", "Barbers", "Nail Bars", "Spas", "Aestheticians", "Tanning Studios",
            ]),
        },
    ]
}

fn para(text: &str) -> ContentBlock {
    ContentBlock::Paragraph { text: text.to_string() }
}

fn heading(text: &str) -> ContentBlock {
    ContentBlock::Heading { text: text.to_string() }
}

fn list(items: &[&str]) -> ContentBlock {
    ContentBlock::List { items: strings(items) }
}

fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "how-long-does-seo-take".to_string(),
            title: "How Long Does SEO Take to Work?".to_string(),
            excerpt: "The honest answer: it depends. But here's a realistic timeline for when you can expect to see results from SEO.".to_string(),
            date: "2024-12-15".to_string(),
            read_time: "5 min read".to_string(),
            category: "SEO Basics".to_string(),
            body: vec![
                para("It's the first question every business owner asks: \"How long until I see results?\" The honest answer is: it depends. But let me give you a realistic timeline based on what we see with our clients."),
                heading("The Short Answer"),
                para("For most local businesses, you can expect to see meaningful improvements in 3-6 months. Some quicker wins might appear in 4-8 weeks, but significant ranking changes typically take longer."),
                heading("What Affects the Timeline?"),
                list(&[
                    "Your current website condition - A brand new site takes longer than improving an existing one",
                    "Competition in your area - \"Plumber London\" is harder than \"Plumber Guildford\"",
                    "Your Google history - Sites with penalties or issues take longer to recover",
                    "How much work is needed - Some sites need minor tweaks, others need major overhauls",
                ]),
                heading("The Bottom Line"),
                para("SEO is a medium-term investment, not a quick fix. If someone promises page one in two weeks, walk away."),
            ],
        },
        BlogPost {
            slug: "local-seo-checklist".to_string(),
            title: "Local SEO Checklist: 10 Things You Can Do Today".to_string(),
            excerpt: "A simple, jargon-free checklist to improve your local search visibility. No technical knowledge required.".to_string(),
            date: "2024-12-10".to_string(),
            read_time: "7 min read".to_string(),
            category: "Guides".to_string(),
            body: vec![
                para("You don't need an agency for everything. Here are ten things any business owner can do this afternoon to improve local visibility."),
                list(&[
                    "Claim and verify your Google Business Profile",
                    "Add your opening hours, photos and services",
                    "Make sure your name, address and phone number match everywhere",
                    "Ask your last five happy customers for a review",
                    "Reply to every review, good or bad",
                    "Add your town and trade to your homepage title",
                    "Create a page for each area you serve",
                    "Check your site loads in under three seconds on mobile",
                    "List your business in two or three local directories",
                    "Post a photo of recent work to your profile",
                ]),
                para("None of this is complicated. It just takes consistency - which is exactly why most of your competitors won't do it."),
            ],
        },
        BlogPost {
            slug: "google-business-profile-tips".to_string(),
            title: "Google Business Profile: 7 Tips to Get More Customers".to_string(),
            excerpt: "Your Google Business Profile is free and powerful. Here's how to make it work harder for your business.".to_string(),
            date: "2024-12-05".to_string(),
            read_time: "6 min read".to_string(),
            category: "Google".to_string(),
            body: vec![
                para("For local searches, your Google Business Profile often matters more than your website. It's free, and most businesses barely touch it."),
                heading("Make It Work Harder"),
                list(&[
                    "Choose the most specific primary category you can",
                    "Upload photos monthly - profiles with photos get more clicks",
                    "Use the services section to list every job you do",
                    "Answer the Q&A section before strangers do",
                    "Post offers and updates - they appear in search",
                    "Keep your hours accurate, especially around holidays",
                    "Respond to reviews within a few days",
                ]),
                para("A complete, active profile signals to Google that your business is real and open. That alone puts you ahead of half the map pack."),
            ],
        },
        BlogPost {
            slug: "website-mistakes-costing-customers".to_string(),
            title: "5 Website Mistakes That Are Costing You Customers".to_string(),
            excerpt: "Common website problems that drive visitors away - and how to fix them without spending a fortune.".to_string(),
            date: "2024-11-28".to_string(),
            read_time: "4 min read".to_string(),
            category: "Web Design".to_string(),
            body: vec![
                para("Most trade websites lose customers in the first ten seconds. These are the five problems we fix most often."),
                list(&[
                    "No phone number above the fold - make it tappable on mobile",
                    "Slow loading - compress images and drop the sliders",
                    "No prices or price guidance - even \"from £X\" beats silence",
                    "No reviews or photos of real work - stock photos kill trust",
                    "A contact form with ten fields - name, number and a message is enough",
                ]),
                para("Fix these before spending a penny on ads. Traffic to a leaky site is money down the drain."),
            ],
        },
    ]
}

fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Website + SEO Setup".to_string(),
            price: "£399.99".to_string(),
            period: "One-off".to_string(),
            desc: "Best if you need a clean foundation that can rank.".to_string(),
            features: strings(&[
                "Fast, responsive website build",
                "On-page SEO structure (titles, headings, internal linking)",
                "Technical basics (indexing signals, sitemap/crawl hygiene)",
                "Tracking setup so you can measure enquiries",
            ]),
            popular: false,
        },
        PricingPlan {
            name: "Monthly Growth".to_string(),
            price: "£150".to_string(),
            period: "per month".to_string(),
            desc: "Ongoing work to grow rankings and enquiries month after month.".to_string(),
            features: strings(&[
                "Technical fixes and maintenance",
                "Content + page improvements",
                "Local SEO support",
                "Monthly priorities and recommendations",
            ]),
            popular: true,
        },
        PricingPlan {
            name: "Backlinks Add-on".to_string(),
            price: "£100".to_string(),
            period: "per month".to_string(),
            desc: "Consistent link velocity and simple reporting.".to_string(),
            features: strings(&[
                "30 backlinks per month",
                "Quality link building",
                "Monthly reporting",
                "Authority growth",
            ]),
            popular: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_all_records() {
        let catalog = ContentCatalog::load();
        assert_eq!(catalog.locations().len(), 7);
        assert_eq!(catalog.industries().len(), 6);
        assert_eq!(catalog.posts().len(), 4);
        assert_eq!(catalog.pricing().len(), 3);
    }

    #[test]
    fn location_lookup_with_fallback() {
        let catalog = ContentCatalog::load();
        assert_eq!(catalog.location("reading").name, "Reading");
        assert_eq!(catalog.location("Milton Keynes").name, "Milton Keynes");
        assert_eq!(catalog.location("atlantis").name, "London");
    }

    #[test]
    fn industry_lookup_with_fallback() {
        let catalog = ContentCatalog::load();
        assert_eq!(catalog.industry("beauty").name, "Beauty & Personal Care");
        assert_eq!(catalog.industry("zeppelin-repair").name, "Home Services & Trades");
    }

    #[test]
    fn post_lookup_has_no_fallback() {
        let catalog = ContentCatalog::load();
        assert!(catalog.post("local-seo-checklist").is_some());
        assert!(catalog.post("definitely-not-a-post").is_none());
    }

    #[test]
    fn posts_are_newest_first() {
        let catalog = ContentCatalog::load();
        let posts = catalog.posts();
        assert_eq!(posts[0].slug, "how-long-does-seo-take");
        assert_eq!(posts[3].slug, "website-mistakes-costing-customers");
    }

    #[test]
    fn slugs_are_normalised() {
        assert_eq!(normalize_slug("Milton Keynes"), "milton-keynes");
        assert_eq!(normalize_slug("  Home Services & Trades "), "home-services-trades");
        assert_eq!(normalize_slug("reading"), "reading");
    }
}
