//! Built-in baseline data.
//!
//! Used for collections that are not persisted (reports, training, catalog,
//! facilities) and as the default for the query slot.

use chrono::{DateTime, Duration, Utc};

use ecosankalp_core::{
    FacilityId, FacilityType, ModuleId, ModuleType, Price, ProductCategory, ProductId, QueryId,
    QueryStatus, QuestionId, ReportId, ReportStatus, Severity, UserId,
};

use crate::models::{
    Facility, GeoLocation, Product, QuizQuestion, TrainingModule, UserQuery, WasteReport,
};

/// Landing-page counters. Display-only, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStats {
    pub waste_reported: u64,
    pub waste_treated: u64,
    pub active_users: u64,
    pub trees_planted: u64,
}

/// Counters shown on the landing page.
pub const LIVE_STATS: LiveStats = LiveStats {
    waste_reported: 12_847,
    waste_treated: 11_234,
    active_users: 45_672,
    trees_planted: 8_934,
};

fn location(lat: f64, lng: f64, address: &str) -> GeoLocation {
    GeoLocation {
        lat,
        lng,
        address: address.to_owned(),
    }
}

fn question(id: &str, text: &str, options: &[&str], correct_answer: usize) -> QuizQuestion {
    QuizQuestion {
        id: QuestionId::new(id),
        question: text.to_owned(),
        options: options.iter().map(|o| (*o).to_owned()).collect(),
        correct_answer,
    }
}

fn module(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    module_type: ModuleType,
) -> TrainingModule {
    TrainingModule {
        id: ModuleId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        duration: duration.to_owned(),
        module_type,
        is_completed: false,
        is_locked: true,
        content: None,
        quiz: Vec::new(),
    }
}

/// The training chain. Only the first module starts unlocked.
#[must_use]
pub fn training_modules() -> Vec<TrainingModule> {
    vec![
        TrainingModule {
            is_locked: false,
            content: Some(
                "Understanding waste segregation is crucial for effective waste management..."
                    .to_owned(),
            ),
            quiz: vec![
                question(
                    "q1",
                    "Which bin should wet/organic waste go into?",
                    &["Green Bin", "Blue Bin", "Red Bin", "Yellow Bin"],
                    0,
                ),
                question(
                    "q2",
                    "What percentage of household waste is organic?",
                    &["20%", "40%", "60%", "80%"],
                    2,
                ),
            ],
            ..module(
                "1",
                "Source Segregation 101",
                "Learn the fundamentals of waste segregation at source - the first step to responsible waste management.",
                "15 min",
                ModuleType::Video,
            )
        },
        TrainingModule {
            content: Some("Home composting is an excellent way to reduce waste...".to_owned()),
            quiz: vec![question(
                "q3",
                "What is the ideal carbon to nitrogen ratio for composting?",
                &["10:1", "30:1", "50:1", "70:1"],
                1,
            )],
            ..module(
                "2",
                "Composting at Home",
                "Transform your kitchen waste into nutrient-rich compost for your garden.",
                "20 min",
                ModuleType::Article,
            )
        },
        TrainingModule {
            content: Some("Hazardous waste requires special handling...".to_owned()),
            quiz: vec![question(
                "q4",
                "Which of these is considered hazardous waste?",
                &["Fruit peels", "Newspapers", "Used batteries", "Cardboard"],
                2,
            )],
            ..module(
                "3",
                "Hazardous Waste Safety",
                "Identify and safely dispose of hazardous household waste materials.",
                "25 min",
                ModuleType::Video,
            )
        },
        module(
            "4",
            "E-Waste Management",
            "Proper disposal and recycling of electronic waste.",
            "18 min",
            ModuleType::Article,
        ),
        module(
            "5",
            "Plastic Reduction Strategies",
            "Practical tips to reduce single-use plastic in daily life.",
            "12 min",
            ModuleType::Video,
        ),
    ]
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    green_points_price: u32,
    category: ProductCategory,
    in_stock: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::inr(price),
        green_points_price,
        image: "/placeholder.svg".to_owned(),
        category,
        in_stock,
    }
}

/// Marketplace catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "3-Color Dustbin Set",
            "Premium segregation bins with color-coded lids for wet, dry, and hazardous waste.",
            1499,
            500,
            ProductCategory::Dustbin,
            true,
        ),
        product(
            "p2",
            "Home Compost Kit",
            "Complete composting solution with aerator, activator, and guide book.",
            2999,
            1000,
            ProductCategory::Compost,
            true,
        ),
        product(
            "p3",
            "Bio-degradable Bags (100 pcs)",
            "Eco-friendly bags that decompose naturally within 180 days.",
            399,
            150,
            ProductCategory::Bags,
            true,
        ),
        product(
            "p4",
            "Kitchen Counter Bin",
            "Stylish countertop bin with charcoal filter for odor control.",
            899,
            300,
            ProductCategory::Dustbin,
            true,
        ),
        product(
            "p5",
            "Vermicompost Starter Kit",
            "Everything you need to start vermicomposting at home.",
            1999,
            750,
            ProductCategory::Compost,
            false,
        ),
        product(
            "p6",
            "Recycling Guide Poster",
            "Colorful poster showing what goes where in waste segregation.",
            199,
            50,
            ProductCategory::Accessories,
            true,
        ),
    ]
}

/// Processing facilities.
#[must_use]
pub fn facilities() -> Vec<Facility> {
    let facility = |id: &str, name: &str, facility_type, loc, phone: &str, hours: &str| Facility {
        id: FacilityId::new(id),
        name: name.to_owned(),
        facility_type,
        location: loc,
        phone: phone.to_owned(),
        hours: hours.to_owned(),
    };
    vec![
        facility(
            "f1",
            "GreenTech Biomethanization Plant",
            FacilityType::Biomethanization,
            location(28.6139, 77.209, "Sector 15, Noida, UP"),
            "+91 9876543210",
            "8:00 AM - 6:00 PM",
        ),
        facility(
            "f2",
            "EcoRecycle Center",
            FacilityType::Recycling,
            location(28.6292, 77.2181, "MG Road, Gurgaon, HR"),
            "+91 9876543211",
            "9:00 AM - 5:00 PM",
        ),
        facility(
            "f3",
            "Urban Scrap Shop",
            FacilityType::Scrap,
            location(28.5355, 77.391, "Sector 62, Noida, UP"),
            "+91 9876543212",
            "10:00 AM - 8:00 PM",
        ),
    ]
}

/// Historical reports, oldest first, one in each status.
#[must_use]
pub fn reports(now: DateTime<Utc>) -> Vec<WasteReport> {
    let days_ago = |d| now - Duration::days(d);
    vec![
        WasteReport {
            id: ReportId::new("r3"),
            user_id: UserId::new("u3"),
            user_name: "Amit Kumar".to_owned(),
            image_url: "/placeholder.svg".to_owned(),
            location: location(28.5355, 77.391, "Sector 62, Noida"),
            description: "Plastic waste near drain causing blockage.".to_owned(),
            severity: Severity::High,
            status: ReportStatus::Cleaned,
            created_at: days_ago(7),
            verified_at: Some(days_ago(6)),
            cleaned_at: Some(days_ago(3)),
        },
        WasteReport {
            id: ReportId::new("r2"),
            user_id: UserId::new("u2"),
            user_name: "Priya Patel".to_owned(),
            image_url: "/placeholder.svg".to_owned(),
            location: location(28.6292, 77.2181, "MG Road, Gurgaon"),
            description: "Construction debris dumped on footpath.".to_owned(),
            severity: Severity::Medium,
            status: ReportStatus::Verified,
            created_at: days_ago(5),
            verified_at: Some(days_ago(4)),
            cleaned_at: None,
        },
        WasteReport {
            id: ReportId::new("r1"),
            user_id: UserId::new("u1"),
            user_name: "Rahul Sharma".to_owned(),
            image_url: "/placeholder.svg".to_owned(),
            location: location(28.6139, 77.209, "Block A, Sector 15, Noida"),
            description: "Large pile of mixed waste near park entrance. Overflowing for 3 days."
                .to_owned(),
            severity: Severity::High,
            status: ReportStatus::Pending,
            created_at: days_ago(2),
            verified_at: None,
            cleaned_at: None,
        },
    ]
}

/// Default support tickets, oldest first.
#[must_use]
pub fn queries(now: DateTime<Utc>) -> Vec<UserQuery> {
    vec![
        UserQuery {
            id: QueryId::new("q2"),
            name: "Rita Singh".to_owned(),
            email: "rita@example.com".to_owned(),
            subject: "Compost workshop".to_owned(),
            message: "Is there any upcoming composting workshop for residents?".to_owned(),
            created_at: now - Duration::days(7),
            status: QueryStatus::Open,
        },
        UserQuery {
            id: QueryId::new("q1"),
            name: "Suresh Kumar".to_owned(),
            email: "suresh@example.com".to_owned(),
            subject: "Installation of community bins".to_owned(),
            message: "Can the municipality install an additional bin near Block B?".to_owned(),
            created_at: now - Duration::days(3),
            status: QueryStatus::Open,
        },
    ]
}
