pub const DEFAULT_SPECIALIZATIONS: &[&str] = &[
    "General Practice",
    "Family Medicine",
    "Internal Medicine",
    "Pediatrics",
    "Obstetrics & Gynecology",
    "Dermatology",
    "Cardiology",
    "Psychiatry",
    "Endocrinology",
    "Nutrition & Dietetics",
];

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "General Consultation",
    "Follow-up",
    "Mental Health",
    "Women's Health",
    "Chronic Care",
    "Prescription Renewal",
];

pub fn default_specializations() -> Vec<String> {
    DEFAULT_SPECIALIZATIONS.iter().map(|s| s.to_string()).collect()
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}
