//! Fixed domain-keyword configuration.
//!
//! The domain table is immutable, process-wide static configuration,
//! never mutated at runtime, so reads need no synchronization. Table
//! declaration order is the documented tie-break order for equal
//! classifier scores.

/// A named semantic category with a representative keyword list.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Weight of a domain keyword in weighted scoring.
///
/// Longer keywords are more specific, so matches on them count double.
pub fn keyword_weight(keyword: &str) -> usize {
    if keyword.len() > 4 {
        2
    } else {
        1
    }
}

/// The fixed classification vocabulary: one entry per domain.
pub static DOMAIN_TABLE: &[Domain] = &[
    Domain {
        name: "technology",
        keywords: &[
            "software", "database", "api", "server", "network", "cloud", "code", "developer",
            "deployment", "encryption",
        ],
    },
    Domain {
        name: "finance",
        keywords: &[
            "budget", "revenue", "profit", "expense", "investment", "account", "balance", "audit",
            "fiscal", "dividend",
        ],
    },
    Domain {
        name: "invoice",
        keywords: &[
            "invoice",
            "bill",
            "payment",
            "due date",
            "total",
            "subtotal",
            "tax",
            "amount due",
            "billing",
        ],
    },
    Domain {
        name: "legal",
        keywords: &[
            "law", "court", "attorney", "contract", "clause", "liability", "plaintiff",
            "defendant", "jurisdiction", "statute",
        ],
    },
    Domain {
        name: "medical",
        keywords: &[
            "patient", "diagnosis", "treatment", "prescription", "clinical", "symptom", "dosage",
            "physician", "hospital",
        ],
    },
    Domain {
        name: "human-resources",
        keywords: &[
            "employee", "salary", "recruitment", "onboarding", "payroll", "benefits",
            "performance", "vacation", "resignation",
        ],
    },
    Domain {
        name: "education",
        keywords: &[
            "student", "course", "curriculum", "exam", "lecture", "tuition", "semester",
            "enrollment", "syllabus",
        ],
    },
    Domain {
        name: "marketing",
        keywords: &[
            "campaign", "brand", "audience", "conversion", "engagement", "advertising",
            "newsletter", "promotion", "outreach",
        ],
    },
    Domain {
        name: "science",
        keywords: &[
            "research", "experiment", "hypothesis", "analysis", "laboratory", "measurement",
            "publication", "dataset",
        ],
    },
    Domain {
        name: "travel",
        keywords: &[
            "flight", "hotel", "itinerary", "booking", "destination", "passport", "luggage",
            "reservation",
        ],
    },
];

/// Vocabulary hint passed to the external classifier: the domain names.
pub fn vocabulary() -> Vec<&'static str> {
    DOMAIN_TABLE.iter().map(|d| d.name).collect()
}
